//! Route handlers.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /healthz` | [`health::healthz`] |
//! | `POST /filings/search` | [`filings::search`] |
//! | `POST /market/ohlcv` | [`market::ohlcv`] |
//! | `POST /news/search` | [`news::search`] |
//! | `POST /xbrl/normalize` | [`xbrl::normalize`] |
//!
//! Each upstream-backed handler validates the body first, then asks the state
//! for its adapter, then makes exactly one provider call.

pub mod filings;
pub mod health;
pub mod market;
pub mod news;
pub mod xbrl;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("{method} {}", uri.path()))
}
