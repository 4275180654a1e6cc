//! # Tickerbridge Core
//!
//! Domain types, upstream adapters, and HTTP transport contracts for the
//! tickerbridge financial data proxy.
//!
//! ## Overview
//!
//! This crate holds everything the proxy needs below the HTTP server:
//!
//! - **Response models** for filings, daily OHLCV bars, and news headlines
//! - **Validated requests** built from caller input before any upstream call
//! - **Provider adapters** for SEC-API and Finnhub that reproduce their wire formats
//! - **Structured upstream errors** carrying provider, endpoint, and status
//! - **HTTP client abstraction** so adapters run against fakes in tests
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (SEC-API, Finnhub) and the shared JSON fetch helper |
//! | [`data_source`] | Request/response contracts and upstream error types |
//! | [`domain`] | Domain models (FilingResult, OhlcvBar, NewsItem) and `UtcDateTime` |
//! | [`error`] | Validation errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`source`] | Provider identifiers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use secrecy::SecretString;
//! use tickerbridge_core::{CandlesRequest, FinnhubAdapter, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = FinnhubAdapter::new(
//!         Arc::new(ReqwestHttpClient::new()),
//!         SecretString::from(std::env::var("FINNHUB_API_KEY")?),
//!     );
//!
//!     let request = CandlesRequest::new("AAPL", "2024-01-01", "2024-01-31")?;
//!     let series = adapter.candles(&request).await?;
//!
//!     for bar in &series.ohlcv {
//!         println!("{} close={:.2}", bar.date, bar.close);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  HTTP handler   │
//! └────────┬────────┘
//!          │ validated request
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Provider        │────▶│ HTTP Client      │
//! │ Adapter         │     │ (reqwest/fake)   │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Domain Models   │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use tickerbridge_core::{UpstreamError, UpstreamErrorKind};
//!
//! fn describe(error: &UpstreamError) -> &'static str {
//!     match error.kind() {
//!         UpstreamErrorKind::Status => "provider rejected the call",
//!         UpstreamErrorKind::Transport => "provider unreachable",
//!         UpstreamErrorKind::Decode | UpstreamErrorKind::Malformed => "unexpected payload",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - API keys are held as `secrecy::SecretString` and never logged
//! - Logged URLs have their query string (and so the Finnhub token) stripped

pub mod adapters;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod source;

// Adapter implementations
pub use adapters::{FinnhubAdapter, SecApiAdapter};

// Request/response contracts
pub use data_source::{
    CandlesRequest, Endpoint, FilingsBatch, FilingsRequest, NewsBatch, NewsRequest, OhlcvSeries,
    UpstreamError, UpstreamErrorKind, DEFAULT_FILINGS_LIMIT, DEFAULT_FORMS, DEFAULT_NEWS_DAYS,
};

// Domain models
pub use domain::{FilingResult, NewsItem, OhlcvBar, UtcDateTime};

// Error types
pub use error::ValidationError;

// HTTP client types
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};

// Source identifiers
pub use source::ProviderId;
