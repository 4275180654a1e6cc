//! # Tickerbridge Server
//!
//! A small JSON proxy in front of SEC-API and Finnhub. Callers send one
//! request shape per endpoint and get back normalized filings, daily bars, or
//! news without ever holding a provider key.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`app`] | Router assembly, middleware, graceful shutdown |
//! | [`config`] | CLI flags with environment fallbacks |
//! | [`dto`] | Request bodies and their validation |
//! | [`error`] | `ApiError` and its JSON response mapping |
//! | [`routes`] | Endpoint handlers |
//! | [`state`] | Shared adapters and clock |
//! | [`telemetry`] | `tracing` subscriber setup |
//!
//! ## Embedding
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use tickerbridge_core::ReqwestHttpClient;
//! use tickerbridge_server::{create_app, ApiKeys, AppState};
//!
//! let state = AppState::new(Arc::new(ReqwestHttpClient::new()), ApiKeys::default(), 10_000);
//! let app = create_app(state);
//! ```

pub mod app;
pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::{create_app, shutdown_signal};
pub use config::{ApiKeys, Cli, LogFormat, ProxyConfig};
pub use error::{ApiError, ApiResult, ServerError};
pub use state::AppState;
