//! API error type and its HTTP mapping.
//!
//! Every handler returns [`ApiResult`]. Failures become a JSON body of the
//! form `{"error": "<message>"}` with the status declared by the variant.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tickerbridge_core::{UpstreamError, ValidationError};

use crate::dto::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unusable caller input (400).
    #[error(transparent)]
    BadRequest(#[from] ValidationError),

    /// Upstream credential not configured (500).
    #[error("Server missing {key}")]
    ServerMisconfigured { key: &'static str },

    /// Provider call failed (500).
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Endpoint exists but is deliberately unimplemented (501).
    #[error("{0}")]
    NotImplemented(&'static str),

    #[error("no route for {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Self::ServerMisconfigured { .. } | Self::Upstream(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        match &self {
            Self::Upstream(upstream) => tracing::error!(
                status = status.as_u16(),
                provider = %upstream.provider(),
                endpoint = %upstream.endpoint(),
                code = upstream.code(),
                upstream_status = upstream.upstream_status(),
                error = %message,
                "upstream call failed"
            ),
            _ if status.is_server_error() => {
                tracing::error!(status = status.as_u16(), error = %message, "request failed")
            }
            _ => tracing::warn!(status = status.as_u16(), error = %message, "request rejected"),
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Startup failures reported by the `tickerbridge` binary.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("telemetry setup failed: {0}")]
    Telemetry(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Telemetry(_) => 2,
            Self::Io(_) => 10,
        }
    }
}
