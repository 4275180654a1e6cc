use thiserror::Error;

/// Input validation errors exposed by `tickerbridge-core`.
///
/// Every variant maps to a client-side mistake; the server turns them into
/// `400 Bad Request`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker is required")]
    MissingTicker,
    #[error("ticker, start, end are required (YYYY-MM-DD)")]
    MissingCandleRange,

    #[error("{field} must be a YYYY-MM-DD date: '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("a {days}-day lookback window is outside the supported calendar range")]
    WindowOutOfRange { days: u32 },

    #[error("timestamp {value} is outside the supported calendar range")]
    TimestampOutOfRange { value: i64 },

    #[error("request body is not valid JSON for this endpoint: {reason}")]
    MalformedBody { reason: String },
}
