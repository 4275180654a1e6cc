use crate::error::ApiError;

pub const NOT_IMPLEMENTED_MESSAGE: &str =
    "Not implemented yet. Your backend works; XBRL parsing is an optional upgrade.";

/// Placeholder. Always `501`, whatever the body.
pub async fn normalize() -> ApiError {
    ApiError::NotImplemented(NOT_IMPLEMENTED_MESSAGE)
}
