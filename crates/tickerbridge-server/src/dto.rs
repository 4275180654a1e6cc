//! Wire shapes accepted and returned by the HTTP layer.
//!
//! Request bodies are lenient: every field is optional at the
//! serde level and presence is checked by `validate`, so a missing field is a
//! clear `400` instead of a deserializer message.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tickerbridge_core::data_source::default_forms;
use tickerbridge_core::{
    CandlesRequest, FilingsRequest, NewsRequest, UtcDateTime, ValidationError,
    DEFAULT_FILINGS_LIMIT, DEFAULT_NEWS_DAYS,
};

/// Decodes a JSON request body. An empty body or a literal `null` is `T::default()`.
pub fn parse_body<T>(bytes: &[u8]) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice::<Option<T>>(bytes)
        .map(Option::unwrap_or_default)
        .map_err(|err| ValidationError::MalformedBody {
            reason: err.to_string(),
        })
}

#[derive(Debug, Default, Deserialize)]
pub struct FilingsSearchBody {
    pub ticker: Option<String>,
    pub forms: Option<Vec<String>>,
    pub limit: Option<u32>,
}

impl FilingsSearchBody {
    pub fn validate(self) -> Result<FilingsRequest, ValidationError> {
        FilingsRequest::new(
            self.ticker.unwrap_or_default(),
            self.forms.unwrap_or_else(default_forms),
            self.limit.unwrap_or(DEFAULT_FILINGS_LIMIT),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OhlcvBody {
    pub ticker: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl OhlcvBody {
    pub fn validate(self) -> Result<CandlesRequest, ValidationError> {
        CandlesRequest::new(
            self.ticker.unwrap_or_default(),
            self.start.as_deref().unwrap_or_default(),
            self.end.as_deref().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsSearchBody {
    pub ticker: Option<String>,
    pub days: Option<u32>,
}

impl NewsSearchBody {
    pub fn validate(self, now: UtcDateTime) -> Result<NewsRequest, ValidationError> {
        NewsRequest::new(
            self.ticker.unwrap_or_default(),
            self.days.unwrap_or(DEFAULT_NEWS_DAYS),
            now,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
