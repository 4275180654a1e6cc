//! Request and response contracts for the upstream-backed endpoints.
//!
//! | Endpoint | Request | Response | Provider |
//! |----------|---------|----------|----------|
//! | Filings search | [`FilingsRequest`] | [`FilingsBatch`] | SEC-API |
//! | Daily candles | [`CandlesRequest`] | [`OhlcvSeries`] | Finnhub |
//! | Company news | [`NewsRequest`] | [`NewsBatch`] | Finnhub |
//!
//! Request constructors are the presence checks: a request value that exists
//! carries every field its upstream call needs. Upstream failures are reported
//! as [`UpstreamError`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{FilingResult, NewsItem, OhlcvBar, ProviderId, UtcDateTime, ValidationError};

/// Form types searched when the caller does not name any.
pub const DEFAULT_FORMS: [&str; 3] = ["10-K", "10-Q", "8-K"];
pub const DEFAULT_FILINGS_LIMIT: u32 = 5;
pub const DEFAULT_NEWS_DAYS: u32 = 30;

/// Upstream endpoint label used in logs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    FilingsSearch,
    Candles,
    CompanyNews,
}

impl Endpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FilingsSearch => "filings",
            Self::Candles => "stock/candle",
            Self::CompanyNews => "company-news",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// Provider answered with a non-2xx status.
    Status,
    /// Request never produced a response (DNS, connect, timeout, body read).
    Transport,
    /// Response body was not the JSON shape we expect.
    Decode,
    /// JSON decoded but violates a payload invariant.
    Malformed,
}

/// Structured upstream error surfaced to callers as `500`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamError {
    provider: ProviderId,
    endpoint: Endpoint,
    kind: UpstreamErrorKind,
    status: Option<u16>,
    message: String,
}

impl UpstreamError {
    /// Non-2xx response. The message mirrors `HTTP <code> <reason>: <body>`.
    pub fn status(
        provider: ProviderId,
        endpoint: Endpoint,
        status: u16,
        reason: &str,
        body: &str,
    ) -> Self {
        Self {
            provider,
            endpoint,
            kind: UpstreamErrorKind::Status,
            status: Some(status),
            message: format!("HTTP {status} {reason}: {body}"),
        }
    }

    pub fn transport(provider: ProviderId, endpoint: Endpoint, message: impl Display) -> Self {
        Self {
            provider,
            endpoint,
            kind: UpstreamErrorKind::Transport,
            status: None,
            message: format!("{provider} transport error: {message}"),
        }
    }

    pub fn decode(provider: ProviderId, endpoint: Endpoint, error: impl Display) -> Self {
        Self {
            provider,
            endpoint,
            kind: UpstreamErrorKind::Decode,
            status: None,
            message: format!("failed to parse {provider} {endpoint} response: {error}"),
        }
    }

    pub fn malformed(provider: ProviderId, endpoint: Endpoint, detail: impl Display) -> Self {
        Self {
            provider,
            endpoint,
            kind: UpstreamErrorKind::Malformed,
            status: None,
            message: format!("malformed {provider} {endpoint} payload: {detail}"),
        }
    }

    pub const fn provider(&self) -> ProviderId {
        self.provider
    }

    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub const fn kind(&self) -> UpstreamErrorKind {
        self.kind
    }

    /// HTTP status reported by the provider, when there was one.
    pub const fn upstream_status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            UpstreamErrorKind::Status => "upstream.status",
            UpstreamErrorKind::Transport => "upstream.transport",
            UpstreamErrorKind::Decode => "upstream.decode",
            UpstreamErrorKind::Malformed => "upstream.malformed",
        }
    }
}

impl Display for UpstreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UpstreamError {}

/// Validated filings search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingsRequest {
    pub ticker: String,
    pub forms: Vec<String>,
    pub limit: u32,
}

impl FilingsRequest {
    /// An empty `forms` list falls back to [`DEFAULT_FORMS`].
    pub fn new(
        ticker: impl Into<String>,
        forms: Vec<String>,
        limit: u32,
    ) -> Result<Self, ValidationError> {
        let ticker = ticker.into();
        if ticker.is_empty() {
            return Err(ValidationError::MissingTicker);
        }

        let forms = if forms.is_empty() {
            default_forms()
        } else {
            forms
        };

        Ok(Self {
            ticker,
            forms,
            limit,
        })
    }

    /// Full-text query: `ticker:<T> AND (formType:<A> OR formType:<B>)`.
    pub fn query_string(&self) -> String {
        format!(
            "ticker:{} AND (formType:{})",
            self.ticker,
            self.forms.join(" OR formType:")
        )
    }
}

pub fn default_forms() -> Vec<String> {
    DEFAULT_FORMS.iter().map(|form| (*form).to_owned()).collect()
}

/// Validated daily candle range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandlesRequest {
    pub ticker: String,
    pub from: UtcDateTime,
    pub to: UtcDateTime,
}

impl CandlesRequest {
    pub fn new(
        ticker: impl Into<String>,
        start: &str,
        end: &str,
    ) -> Result<Self, ValidationError> {
        let ticker = ticker.into();
        if ticker.is_empty() || start.is_empty() || end.is_empty() {
            return Err(ValidationError::MissingCandleRange);
        }

        Ok(Self {
            ticker,
            from: UtcDateTime::parse_date("start", start)?,
            to: UtcDateTime::parse_date("end", end)?,
        })
    }
}

/// Validated trailing news window ending at `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRequest {
    pub ticker: String,
    pub days: u32,
    pub from: UtcDateTime,
    pub to: UtcDateTime,
}

impl NewsRequest {
    pub fn new(
        ticker: impl Into<String>,
        days: u32,
        now: UtcDateTime,
    ) -> Result<Self, ValidationError> {
        let ticker = ticker.into();
        if ticker.is_empty() {
            return Err(ValidationError::MissingTicker);
        }

        let from = now
            .checked_sub_days(days)
            .ok_or(ValidationError::WindowOutOfRange { days })?;

        Ok(Self {
            ticker,
            days,
            from,
            to: now,
        })
    }
}

/// `/filings/search` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingsBatch {
    pub results: Vec<FilingResult>,
}

/// `/market/ohlcv` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvSeries {
    pub ticker: String,
    pub ohlcv: Vec<OhlcvBar>,
}

impl OhlcvSeries {
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            ohlcv: Vec::new(),
        }
    }
}

/// `/news/search` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsBatch {
    pub ticker: String,
    pub news: Vec<NewsItem>,
}
