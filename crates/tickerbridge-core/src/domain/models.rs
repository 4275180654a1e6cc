use serde::{Deserialize, Serialize};

use crate::ProviderId;

/// Compact filing record returned by `/filings/search`.
///
/// Fields the upstream record does not carry are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingResult {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub ticker: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FilingResult {
    pub fn from_provider(provider: ProviderId, ticker: impl Into<String>) -> Self {
        Self {
            source: provider.display_name().to_owned(),
            company_name: None,
            ticker: ticker.into(),
            filing_type: None,
            filed_at: None,
            accession: None,
            url: None,
        }
    }
}

/// One daily OHLCV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvBar {
    /// UTC trading date, `YYYY-MM-DD`.
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Company news headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// ISO-8601 UTC with millisecond precision.
    pub published_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
