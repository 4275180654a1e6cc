use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::adapters::fetch_json;
use crate::data_source::{Endpoint, FilingsBatch, FilingsRequest, UpstreamError};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, DEFAULT_TIMEOUT_MS};
use crate::{FilingResult, ProviderId};

pub const SEC_API_FILINGS_URL: &str = "https://api.sec-api.io/filings";

const PROVIDER: ProviderId = ProviderId::SecApi;

/// SEC-API full-text filings search.
///
/// Sends the raw key in `Authorization` (no `Bearer` prefix) and a
/// query-string search sorted by `filedAt` descending.
pub struct SecApiAdapter {
    http_client: Arc<dyn HttpClient>,
    api_key: SecretString,
    endpoint: String,
    timeout_ms: u64,
}

impl SecApiAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: SecretString) -> Self {
        Self {
            http_client,
            api_key,
            endpoint: String::from(SEC_API_FILINGS_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub async fn search(&self, req: &FilingsRequest) -> Result<FilingsBatch, UpstreamError> {
        let query = SecApiQuery::from_request(req);
        let request = HttpRequest::post(&self.endpoint)
            .with_json_body(&query)
            .map_err(|error| UpstreamError::malformed(PROVIDER, Endpoint::FilingsSearch, error))?
            .with_auth(&HttpAuth::Header {
                name: String::from("Authorization"),
                value: self.api_key.expose_secret().to_owned(),
            })
            .with_timeout_ms(self.timeout_ms);

        let payload: Option<SecApiResponse> = fetch_json(
            self.http_client.as_ref(),
            request,
            PROVIDER,
            Endpoint::FilingsSearch,
        )
        .await?;

        let results = payload
            .and_then(|response| response.filings)
            .unwrap_or_default()
            .into_iter()
            .map(|filing| normalize_filing(filing, &req.ticker))
            .collect::<Vec<_>>();

        tracing::debug!(ticker = %req.ticker, results = results.len(), "sec-api search mapped");
        Ok(FilingsBatch { results })
    }
}

#[derive(Debug, Serialize)]
struct SecApiQuery {
    query: SecApiQueryClause,
    from: u32,
    size: u32,
    sort: [SecApiSort; 1],
}

impl SecApiQuery {
    fn from_request(req: &FilingsRequest) -> Self {
        Self {
            query: SecApiQueryClause {
                query_string: SecApiQueryString {
                    query: req.query_string(),
                },
            },
            from: 0,
            size: req.limit,
            sort: [SecApiSort {
                filed_at: SecApiSortOrder { order: "desc" },
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct SecApiQueryClause {
    query_string: SecApiQueryString,
}

#[derive(Debug, Serialize)]
struct SecApiQueryString {
    query: String,
}

#[derive(Debug, Serialize)]
struct SecApiSort {
    #[serde(rename = "filedAt")]
    filed_at: SecApiSortOrder,
}

#[derive(Debug, Serialize)]
struct SecApiSortOrder {
    order: &'static str,
}

#[derive(Debug, Deserialize)]
struct SecApiResponse {
    #[serde(default)]
    filings: Option<Vec<SecApiFiling>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecApiFiling {
    company_name: Option<String>,
    form_type: Option<String>,
    filed_at: Option<String>,
    accession_no: Option<String>,
    link_to_filing: Option<String>,
}

fn normalize_filing(filing: SecApiFiling, ticker: &str) -> FilingResult {
    FilingResult {
        company_name: filing.company_name,
        filing_type: filing.form_type,
        filed_at: filing.filed_at,
        accession: filing.accession_no,
        url: filing.link_to_filing,
        ..FilingResult::from_provider(PROVIDER, ticker)
    }
}
