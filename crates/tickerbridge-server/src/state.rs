use std::sync::Arc;

use tickerbridge_core::{FinnhubAdapter, HttpClient, ProviderId, SecApiAdapter, UtcDateTime};

use crate::config::ApiKeys;
use crate::error::ApiError;

/// Shared handler state.
///
/// An adapter is present only when its key was configured. Handlers ask for
/// it after validating input and turn its absence into `ServerMisconfigured`.
#[derive(Clone)]
pub struct AppState {
    filings: Option<Arc<SecApiAdapter>>,
    market: Option<Arc<FinnhubAdapter>>,
    clock: fn() -> UtcDateTime,
}

impl AppState {
    pub fn new(http_client: Arc<dyn HttpClient>, keys: ApiKeys, timeout_ms: u64) -> Self {
        let filings = keys.sec_api.map(|key| {
            Arc::new(SecApiAdapter::new(Arc::clone(&http_client), key).with_timeout_ms(timeout_ms))
        });
        let market = keys.finnhub.map(|key| {
            Arc::new(FinnhubAdapter::new(Arc::clone(&http_client), key).with_timeout_ms(timeout_ms))
        });

        Self {
            filings,
            market,
            clock: UtcDateTime::now,
        }
    }

    /// Builds state from preconfigured adapters, e.g. pointed at a local test double.
    pub fn from_adapters(filings: Option<SecApiAdapter>, market: Option<FinnhubAdapter>) -> Self {
        Self {
            filings: filings.map(Arc::new),
            market: market.map(Arc::new),
            clock: UtcDateTime::now,
        }
    }

    /// Replaces the wall clock used for news windows.
    pub fn with_clock(mut self, clock: fn() -> UtcDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn filings(&self) -> Result<&SecApiAdapter, ApiError> {
        self.filings
            .as_deref()
            .ok_or_else(|| missing_key(ProviderId::SecApi))
    }

    pub fn market(&self) -> Result<&FinnhubAdapter, ApiError> {
        self.market
            .as_deref()
            .ok_or_else(|| missing_key(ProviderId::Finnhub))
    }

    pub fn now(&self) -> UtcDateTime {
        (self.clock)()
    }
}

fn missing_key(provider: ProviderId) -> ApiError {
    ApiError::ServerMisconfigured {
        key: provider.api_key_var(),
    }
}
