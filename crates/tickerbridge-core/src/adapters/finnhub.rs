use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::adapters::fetch_json;
use crate::data_source::{
    CandlesRequest, Endpoint, NewsBatch, NewsRequest, OhlcvSeries, UpstreamError,
};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, DEFAULT_TIMEOUT_MS};
use crate::{NewsItem, OhlcvBar, ProviderId, UtcDateTime};

pub const FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";
pub const DAILY_RESOLUTION: &str = "D";

const PROVIDER: ProviderId = ProviderId::Finnhub;

/// Finnhub daily candles and company news.
///
/// The key travels as the trailing `token` query parameter.
pub struct FinnhubAdapter {
    http_client: Arc<dyn HttpClient>,
    api_key: SecretString,
    base_url: String,
    timeout_ms: u64,
}

impl FinnhubAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: SecretString) -> Self {
        Self {
            http_client,
            api_key,
            base_url: String::from(FINNHUB_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Daily bars between `req.from` and `req.to`.
    ///
    /// A `no_data` status (anything other than `ok`) is an empty series.
    pub async fn candles(&self, req: &CandlesRequest) -> Result<OhlcvSeries, UpstreamError> {
        let url = format!(
            "{}/stock/candle?symbol={}&resolution={}&from={}&to={}",
            self.base_url,
            urlencoding::encode(&req.ticker),
            DAILY_RESOLUTION,
            req.from.unix_seconds(),
            req.to.unix_seconds(),
        );

        let payload: FinnhubCandles =
            fetch_json(self.http_client.as_ref(), self.authorized(url), PROVIDER, Endpoint::Candles)
                .await?;

        if payload.s.as_deref() != Some("ok") {
            tracing::debug!(ticker = %req.ticker, status = ?payload.s, "finnhub returned no candles");
            return Ok(OhlcvSeries::empty(req.ticker.clone()));
        }

        let ohlcv = payload.into_bars()?;
        tracing::debug!(ticker = %req.ticker, bars = ohlcv.len(), "finnhub candles mapped");
        Ok(OhlcvSeries {
            ticker: req.ticker.clone(),
            ohlcv,
        })
    }

    pub async fn company_news(&self, req: &NewsRequest) -> Result<NewsBatch, UpstreamError> {
        let url = format!(
            "{}/company-news?symbol={}&from={}&to={}",
            self.base_url,
            urlencoding::encode(&req.ticker),
            req.from.format_date(),
            req.to.format_date(),
        );

        let payload: Option<Vec<FinnhubNewsItem>> = fetch_json(
            self.http_client.as_ref(),
            self.authorized(url),
            PROVIDER,
            Endpoint::CompanyNews,
        )
        .await?;

        let news = payload
            .unwrap_or_default()
            .into_iter()
            .map(normalize_news_item)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(ticker = %req.ticker, items = news.len(), "finnhub news mapped");
        Ok(NewsBatch {
            ticker: req.ticker.clone(),
            news,
        })
    }

    fn authorized(&self, url: String) -> HttpRequest {
        HttpRequest::get(url)
            .with_auth(&HttpAuth::QueryParam {
                name: String::from("token"),
                value: self.api_key.expose_secret().to_owned(),
            })
            .with_timeout_ms(self.timeout_ms)
    }
}

#[derive(Debug, Deserialize)]
struct FinnhubCandles {
    s: Option<String>,
    t: Option<Vec<i64>>,
    o: Option<Vec<f64>>,
    h: Option<Vec<f64>>,
    l: Option<Vec<f64>>,
    c: Option<Vec<f64>>,
    v: Option<Vec<f64>>,
}

impl FinnhubCandles {
    fn into_bars(self) -> Result<Vec<OhlcvBar>, UpstreamError> {
        let t = required_series("t", self.t)?;
        let o = required_series("o", self.o)?;
        let h = required_series("h", self.h)?;
        let l = required_series("l", self.l)?;
        let c = required_series("c", self.c)?;
        let v = required_series("v", self.v)?;

        let len = t.len();
        if [o.len(), h.len(), l.len(), c.len(), v.len()]
            .iter()
            .any(|other| *other != len)
        {
            return Err(UpstreamError::malformed(
                PROVIDER,
                Endpoint::Candles,
                format!(
                    "candle arrays differ in length (t={len}, o={}, h={}, l={}, c={}, v={})",
                    o.len(),
                    h.len(),
                    l.len(),
                    c.len(),
                    v.len()
                ),
            ));
        }

        t.into_iter()
            .enumerate()
            .map(|(i, ts)| {
                let date = UtcDateTime::from_unix_seconds(ts)
                    .map_err(|error| UpstreamError::malformed(PROVIDER, Endpoint::Candles, error))?
                    .format_date();
                Ok(OhlcvBar {
                    date,
                    open: o[i],
                    high: h[i],
                    low: l[i],
                    close: c[i],
                    volume: v[i],
                })
            })
            .collect()
    }
}

fn required_series<T>(name: &str, series: Option<Vec<T>>) -> Result<Vec<T>, UpstreamError> {
    series.ok_or_else(|| {
        UpstreamError::malformed(
            PROVIDER,
            Endpoint::Candles,
            format!("missing `{name}` array"),
        )
    })
}

#[derive(Debug, Deserialize)]
struct FinnhubNewsItem {
    source: Option<String>,
    headline: Option<String>,
    datetime: i64,
    url: Option<String>,
}

fn normalize_news_item(item: FinnhubNewsItem) -> Result<NewsItem, UpstreamError> {
    let published_at = UtcDateTime::from_unix_seconds(item.datetime)
        .map_err(|error| UpstreamError::malformed(PROVIDER, Endpoint::CompanyNews, error))?
        .format_iso8601();

    Ok(NewsItem {
        source: item.source,
        headline: item.headline,
        published_at,
        url: item.url,
    })
}
