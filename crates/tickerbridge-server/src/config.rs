//! Process configuration.
//!
//! Every setting is a flag with an environment fallback:
//!
//! | Option | Env | Default | Description |
//! |--------|-----|---------|-------------|
//! | `--host` | `HOST` | `0.0.0.0` | Bind address |
//! | `--port` | `PORT` | `8080` | Listen port |
//! | `--sec-api-key` | `SEC_API_KEY` | unset | Filings provider key |
//! | `--finnhub-api-key` | `FINNHUB_API_KEY` | unset | Market/news provider key |
//! | `--upstream-timeout-ms` | `UPSTREAM_TIMEOUT_MS` | `10000` | Outbound request timeout |
//! | `--log-format` | `LOG_FORMAT` | `text` | `text` or `json` |
//!
//! Missing keys are not a startup error; the affected endpoints answer `500`.

use clap::{Parser, ValueEnum};
use secrecy::SecretString;
use tickerbridge_core::http_client::DEFAULT_TIMEOUT_MS;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Financial data proxy for SEC filings, daily candles, and company news.
#[derive(Debug, Parser)]
#[command(name = "tickerbridge", author, version, about)]
pub struct Cli {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SEC-API key used by `/filings/search`.
    #[arg(long, env = "SEC_API_KEY", hide_env_values = true)]
    pub sec_api_key: Option<String>,

    /// Finnhub key used by `/market/ohlcv` and `/news/search`.
    #[arg(long, env = "FINNHUB_API_KEY", hide_env_values = true)]
    pub finnhub_api_key: Option<String>,

    /// Timeout applied to every upstream request, in milliseconds.
    #[arg(long, env = "UPSTREAM_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub upstream_timeout_ms: u64,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Upstream credentials. `None` means the key was absent or empty.
#[derive(Debug, Default)]
pub struct ApiKeys {
    pub sec_api: Option<SecretString>,
    pub finnhub: Option<SecretString>,
}

impl ApiKeys {
    pub fn new(sec_api: Option<String>, finnhub: Option<String>) -> Self {
        Self {
            sec_api: non_empty_secret(sec_api),
            finnhub: non_empty_secret(finnhub),
        }
    }
}

fn non_empty_secret(value: Option<String>) -> Option<SecretString> {
    value
        .filter(|key| !key.trim().is_empty())
        .map(SecretString::from)
}

#[derive(Debug)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    pub keys: ApiKeys,
    pub upstream_timeout_ms: u64,
    pub log_format: LogFormat,
}

impl ProxyConfig {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            keys: ApiKeys::new(cli.sec_api_key, cli.finnhub_api_key),
            upstream_timeout_ms: cli.upstream_timeout_ms,
            log_format: cli.log_format,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
