use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::error::ServerError;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(format: LogFormat) -> Result<(), ServerError> {
    let filter = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_owned());
    let env_filter = EnvFilter::try_new(filter)
        .map_err(|err| ServerError::Telemetry(format!("invalid log filter: {err}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|err| ServerError::Telemetry(format!("failed to install subscriber: {err}")))
}
