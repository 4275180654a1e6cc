use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tickerbridge_core::{ProviderId, ReqwestHttpClient};
use tickerbridge_server::telemetry::init_tracing;
use tickerbridge_server::{create_app, shutdown_signal, AppState, Cli, ProxyConfig, ServerError};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ProxyConfig::from_cli(Cli::parse());
    init_tracing(config.log_format)?;

    let bind_addr = config.bind_addr();
    for (configured, provider) in [
        (config.keys.sec_api.is_some(), ProviderId::SecApi),
        (config.keys.finnhub.is_some(), ProviderId::Finnhub),
    ] {
        if !configured {
            tracing::warn!(
                key = provider.api_key_var(),
                "provider key not set; dependent endpoints will answer 500"
            );
        }
    }

    let state = AppState::new(
        Arc::new(ReqwestHttpClient::new()),
        config.keys,
        config.upstream_timeout_ms,
    );
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "tickerbridge listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
