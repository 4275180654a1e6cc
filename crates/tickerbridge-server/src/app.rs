//! Axum application builder.
//!
//! Routes:
//! - `GET /healthz` - liveness
//! - `POST /filings/search` - SEC filings search
//! - `POST /market/ohlcv` - daily candles
//! - `POST /news/search` - recent company news
//! - `POST /xbrl/normalize` - placeholder, always 501
//!
//! Anything else falls through to a JSON 404.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::ApiError;
use crate::routes::{self, filings, health, market, news, xbrl};
use crate::state::AppState;

/// Create the Axum application with all routes.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/filings/search", post(filings::search))
        .route("/market/ohlcv", post(market::ohlcv))
        .route("/news/search", post(news::search))
        .route("/xbrl/normalize", post(xbrl::normalize))
        .fallback(routes::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else {
        String::from("handler panicked")
    };

    ApiError::Internal(detail).into_response()
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let json = serde_json::from_slice(&bytes).expect("responses are JSON");
        (status, json)
    }

    fn unconfigured() -> Router {
        create_app(AppState::from_adapters(None, None))
    }

    #[tokio::test]
    async fn healthz_ignores_configuration() {
        let request = Request::get("/healthz")
            .body(Body::empty())
            .expect("valid request");
        let (status, json) = send(unconfigured(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let request = Request::get("/nope")
            .body(Body::empty())
            .expect("valid request");
        let (status, json) = send(unconfigured(), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "no route for GET /nope");
    }

    #[tokio::test]
    async fn panics_become_json_500() {
        async fn boom() -> &'static str {
            panic!("kaboom")
        }

        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));
        let request = Request::get("/boom")
            .body(Body::empty())
            .expect("valid request");
        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "internal error: kaboom");
    }
}
