//! Behavior-driven tests for the proxy's request handling.
//!
//! These drive the full router in-process and check what a caller sees:
//! status codes, JSON error bodies, and whether an upstream call happened.

use tickerbridge_tests::{build_app, get, post_json, CannedHttpClient, Keys};

const UPSTREAM_BOOM: &str = r#"{"unexpected":"should never be read"}"#;

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn when_no_keys_are_configured_healthz_still_reports_ok() {
    let client = CannedHttpClient::responding(500, UPSTREAM_BOOM);

    let (status, body) = get(build_app(client.clone(), Keys::NONE), "/healthz").await;

    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!({ "ok": true }));
    assert!(client.requests().is_empty());
}

// =============================================================================
// Required fields
// =============================================================================

#[tokio::test]
async fn when_ticker_is_missing_every_lookup_endpoint_answers_400() {
    for (path, body, expected) in [
        ("/filings/search", r#"{"forms":["10-K"]}"#, "ticker is required"),
        (
            "/market/ohlcv",
            r#"{"start":"2024-01-01","end":"2024-01-31"}"#,
            "ticker, start, end are required (YYYY-MM-DD)",
        ),
        ("/news/search", r#"{"days":7}"#, "ticker is required"),
    ] {
        // Given: a fully configured proxy
        let client = CannedHttpClient::responding(200, UPSTREAM_BOOM);
        let app = build_app(client.clone(), Keys::ALL);

        // When: the caller omits the ticker
        let (status, json) = post_json(app, path, body).await;

        // Then: the request is rejected before any upstream call
        assert_eq!(status, 400, "{path}");
        assert_eq!(json["error"], expected, "{path}");
        assert!(client.requests().is_empty(), "{path} must not call upstream");
    }
}

#[tokio::test]
async fn when_ohlcv_range_is_incomplete_caller_gets_400() {
    let client = CannedHttpClient::responding(200, UPSTREAM_BOOM);

    let (status, json) = post_json(
        build_app(client, Keys::ALL),
        "/market/ohlcv",
        r#"{"ticker":"AAPL","start":"2024-01-01"}"#,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(json["error"], "ticker, start, end are required (YYYY-MM-DD)");
}

#[tokio::test]
async fn when_ohlcv_dates_are_not_dates_caller_gets_400() {
    let client = CannedHttpClient::responding(200, UPSTREAM_BOOM);

    let (status, json) = post_json(
        build_app(client.clone(), Keys::ALL),
        "/market/ohlcv",
        r#"{"ticker":"AAPL","start":"last week","end":"2024-01-31"}"#,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(json["error"], "start must be a YYYY-MM-DD date: 'last week'");
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn when_body_is_empty_required_field_check_still_applies() {
    let client = CannedHttpClient::responding(200, UPSTREAM_BOOM);

    let (status, json) = post_json(build_app(client, Keys::ALL), "/filings/search", "").await;

    assert_eq!(status, 400);
    assert_eq!(json["error"], "ticker is required");
}

#[tokio::test]
async fn when_body_is_not_json_caller_gets_400_json_error() {
    let client = CannedHttpClient::responding(200, UPSTREAM_BOOM);

    let (status, json) =
        post_json(build_app(client, Keys::ALL), "/news/search", "{ticker: AAPL").await;

    assert_eq!(status, 400);
    assert!(json["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("request body is not valid JSON")));
}

// =============================================================================
// Missing credentials
// =============================================================================

#[tokio::test]
async fn when_sec_api_key_is_missing_filings_search_answers_500() {
    let client = CannedHttpClient::responding(200, UPSTREAM_BOOM);

    let (status, json) = post_json(
        build_app(client.clone(), Keys::NONE),
        "/filings/search",
        r#"{"ticker":"AAPL"}"#,
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(json["error"], "Server missing SEC_API_KEY");
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn when_finnhub_key_is_missing_market_and_news_answer_500() {
    for (path, body) in [
        (
            "/market/ohlcv",
            r#"{"ticker":"AAPL","start":"2024-01-01","end":"2024-01-31"}"#,
        ),
        ("/news/search", r#"{"ticker":"AAPL"}"#),
    ] {
        let client = CannedHttpClient::responding(200, UPSTREAM_BOOM);
        let keys = Keys {
            sec_api: true,
            finnhub: false,
        };

        let (status, json) = post_json(build_app(client.clone(), keys), path, body).await;

        assert_eq!(status, 500, "{path}");
        assert_eq!(json["error"], "Server missing FINNHUB_API_KEY", "{path}");
        assert!(client.requests().is_empty(), "{path}");
    }
}

#[tokio::test]
async fn when_both_input_and_key_are_missing_input_error_wins() {
    let client = CannedHttpClient::responding(200, UPSTREAM_BOOM);

    let (status, json) = post_json(build_app(client, Keys::NONE), "/news/search", "{}").await;

    assert_eq!(status, 400);
    assert_eq!(json["error"], "ticker is required");
}

// =============================================================================
// Fixed responses
// =============================================================================

#[tokio::test]
async fn xbrl_normalize_is_always_501() {
    for body in ["", "{}", r#"{"ticker":"AAPL","filing":"x"}"#, "not json"] {
        let client = CannedHttpClient::responding(200, UPSTREAM_BOOM);

        let (status, json) =
            post_json(build_app(client.clone(), Keys::ALL), "/xbrl/normalize", body).await;

        assert_eq!(status, 501);
        assert!(json["error"]
            .as_str()
            .is_some_and(|message| message.starts_with("Not implemented yet")));
        assert!(client.requests().is_empty());
    }
}

#[tokio::test]
async fn unknown_paths_get_a_json_404() {
    let client = CannedHttpClient::responding(200, UPSTREAM_BOOM);

    let (status, json) = post_json(build_app(client, Keys::ALL), "/filings/list", "{}").await;

    assert_eq!(status, 404);
    assert_eq!(json["error"], "no route for POST /filings/list");
}
