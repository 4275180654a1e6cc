//! Contract tests for what the proxy sends upstream and how replies are mapped.

use serde_json::json;
use tickerbridge_tests::{
    build_app, post_json, CannedHttpClient, HttpError, HttpMethod, Keys, TEST_FINNHUB_KEY,
    TEST_SEC_KEY,
};

// =============================================================================
// SEC-API filings
// =============================================================================

#[tokio::test]
async fn filings_search_sends_sec_api_query_and_maps_results() {
    // Given: SEC-API returns one filing
    let client = CannedHttpClient::responding(
        200,
        r#"{"total":{"value":1},"filings":[{
            "companyName":"Tesla, Inc.",
            "formType":"8-K",
            "filedAt":"2024-01-24T16:05:34-05:00",
            "accessionNo":"0001628280-24-002390",
            "linkToFiling":"https://www.sec.gov/Archives/edgar/data/1318605/000162828024002390/tsla-20240124.htm",
            "periodOfReport":"2024-01-24"
        }]}"#,
    );

    // When: the caller searches two form types
    let (status, json) = post_json(
        build_app(client.clone(), Keys::ALL),
        "/filings/search",
        r#"{"ticker":"TSLA","forms":["8-K","10-Q"],"limit":1}"#,
    )
    .await;

    // Then: the filing comes back in the compact shape
    assert_eq!(status, 200);
    assert_eq!(
        json,
        json!({
            "results": [{
                "source": "SEC-API",
                "companyName": "Tesla, Inc.",
                "ticker": "TSLA",
                "filingType": "8-K",
                "filedAt": "2024-01-24T16:05:34-05:00",
                "accession": "0001628280-24-002390",
                "url": "https://www.sec.gov/Archives/edgar/data/1318605/000162828024002390/tsla-20240124.htm"
            }]
        })
    );

    // And: the upstream request matches SEC-API's query API
    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "https://api.sec-api.io/filings");
    assert_eq!(
        request.headers.get("authorization").map(String::as_str),
        Some(TEST_SEC_KEY)
    );
    assert_eq!(request.timeout_ms, 5_000);
    assert_eq!(
        request.body.as_deref(),
        Some(
            r#"{"query":{"query_string":{"query":"ticker:TSLA AND (formType:8-K OR formType:10-Q)"}},"from":0,"size":1,"sort":[{"filedAt":{"order":"desc"}}]}"#
        )
    );
}

#[tokio::test]
async fn filings_search_surfaces_upstream_status_as_500() {
    let client = CannedHttpClient::responding(403, r#"{"message":"invalid token"}"#);

    let (status, json) = post_json(
        build_app(client, Keys::ALL),
        "/filings/search",
        r#"{"ticker":"AAPL"}"#,
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(
        json["error"],
        r#"HTTP 403 Forbidden: {"message":"invalid token"}"#
    );
}

// =============================================================================
// Finnhub candles
// =============================================================================

#[tokio::test]
async fn ohlcv_zips_candle_arrays_into_dated_bars() {
    let client = CannedHttpClient::responding(
        200,
        r#"{"s":"ok","t":[1700000000],"o":[10],"h":[11],"l":[9],"c":[10.5],"v":[1000]}"#,
    );

    let (status, json) = post_json(
        build_app(client.clone(), Keys::ALL),
        "/market/ohlcv",
        r#"{"ticker":"AAPL","start":"2023-11-01","end":"2023-11-30"}"#,
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        json,
        json!({
            "ticker": "AAPL",
            "ohlcv": [{
                "date": "2023-11-14",
                "open": 10.0,
                "high": 11.0,
                "low": 9.0,
                "close": 10.5,
                "volume": 1000.0
            }]
        })
    );

    let requests = client.requests();
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(
        requests[0].url,
        format!(
            "https://finnhub.io/api/v1/stock/candle?symbol=AAPL&resolution=D&from=1698796800&to=1701302400&token={TEST_FINNHUB_KEY}"
        )
    );
}

#[tokio::test]
async fn ohlcv_without_data_is_an_empty_200() {
    let client = CannedHttpClient::responding(200, r#"{"s":"no_data"}"#);

    let (status, json) = post_json(
        build_app(client, Keys::ALL),
        "/market/ohlcv",
        r#"{"ticker":"ZZZZ","start":"2024-01-01","end":"2024-01-31"}"#,
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(json, json!({ "ticker": "ZZZZ", "ohlcv": [] }));
}

#[tokio::test]
async fn ohlcv_with_ragged_arrays_is_an_upstream_error() {
    let client = CannedHttpClient::responding(
        200,
        r#"{"s":"ok","t":[1700000000,1700086400],"o":[10,11],"h":[11,12],"l":[9,10],"c":[10.5],"v":[1000,1200]}"#,
    );

    let (status, json) = post_json(
        build_app(client, Keys::ALL),
        "/market/ohlcv",
        r#"{"ticker":"AAPL","start":"2023-11-01","end":"2023-11-30"}"#,
    )
    .await;

    assert_eq!(status, 500);
    assert!(json["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("malformed finnhub stock/candle payload")));
}

// =============================================================================
// Finnhub news
// =============================================================================

#[tokio::test]
async fn news_search_uses_trailing_window_and_iso_timestamps() {
    let client = CannedHttpClient::responding(
        200,
        r#"[{"category":"company","datetime":1700000000,"headline":"Y","id":7,"image":"","related":"AAPL","source":"X","summary":"","url":"Z"}]"#,
    );

    let (status, json) = post_json(
        build_app(client.clone(), Keys::ALL),
        "/news/search",
        r#"{"ticker":"AAPL","days":7}"#,
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        json,
        json!({
            "ticker": "AAPL",
            "news": [{
                "source": "X",
                "headline": "Y",
                "published_at": "2023-11-14T22:13:20.000Z",
                "url": "Z"
            }]
        })
    );
    assert_eq!(
        client.requests()[0].url,
        format!(
            "https://finnhub.io/api/v1/company-news?symbol=AAPL&from=2024-03-08&to=2024-03-15&token={TEST_FINNHUB_KEY}"
        )
    );
}

#[tokio::test]
async fn news_transport_failure_is_500_without_leaking_the_token() {
    let client = CannedHttpClient::failing(HttpError::new("connection failed: dns error"));

    let (status, json) = post_json(
        build_app(client, Keys::ALL),
        "/news/search",
        r#"{"ticker":"AAPL"}"#,
    )
    .await;

    assert_eq!(status, 500);
    let message = json["error"].as_str().expect("error is a string");
    assert_eq!(message, "finnhub transport error: connection failed: dns error");
    assert!(!message.contains(TEST_FINNHUB_KEY));
}
