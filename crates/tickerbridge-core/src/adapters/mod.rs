//! Provider adapters.
//!
//! Each adapter owns its API key and an [`HttpClient`]. It builds the exact
//! wire request its provider expects and maps the reply into domain types.
//! All of them go through [`fetch_json`] so status, transport, and decode
//! failures read the same way.

pub mod finnhub;
pub mod secapi;

pub use finnhub::FinnhubAdapter;
pub use secapi::SecApiAdapter;

use serde::de::DeserializeOwned;

use crate::data_source::{Endpoint, UpstreamError};
use crate::http_client::{HttpClient, HttpRequest};
use crate::ProviderId;

/// Executes `request` and decodes a 2xx JSON body, or fails with [`UpstreamError`].
pub async fn fetch_json<T: DeserializeOwned>(
    http_client: &dyn HttpClient,
    request: HttpRequest,
    provider: ProviderId,
    endpoint: Endpoint,
) -> Result<T, UpstreamError> {
    tracing::debug!(%provider, %endpoint, url = request.redacted_url(), "calling upstream");

    let response = http_client.execute(request).await.map_err(|error| {
        tracing::warn!(
            %provider,
            %endpoint,
            timed_out = error.timed_out(),
            error = %error,
            "upstream transport failure"
        );
        UpstreamError::transport(provider, endpoint, error)
    })?;

    if !response.is_success() {
        tracing::warn!(%provider, %endpoint, status = response.status, "upstream returned error status");
        return Err(UpstreamError::status(
            provider,
            endpoint,
            response.status,
            response.status_text(),
            &response.body,
        ));
    }

    serde_json::from_str(&response.body)
        .map_err(|error| UpstreamError::decode(provider, endpoint, error))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    use crate::http_client::{HttpClient, HttpError, HttpRequest, HttpResponse};

    #[derive(Debug)]
    pub(crate) struct RecordingHttpClient {
        response: Result<HttpResponse, HttpError>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingHttpClient {
        pub(crate) fn responding(status: u16, body: &str) -> Self {
            Self {
                response: Ok(HttpResponse::new(status, body)),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(error: HttpError) -> Self {
            Self {
                response: Err(error),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn recorded_requests(&self) -> Vec<HttpRequest> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .clone()
        }
    }

    impl HttpClient for RecordingHttpClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request);
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }
}
