//! `fetch`-backed gateway transport.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with a `TransportError` since there is no
//! `fetch` to call.
//!
//! ERROR HANDLING
//! ==============
//! Only failures to get a response become `TransportError`; any HTTP status,
//! including 401, is returned as a response so the gateway's interceptors
//! see it.

#![allow(clippy::unused_async)]

use jobportal::gateway::{ApiResponse, HttpRequest, Transport, TransportError};

/// Transport over the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "csr")]
fn method(method: jobportal::Method) -> gloo_net::http::Method {
    use gloo_net::http::Method as Fetch;
    use jobportal::Method;

    match method {
        Method::Get => Fetch::GET,
        Method::Post => Fetch::POST,
        Method::Put => Fetch::PUT,
        Method::Patch => Fetch::PATCH,
        Method::Delete => Fetch::DELETE,
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let mut builder = gloo_net::http::RequestBuilder::new(&request.url).method(method(request.method));
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let sent = match request.body {
                Some(body) => {
                    builder
                        .header("Content-Type", "application/json")
                        .body(body)
                        .map_err(|e| TransportError(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let response = sent.map_err(|e| TransportError(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(ApiResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError("fetch is only available in the browser".to_owned()))
        }
    }
}
