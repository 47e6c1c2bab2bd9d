//! Wire transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway is generic over `Transport` so the same pipeline runs over
//! `reqwest` on native targets, browser `fetch` in the web client, and
//! in-memory fakes in tests.

use super::request::{ApiResponse, Method};

/// Fully resolved request handed to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

/// Transport-level failure: no HTTP response was received.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one request and returns the raw status and body.
///
/// Futures are not required to be `Send` so single-threaded browser
/// transports can implement this trait.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, TransportError>;
}

#[cfg(feature = "reqwest")]
pub use native::ReqwestTransport;

#[cfg(feature = "reqwest")]
mod native {
    use reqwest::header::CONTENT_TYPE;

    use super::{HttpRequest, Transport, TransportError};
    use crate::config::ClientConfig;
    use crate::gateway::request::{ApiResponse, Method};

    /// `reqwest`-backed transport with the configured request timeout.
    #[derive(Clone, Debug)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Build a transport from client config.
        ///
        /// # Errors
        ///
        /// Returns an error if the TLS backend cannot be initialized.
        pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
            let client = reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| TransportError(e.to_string()))?;
            Ok(Self { client })
        }

        #[must_use]
        pub fn from_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    impl Transport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> Result<ApiResponse, TransportError> {
            let mut builder = self.client.request(method(request.method), &request.url);
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.header(CONTENT_TYPE, "application/json").body(body);
            }

            let response = builder.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
    }
}
