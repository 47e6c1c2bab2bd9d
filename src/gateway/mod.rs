//! Authenticated API gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through `Gateway::send`, so credential injection
//! and session-expiry handling are applied uniformly by the interceptor
//! chain instead of being repeated at each call site.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified into `ApiError` and shown to every stage's
//! `on_error` hook before being returned. The gateway never retries.

pub mod interceptor;
pub mod request;
pub mod transport;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use interceptor::{Interceptor, InterceptorChain, RequestLog};
pub use request::{AUTHORIZATION, ApiRequest, ApiResponse, Method};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use transport::{HttpRequest, Transport, TransportError};

use crate::config::normalize_base_url;
use crate::error::ApiError;

/// Shared HTTP client bound to one base URL and one interceptor chain.
#[derive(Debug)]
pub struct Gateway<T> {
    base_url: String,
    transport: T,
    chain: InterceptorChain,
}

impl<T: Transport> Gateway<T> {
    #[must_use]
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            transport,
            chain: InterceptorChain::new(),
        }
    }

    /// Append a stage to the end of the chain.
    #[must_use]
    pub fn with_interceptor(mut self, stage: impl Interceptor + 'static) -> Self {
        self.chain.push(Arc::new(stage));
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn chain(&self) -> &InterceptorChain {
        &self.chain
    }

    /// Run one request through the chain and the transport.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` when no response arrives, or the
    /// status-classified error for any non-2xx response.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.chain.apply_request(&mut request);

        let body = match &request.body {
            Some(value) => match serde_json::to_string(value) {
                Ok(text) => Some(text),
                Err(e) => return Err(ApiError::Encode(e.to_string())),
            },
            None => None,
        };
        let http = HttpRequest {
            method: request.method,
            url: request.url(&self.base_url),
            query: request.query.clone(),
            headers: request.headers.clone(),
            body,
        };

        let response = match self.transport.send(http).await {
            Ok(response) => response,
            Err(e) => {
                let error = ApiError::Network(e.0);
                self.chain.apply_error(&request, &error);
                return Err(error);
            }
        };

        if response.is_success() {
            self.chain.apply_response(&request, &response);
            Ok(response)
        } else {
            let error = ApiError::from_status(response.status, &response.body);
            self.chain.apply_error(&request, &error);
            Err(error)
        }
    }

    /// Send and decode the JSON response body.
    ///
    /// # Errors
    ///
    /// Propagates `send` errors and `ApiError::Decode` on body mismatch.
    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        self.send(request).await?.json()
    }

    /// Send and discard the response body.
    ///
    /// # Errors
    ///
    /// Propagates `send` errors.
    pub async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }

    /// `GET path` decoded as `R`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::fetch`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.fetch(ApiRequest::get(path)).await
    }

    /// `POST path` with a JSON body, decoded as `R`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::fetch`].
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.fetch(ApiRequest::post(path).json(body)?).await
    }

    /// `PUT path` with a JSON body, decoded as `R`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::fetch`].
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.fetch(ApiRequest::put(path).json(body)?).await
    }

    /// `PATCH path` with a JSON body, decoded as `R`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::fetch`].
    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.fetch(ApiRequest::patch(path).json(body)?).await
    }

    /// `DELETE path`, body ignored.
    ///
    /// # Errors
    ///
    /// See [`Gateway::send`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(path)).await
    }
}
