//! Ordered interceptor chain applied to every gateway request.
//!
//! DESIGN
//! ======
//! Cross-cutting request policy lives in small stages instead of inline
//! conditionals: each stage may shape the outgoing request and observe the
//! outcome. Stages run in registration order for all three hooks.

use std::sync::Arc;

use tracing::debug;

use super::request::{ApiRequest, ApiResponse};
use crate::error::ApiError;

/// One stage of the gateway pipeline.
pub trait Interceptor: Send + Sync {
    /// Short stage name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Shape the request before it is sent.
    fn on_request(&self, request: &mut ApiRequest) {
        let _ = request;
    }

    /// Observe a successful response. Responses are never altered.
    fn on_response(&self, request: &ApiRequest, response: &ApiResponse) {
        let _ = (request, response);
    }

    /// Observe a failure before it is returned to the caller.
    fn on_error(&self, request: &ApiRequest, error: &ApiError) {
        let _ = (request, error);
    }
}

#[derive(Clone, Default)]
pub struct InterceptorChain {
    stages: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stage: Arc<dyn Interceptor>) {
        self.stages.push(stage);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn apply_request(&self, request: &mut ApiRequest) {
        for stage in &self.stages {
            stage.on_request(request);
        }
    }

    pub fn apply_response(&self, request: &ApiRequest, response: &ApiResponse) {
        for stage in &self.stages {
            stage.on_response(request, response);
        }
    }

    pub fn apply_error(&self, request: &ApiRequest, error: &ApiError) {
        for stage in &self.stages {
            stage.on_error(request, error);
        }
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Diagnostic logging of every request outcome.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestLog;

impl Interceptor for RequestLog {
    fn name(&self) -> &'static str {
        "request-log"
    }

    fn on_request(&self, request: &mut ApiRequest) {
        debug!(method = request.method.as_str(), path = %request.path, "api request");
    }

    fn on_response(&self, request: &ApiRequest, response: &ApiResponse) {
        debug!(
            method = request.method.as_str(),
            path = %request.path,
            status = response.status,
            "api response"
        );
    }

    fn on_error(&self, request: &ApiRequest, error: &ApiError) {
        debug!(
            method = request.method.as_str(),
            path = %request.path,
            status = ?error.status(),
            error = %error,
            "api request failed"
        );
    }
}

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;
