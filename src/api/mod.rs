//! Typed endpoint wrappers over the gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and CLI commands call these functions rather than building
//! requests by hand, so every path lives in one place. Each function goes
//! through `Gateway::send` and therefore through the full interceptor chain.
//!
//! DESIGN
//! ======
//! Free async functions generic over the transport, grouped by resource.
//! List endpoints decode through `ListPayload` and always return a `Vec`.

pub mod alerts;
pub mod applications;
pub mod auth;
pub mod interviews;
pub mod jobs;
pub mod profile;
pub mod recruiter;
pub mod saved;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::gateway::{ApiRequest, Gateway, Transport};
use crate::types::ListPayload;

/// Append every `(key, value)` pair as a query parameter.
fn with_query(request: ApiRequest, pairs: Vec<(String, String)>) -> ApiRequest {
    pairs
        .into_iter()
        .fold(request, |request, (key, value)| request.query(key, value))
}

/// Fetch a list endpoint that may answer with a bare array or an envelope.
async fn fetch_list<T: Transport, R: DeserializeOwned>(
    gateway: &Gateway<T>,
    request: ApiRequest,
) -> Result<Vec<R>, ApiError> {
    gateway
        .fetch::<ListPayload<R>>(request)
        .await
        .map(ListPayload::into_vec)
}
