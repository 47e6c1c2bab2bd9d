//! `saved/` endpoints.

use serde_json::json;

use super::fetch_list;
use crate::error::ApiError;
use crate::gateway::{ApiRequest, Gateway, Transport};
use crate::types::{Ack, Id, SavedJob};

/// # Errors
///
/// Propagates gateway errors.
pub async fn list<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<SavedJob>, ApiError> {
    fetch_list(gateway, ApiRequest::get("saved/")).await
}

/// Saving an already-saved job succeeds.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn add<T: Transport>(gateway: &Gateway<T>, job_id: Id) -> Result<Ack, ApiError> {
    gateway.post("saved/add/", &json!({ "job_id": job_id })).await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn remove<T: Transport>(gateway: &Gateway<T>, job_id: Id) -> Result<(), ApiError> {
    gateway.delete(&format!("saved/remove/{job_id}/")).await
}
