//! `alerts/` endpoints: alert rules and both notification feeds.

use serde_json::json;

use super::fetch_list;
use crate::error::ApiError;
use crate::gateway::{ApiRequest, Gateway, Transport};
use crate::types::{AlertDraft, AlertNotification, Id, JobAlert, StatusNotification};

/// # Errors
///
/// Propagates gateway errors.
pub async fn list<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<JobAlert>, ApiError> {
    fetch_list(gateway, ApiRequest::get("alerts/")).await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn create<T: Transport>(gateway: &Gateway<T>, draft: &AlertDraft) -> Result<JobAlert, ApiError> {
    gateway.post("alerts/", draft).await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn update<T: Transport>(gateway: &Gateway<T>, id: Id, draft: &AlertDraft) -> Result<JobAlert, ApiError> {
    gateway.put(&format!("alerts/{id}/"), draft).await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn delete<T: Transport>(gateway: &Gateway<T>, id: Id) -> Result<(), ApiError> {
    gateway.delete(&format!("alerts/{id}/")).await
}

/// New jobs matching the candidate's alerts.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn notifications<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<AlertNotification>, ApiError> {
    fetch_list(gateway, ApiRequest::get("alerts/notifications/")).await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn mark_notification_read<T: Transport>(gateway: &Gateway<T>, id: Id) -> Result<(), ApiError> {
    let request = ApiRequest::patch(format!("alerts/notifications/{id}/read/")).json(&json!({}))?;
    gateway.execute(request).await
}

/// Status changes on the candidate's applications.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn status_notifications<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<StatusNotification>, ApiError> {
    fetch_list(gateway, ApiRequest::get("alerts/application-status/")).await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn mark_status_read<T: Transport>(gateway: &Gateway<T>, id: Id) -> Result<(), ApiError> {
    let request = ApiRequest::patch(format!("alerts/application-status/{id}/read/")).json(&json!({}))?;
    gateway.execute(request).await
}
