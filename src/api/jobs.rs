//! `jobs/` endpoints.

use super::{fetch_list, with_query};
use crate::error::ApiError;
use crate::gateway::{ApiRequest, Gateway, Transport};
use crate::types::{Id, Job, JobDraft, JobFilters};

/// Public job search.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn list<T: Transport>(gateway: &Gateway<T>, filters: &JobFilters) -> Result<Vec<Job>, ApiError> {
    fetch_list(gateway, with_query(ApiRequest::get("jobs/"), filters.to_query())).await
}

/// # Errors
///
/// `ApiError::Rejected` (404) for an unknown job.
pub async fn get<T: Transport>(gateway: &Gateway<T>, id: Id) -> Result<Job, ApiError> {
    gateway.get(&format!("jobs/{id}/")).await
}

/// Jobs posted by the signed-in recruiter.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn mine<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Job>, ApiError> {
    fetch_list(gateway, ApiRequest::get("jobs/my-jobs/")).await
}

/// Jobs matched to the signed-in candidate's skills.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn recommended<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Job>, ApiError> {
    fetch_list(gateway, ApiRequest::get("jobs/recommended/")).await
}

/// # Errors
///
/// `ApiError::Rejected` with field errors on validation failure.
pub async fn create<T: Transport>(gateway: &Gateway<T>, draft: &JobDraft) -> Result<Job, ApiError> {
    gateway.post("jobs/", draft).await
}

/// # Errors
///
/// `ApiError::Rejected` with field errors on validation failure.
pub async fn update<T: Transport>(gateway: &Gateway<T>, id: Id, draft: &JobDraft) -> Result<Job, ApiError> {
    gateway.put(&format!("jobs/{id}/"), draft).await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn delete<T: Transport>(gateway: &Gateway<T>, id: Id) -> Result<(), ApiError> {
    gateway.delete(&format!("jobs/{id}/")).await
}
