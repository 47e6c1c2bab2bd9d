//! `recruiter/` endpoints.

use crate::error::ApiError;
use crate::gateway::{Gateway, Transport};
use crate::types::{CandidateProfile, Company, Id, RecruiterAnalytics, RecruiterProfile};

/// # Errors
///
/// Propagates gateway errors.
pub async fn analytics<T: Transport>(gateway: &Gateway<T>) -> Result<RecruiterAnalytics, ApiError> {
    gateway.get("recruiter/analytics/").await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn company<T: Transport>(gateway: &Gateway<T>) -> Result<Company, ApiError> {
    gateway.get("recruiter/company/").await
}

/// # Errors
///
/// `ApiError::Rejected` with field errors on validation failure.
pub async fn update_company<T: Transport>(gateway: &Gateway<T>, company: &Company) -> Result<Company, ApiError> {
    gateway.put("recruiter/company/", company).await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn profile<T: Transport>(gateway: &Gateway<T>) -> Result<RecruiterProfile, ApiError> {
    gateway.get("recruiter/profile/").await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn update_profile<T: Transport>(
    gateway: &Gateway<T>,
    profile: &RecruiterProfile,
) -> Result<RecruiterProfile, ApiError> {
    gateway.put("recruiter/profile/", profile).await
}

/// Profile of an applicant, as seen by the recruiter.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn candidate<T: Transport>(gateway: &Gateway<T>, id: Id) -> Result<CandidateProfile, ApiError> {
    gateway.get(&format!("recruiter/candidates/{id}/")).await
}
