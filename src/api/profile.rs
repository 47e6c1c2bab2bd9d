//! `candidate/profile/` endpoint.

use crate::error::ApiError;
use crate::gateway::{Gateway, Transport};
use crate::types::CandidateProfile;

/// # Errors
///
/// Propagates gateway errors.
pub async fn candidate<T: Transport>(gateway: &Gateway<T>) -> Result<CandidateProfile, ApiError> {
    gateway.get("candidate/profile/").await
}

/// # Errors
///
/// `ApiError::Rejected` with field errors on validation failure.
pub async fn update_candidate<T: Transport>(
    gateway: &Gateway<T>,
    profile: &CandidateProfile,
) -> Result<CandidateProfile, ApiError> {
    gateway.put("candidate/profile/", profile).await
}
