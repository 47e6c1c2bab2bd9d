//! `applications/` endpoints and the recruiter application views.

use serde_json::json;

use super::{fetch_list, with_query};
use crate::error::ApiError;
use crate::gateway::{ApiRequest, Gateway, Transport};
use crate::types::{
    Application, ApplicationFilters, ApplicationStatus, ApplyRequest, Id, Interview, InterviewDraft, JobTest,
    TestAnswer, TestOutcome,
};

/// The candidate's own applications.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn list<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Application>, ApiError> {
    fetch_list(gateway, ApiRequest::get("applications/")).await
}

/// # Errors
///
/// `ApiError::Rejected` when already applied or the profile is incomplete.
pub async fn apply<T: Transport>(gateway: &Gateway<T>, request: &ApplyRequest) -> Result<Application, ApiError> {
    gateway.post("applications/", request).await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn withdraw<T: Transport>(gateway: &Gateway<T>, id: Id) -> Result<(), ApiError> {
    gateway.delete(&format!("applications/{id}/")).await
}

/// Recruiter status change.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn update_status<T: Transport>(
    gateway: &Gateway<T>,
    id: Id,
    status: ApplicationStatus,
) -> Result<(), ApiError> {
    let request = ApiRequest::patch(format!("applications/{id}/")).json(&json!({ "status": status }))?;
    gateway.execute(request).await
}

/// Screening test for one of the candidate's applications.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn test<T: Transport>(gateway: &Gateway<T>, id: Id) -> Result<JobTest, ApiError> {
    gateway.get(&format!("applications/{id}/test/")).await
}

/// Submit answers. Unanswered questions are simply omitted.
///
/// # Errors
///
/// `ApiError::Rejected` when the test was already completed.
pub async fn submit_test<T: Transport>(
    gateway: &Gateway<T>,
    id: Id,
    answers: &[TestAnswer],
) -> Result<TestOutcome, ApiError> {
    let answered: Vec<&TestAnswer> = answers
        .iter()
        .filter(|answer| !answer.selected_option.trim().is_empty())
        .collect();
    gateway
        .post(&format!("applications/{id}/submit-test/"), &json!({ "answers": answered }))
        .await
}

/// Recruiter view of a candidate's answers.
///
/// # Errors
///
/// `ApiError::Forbidden` for a recruiter who does not own the job.
pub async fn test_results<T: Transport>(gateway: &Gateway<T>, id: Id) -> Result<JobTest, ApiError> {
    gateway.get(&format!("applications/{id}/test-results/")).await
}

/// Applications to the signed-in recruiter's jobs.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn for_recruiter<T: Transport>(
    gateway: &Gateway<T>,
    filters: &ApplicationFilters,
) -> Result<Vec<Application>, ApiError> {
    fetch_list(
        gateway,
        with_query(ApiRequest::get("recruiter/applications/"), filters.to_query()),
    )
    .await
}

/// # Errors
///
/// Propagates gateway errors.
pub async fn interviews<T: Transport>(gateway: &Gateway<T>, id: Id) -> Result<Vec<Interview>, ApiError> {
    fetch_list(gateway, ApiRequest::get(format!("applications/{id}/interviews/"))).await
}

/// # Errors
///
/// `ApiError::Rejected` with field errors on validation failure.
pub async fn schedule_interview<T: Transport>(
    gateway: &Gateway<T>,
    id: Id,
    draft: &InterviewDraft,
) -> Result<Interview, ApiError> {
    gateway.post(&format!("applications/{id}/interviews/"), draft).await
}
