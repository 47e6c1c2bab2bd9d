//! Wire DTOs for the job-portal REST API.
//!
//! DESIGN
//! ======
//! These mirror backend payloads field-for-field and are passed through to
//! rendering untouched. Optional and server-computed fields default when
//! absent so older or trimmed payloads still decode. Enumerations keep an
//! `Other` variant so an unexpected server value never fails a whole list.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend primary keys.
pub type Id = i64;

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Recruiter,
    #[serde(other)]
    Other,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Recruiter => "recruiter",
            Self::Other => "other",
        }
    }
}

/// Resolved profile of the current credential, from `auth/me/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Id,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    /// Whether the candidate profile is complete enough to apply.
    #[serde(default)]
    pub profile_complete: Option<bool>,
}

/// Response of `auth/login/`.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair").finish_non_exhaustive()
    }
}

#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Body of `auth/register/`. Company fields only apply to recruiters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company_website: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company_description: String,
}

impl Registration {
    /// Names of required fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.username.trim().is_empty() {
            missing.push("username");
        }
        if self.password.is_empty() {
            missing.push("password");
        }
        if self.role.is_none() {
            missing.push("role");
        }
        if self.role == Some(Role::Recruiter) && self.company_name.trim().is_empty() {
            missing.push("company_name");
        }
        missing
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: i64,
    /// URL of the uploaded resume, if any.
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterProfile {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub bio: String,
}

// =============================================================================
// JOBS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: Id,
    #[serde(default)]
    pub company: Option<Id>,
    #[serde(default)]
    pub company_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    /// Decimal amounts arrive as strings (`"120000.00"`).
    #[serde(default, deserialize_with = "decimal_string")]
    pub salary_min: Option<String>,
    #[serde(default, deserialize_with = "decimal_string")]
    pub salary_max: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Client-side mark: the current candidate already saved this job.
    #[serde(default)]
    pub is_saved: bool,
}

/// Body for creating or replacing a job posting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    pub is_active: bool,
}

impl JobDraft {
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("location", &self.location),
            ("job_type", &self.job_type),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Search filters for `jobs/`. Blank filters are omitted from the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub search: String,
    pub location: String,
    pub job_type: String,
}

impl JobFilters {
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        [
            ("search", &self.search),
            ("location", &self.location),
            ("job_type", &self.job_type),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| (key.to_owned(), value.to_owned()))
        })
        .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedJob {
    pub id: Id,
    #[serde(default)]
    pub job: Option<Job>,
    #[serde(default)]
    pub saved_at: Option<String>,
}

// =============================================================================
// APPLICATIONS & TESTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Selected,
    Rejected,
    #[serde(other)]
    Other,
}

impl ApplicationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Shortlisted => "shortlisted",
            Self::Selected => "selected",
            Self::Rejected => "rejected",
            Self::Other => "other",
        }
    }

    /// Parse a user-supplied status name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "applied" => Some(Self::Applied),
            "shortlisted" => Some(Self::Shortlisted),
            "selected" => Some(Self::Selected),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Id,
    #[serde(default)]
    pub job: Option<Job>,
    #[serde(default)]
    pub candidate: Option<Id>,
    #[serde(default)]
    pub candidate_username: String,
    #[serde(default)]
    pub cover_letter: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: Option<String>,
    #[serde(default)]
    pub test: Option<JobTest>,
}

impl Application {
    /// The screening test can be taken when it exists and is not completed.
    #[must_use]
    pub fn can_take_test(&self) -> bool {
        self.test.as_ref().is_some_and(|test| test.completed_at.is_none())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApplyRequest {
    pub job_id: Id,
    pub cover_letter: String,
}

/// Filters for the recruiter's `recruiter/applications/` listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationFilters {
    pub search: String,
    pub job: String,
    pub status: String,
}

impl ApplicationFilters {
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        [("search", &self.search), ("job", &self.job), ("status", &self.status)]
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value.trim();
                (!value.is_empty()).then(|| (key.to_owned(), value.to_owned()))
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestQuestion {
    pub id: Id,
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    /// Only present in recruiter results.
    #[serde(default)]
    pub correct_option: Option<String>,
    /// Only present in recruiter results.
    #[serde(default)]
    pub candidate_answer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTest {
    pub id: Id,
    #[serde(default)]
    pub application: Option<Id>,
    #[serde(default)]
    pub total_marks: i64,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub questions: Vec<TestQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAnswer {
    pub question_id: Id,
    /// One of `A`..`D`.
    pub selected_option: String,
}

/// Response of `applications/{id}/submit-test/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub score: i64,
    pub total: i64,
    pub passed: bool,
    pub application_status: ApplicationStatus,
}

// =============================================================================
// INTERVIEWS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewMode {
    #[default]
    Online,
    Onsite,
    Phone,
    #[serde(other)]
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: Id,
    #[serde(default)]
    pub application_id: Option<Id>,
    #[serde(default)]
    pub candidate_username: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub mode: InterviewMode,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: InterviewStatus,
}

impl Interview {
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.job_title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Job")
    }

    /// Location is a meeting link rather than a place.
    #[must_use]
    pub fn has_join_link(&self) -> bool {
        self.location.as_deref().is_some_and(|loc| {
            let lower = loc.trim().to_ascii_lowercase();
            lower.starts_with("http://") || lower.starts_with("https://")
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InterviewDraft {
    pub scheduled_at: String,
    pub mode: InterviewMode,
    pub location: String,
    pub notes: String,
}

// =============================================================================
// ALERTS & NOTIFICATIONS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAlert {
    pub id: Id,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlertDraft {
    pub keywords: String,
    pub location: String,
    pub job_type: String,
    pub is_active: bool,
}

impl Default for AlertDraft {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            location: String::new(),
            job_type: String::new(),
            is_active: true,
        }
    }
}

/// A job matched one of the candidate's alerts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertNotification {
    pub id: Id,
    #[serde(default)]
    pub job_id: Option<Id>,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An application changed status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusNotification {
    pub id: Id,
    #[serde(default)]
    pub job_id: Option<Id>,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Anything that can be shown as read/unread.
pub trait Readable {
    fn is_read(&self) -> bool;
}

impl Readable for AlertNotification {
    fn is_read(&self) -> bool {
        self.is_read
    }
}

impl Readable for StatusNotification {
    fn is_read(&self) -> bool {
        self.is_read
    }
}

// =============================================================================
// RECRUITER
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    /// `small`, `medium`, or `large`.
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub founded_year: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplicationCount {
    pub job_id: Id,
    #[serde(default)]
    pub job_title: String,
    pub applications_count: u64,
}

/// Numbers computed server-side for the recruiter dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterAnalytics {
    #[serde(default)]
    pub total_jobs: u64,
    #[serde(default)]
    pub active_jobs: u64,
    #[serde(default)]
    pub total_applications: u64,
    #[serde(default)]
    pub applications_today: u64,
    #[serde(default)]
    pub applications_last_7_days: u64,
    #[serde(default)]
    pub applications_by_status: BTreeMap<String, u64>,
    #[serde(default)]
    pub applications_per_job: Vec<JobApplicationCount>,
}

// =============================================================================
// LIST ENVELOPES
// =============================================================================

/// List endpoints return either a bare array or a paginated envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Plain(Vec<T>),
    Paged {
        #[serde(default = "Vec::new")]
        results: Vec<T>,
    },
}

impl<T> ListPayload<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Plain(items) | Self::Paged { results: items } => items,
        }
    }
}

/// Plain `{"message": "..."}` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Accept decimals as either JSON strings or numbers.
fn decimal_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
