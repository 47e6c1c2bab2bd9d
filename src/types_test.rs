use super::*;

// =============================================================================
// SessionUser / Role
// =============================================================================

#[test]
fn session_user_decodes_me_payload() {
    let user: SessionUser =
        serde_json::from_str(r#"{"id":3,"username":"asha","email":"a@x.io","role":"candidate"}"#).unwrap();
    assert_eq!(user.role, Role::Candidate);
    assert_eq!(user.profile_complete, None);
}

#[test]
fn session_user_reads_profile_complete_flag() {
    let user: SessionUser =
        serde_json::from_str(r#"{"id":3,"username":"asha","role":"candidate","profile_complete":false}"#).unwrap();
    assert_eq!(user.profile_complete, Some(false));
}

#[test]
fn unknown_role_is_other() {
    let user: SessionUser = serde_json::from_str(r#"{"id":1,"username":"root","role":"admin"}"#).unwrap();
    assert_eq!(user.role, Role::Other);
}

#[test]
fn token_pair_debug_hides_tokens() {
    let pair = TokenPair {
        access: "secret-access".to_owned(),
        refresh: Some("secret-refresh".to_owned()),
    };
    let shown = format!("{pair:?}");
    assert!(!shown.contains("secret"));
}

#[test]
fn login_request_debug_hides_password() {
    let req = LoginRequest {
        username: "asha".to_owned(),
        password: "hunter2".to_owned(),
    };
    let shown = format!("{req:?}");
    assert!(shown.contains("asha"));
    assert!(!shown.contains("hunter2"));
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn registration_requires_company_for_recruiters() {
    let reg = Registration {
        username: "ravi".to_owned(),
        email: "r@x.io".to_owned(),
        password: "pw".to_owned(),
        role: Some(Role::Recruiter),
        ..Registration::default()
    };
    assert_eq!(reg.missing_fields(), vec!["company_name"]);
}

#[test]
fn registration_omits_blank_company_fields() {
    let reg = Registration {
        username: "asha".to_owned(),
        email: "a@x.io".to_owned(),
        password: "pw".to_owned(),
        role: Some(Role::Candidate),
        ..Registration::default()
    };
    let json = serde_json::to_value(&reg).unwrap();
    assert_eq!(json["role"], "candidate");
    assert!(json.get("company_name").is_none());
    assert!(reg.missing_fields().is_empty());
}

// =============================================================================
// Job
// =============================================================================

#[test]
fn job_decodes_with_decimal_strings() {
    let job: Job = serde_json::from_str(
        r#"{"id":5,"company":2,"company_name":"Acme","title":"Rust Dev","description":"d",
            "location":"Pune","job_type":"Full-time","salary_min":"50000.00","salary_max":80000,
            "is_active":true,"created_at":"2024-01-05T10:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(job.salary_min.as_deref(), Some("50000.00"));
    assert_eq!(job.salary_max.as_deref(), Some("80000"));
    assert!(!job.is_saved);
}

#[test]
fn job_minimal_payload_defaults() {
    let job: Job = serde_json::from_str(r#"{"id":1,"title":"Intern"}"#).unwrap();
    assert!(job.is_active);
    assert_eq!(job.salary_min, None);
    assert_eq!(job.company_name, "");
}

#[test]
fn job_draft_reports_blank_required_fields() {
    let draft = JobDraft {
        title: "Backend".to_owned(),
        location: "  ".to_owned(),
        ..JobDraft::default()
    };
    assert_eq!(draft.missing_fields(), vec!["description", "location", "job_type"]);
}

#[test]
fn job_filters_trim_and_skip_blank() {
    let filters = JobFilters {
        search: "  rust ".to_owned(),
        location: String::new(),
        job_type: "Internship".to_owned(),
    };
    assert_eq!(
        filters.to_query(),
        vec![
            ("search".to_owned(), "rust".to_owned()),
            ("job_type".to_owned(), "Internship".to_owned())
        ]
    );
    assert!(JobFilters::default().is_empty());
}

// =============================================================================
// Applications / interviews
// =============================================================================

#[test]
fn application_status_parse_is_case_insensitive() {
    assert_eq!(ApplicationStatus::parse(" Shortlisted "), Some(ApplicationStatus::Shortlisted));
    assert_eq!(ApplicationStatus::parse("hired"), None);
}

#[test]
fn application_can_take_test_only_when_incomplete() {
    let mut app: Application = serde_json::from_str(
        r#"{"id":1,"status":"applied","test":{"id":4,"total_marks":50,"passed":false,"questions":[]}}"#,
    )
    .unwrap();
    assert!(app.can_take_test());
    if let Some(test) = app.test.as_mut() {
        test.completed_at = Some("2024-02-01T09:00:00Z".to_owned());
    }
    assert!(!app.can_take_test());
    app.test = None;
    assert!(!app.can_take_test());
}

#[test]
fn interview_defaults_mode_and_status() {
    let iv: Interview = serde_json::from_str(r#"{"id":2,"scheduled_at":"2024-03-01T10:00:00Z"}"#).unwrap();
    assert_eq!(iv.mode, InterviewMode::Online);
    assert_eq!(iv.status, InterviewStatus::Scheduled);
    assert_eq!(iv.display_title(), "Job");
}

#[test]
fn interview_join_link_detection() {
    let mut iv: Interview = serde_json::from_str(r#"{"id":2,"location":"HTTPS://meet.example.com/x"}"#).unwrap();
    assert!(iv.has_join_link());
    iv.location = Some("Building 4, Floor 2".to_owned());
    assert!(!iv.has_join_link());
    iv.location = None;
    assert!(!iv.has_join_link());
}

#[test]
fn interview_draft_serializes_lowercase_mode() {
    let draft = InterviewDraft {
        scheduled_at: "2024-03-01T10:00:00Z".to_owned(),
        mode: InterviewMode::Onsite,
        location: "HQ".to_owned(),
        notes: String::new(),
    };
    assert_eq!(serde_json::to_value(&draft).unwrap()["mode"], "onsite");
}

// =============================================================================
// ListPayload / analytics
// =============================================================================

#[test]
fn list_payload_accepts_plain_array() {
    let list: ListPayload<Interview> = serde_json::from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
    assert_eq!(list.into_vec().len(), 2);
}

#[test]
fn list_payload_accepts_paged_envelope() {
    let list: ListPayload<Interview> =
        serde_json::from_str(r#"{"count":1,"next":null,"results":[{"id":9}]}"#).unwrap();
    let items = list.into_vec();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 9);
}

#[test]
fn list_payload_envelope_without_results_is_empty() {
    let list: ListPayload<Interview> = serde_json::from_str(r#"{"count":0}"#).unwrap();
    assert!(list.into_vec().is_empty());
}

#[test]
fn analytics_decodes_breakdowns() {
    let stats: RecruiterAnalytics = serde_json::from_str(
        r#"{"total_jobs":3,"active_jobs":2,"total_applications":10,"applications_today":1,
            "applications_last_7_days":4,"applications_by_status":{"applied":6,"rejected":4},
            "applications_per_job":[{"job_id":1,"job_title":"Rust Dev","applications_count":7}]}"#,
    )
    .unwrap();
    assert_eq!(stats.applications_by_status["applied"], 6);
    assert_eq!(stats.applications_per_job[0].applications_count, 7);
}
