use jobportal::ErrorBody;

use super::*;

fn jobs() -> Vec<Job> {
    serde_json::from_str(r#"[{"id":1,"title":"SRE"},{"id":2,"title":"Backend"}]"#).unwrap()
}

// =============================================================================
// saved marks
// =============================================================================

#[test]
fn saved_marks_flag_listed_jobs() {
    let mut found = jobs();
    let saved: Vec<SavedJob> = serde_json::from_str(r#"[{"id":10,"job":{"id":2,"title":"Backend"}}]"#).unwrap();

    apply_saved_marks(&mut found, Ok(saved));

    assert!(!found[0].is_saved);
    assert!(found[1].is_saved);
}

#[test]
fn failed_saved_fetch_leaves_jobs_unmarked() {
    let mut found = jobs();

    apply_saved_marks(
        &mut found,
        Err(ApiError::Forbidden {
            body: ErrorBody::default(),
        }),
    );

    assert!(found.iter().all(|job| !job.is_saved));
    assert_eq!(found.len(), 2);
}

// =============================================================================
// argument parsing
// =============================================================================

#[test]
fn role_parsing_is_case_insensitive() {
    assert_eq!(parse_role(" Recruiter "), Ok(Role::Recruiter));
    assert!(parse_role("admin").is_err());
}
