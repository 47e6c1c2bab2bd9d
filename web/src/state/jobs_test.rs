use super::*;

// =============================================================
// JobSearch
// =============================================================

#[test]
fn default_starts_on_first_page_without_filters() {
    let search = JobSearch::default();
    assert_eq!(search.page, 1);
    assert!(!search.has_filters());
    assert_eq!(search.empty_message(), "No jobs posted yet.");
}

#[test]
fn typing_does_not_apply_filters() {
    let mut search = JobSearch::default();
    search.draft.search = "rust".into();
    assert!(!search.has_filters());
}

#[test]
fn submit_trims_and_resets_page() {
    let mut search = JobSearch {
        page: 3,
        ..JobSearch::default()
    };
    search.draft.location = "  Pune ".into();

    search.submit();

    assert_eq!(search.applied.location, "Pune");
    assert_eq!(search.page, 1);
    assert_eq!(search.empty_message(), "No jobs match your filters.");
}

#[test]
fn whitespace_only_filters_count_as_none() {
    let mut search = JobSearch::default();
    search.draft.job_type = "   ".into();
    search.submit();
    assert!(!search.has_filters());
}

#[test]
fn clear_resets_everything() {
    let mut search = JobSearch::default();
    search.draft.search = "go".into();
    search.submit();
    search.page = 2;

    search.clear();

    assert_eq!(search, JobSearch::default());
}
