use super::*;
use crate::session::SessionPhase;
use crate::types::SessionUser;

fn signed_in(role: Option<Role>) -> SessionSnapshot {
    SessionSnapshot {
        phase: SessionPhase::Authenticated,
        user: role.map(|role| SessionUser {
            id: 1,
            username: "asha".into(),
            email: None,
            role,
            profile_complete: None,
        }),
        is_authenticated: true,
        loading_user: false,
    }
}

fn loading() -> SessionSnapshot {
    SessionSnapshot {
        phase: SessionPhase::Authenticating,
        user: None,
        is_authenticated: true,
        loading_user: true,
    }
}

fn routes_of(links: &[NavLink]) -> Vec<&'static str> {
    links.iter().map(|link| link.route).collect()
}

// =============================================================================
// landing
// =============================================================================

#[test]
fn landing_depends_on_role() {
    assert_eq!(landing_route(Some(Role::Recruiter)), RECRUITER_DASHBOARD);
    assert_eq!(landing_route(Some(Role::Candidate)), JOBS);
    assert_eq!(landing_route(Some(Role::Other)), HOME);
    assert_eq!(landing_route(None), HOME);
}

#[test]
fn dynamic_routes() {
    assert_eq!(job_detail(12), "/jobs/12");
    assert_eq!(candidate_test(3), "/candidate/test/3");
}

// =============================================================================
// nav links
// =============================================================================

#[test]
fn anonymous_sees_jobs_login_register() {
    let links = nav_links(&SessionSnapshot::anonymous());
    assert_eq!(routes_of(&links), vec![JOBS, LOGIN, REGISTER]);
}

#[test]
fn candidate_links_end_with_profile_chip() {
    let links = nav_links(&signed_in(Some(Role::Candidate)));
    assert_eq!(
        routes_of(&links),
        vec![
            JOBS,
            CANDIDATE_DASHBOARD,
            CANDIDATE_APPLICATIONS,
            CANDIDATE_SAVED,
            CANDIDATE_RECOMMENDED,
            CANDIDATE_ALERTS,
            CANDIDATE_PROFILE,
        ]
    );
    assert_eq!(links.last().unwrap().label, "Hi, asha");
}

#[test]
fn recruiter_links() {
    let links = nav_links(&signed_in(Some(Role::Recruiter)));
    assert!(routes_of(&links).contains(&RECRUITER_POST_JOB));
    assert!(!routes_of(&links).contains(&CANDIDATE_DASHBOARD));
    assert_eq!(links.last().unwrap().route, RECRUITER_PROFILE);
}

#[test]
fn signed_in_without_profile_hides_jobs_link() {
    let links = nav_links(&signed_in(None));
    assert_eq!(links, vec![NavLink::new("Profile", HOME)]);
}

// =============================================================================
// pages
// =============================================================================

#[test]
fn every_nav_link_resolves_to_a_page() {
    let snapshots = [
        SessionSnapshot::anonymous(),
        signed_in(Some(Role::Candidate)),
        signed_in(Some(Role::Recruiter)),
        signed_in(Some(Role::Other)),
        signed_in(None),
    ];
    for snapshot in &snapshots {
        for link in nav_links(snapshot) {
            assert!(is_page(link.route), "{} has no page", link.route);
        }
    }
}

#[test]
fn landing_and_dynamic_routes_are_pages() {
    for role in [Some(Role::Candidate), Some(Role::Recruiter), Some(Role::Other), None] {
        assert!(is_page(landing_route(role)));
        assert!(is_page(profile_route(role)));
    }
    assert!(is_page(&job_detail(12)));
    assert!(is_page(&candidate_test(3)));
}

#[test]
fn page_matching_is_exact() {
    assert!(is_page("/"));
    assert!(!is_page(""));
    assert!(!is_page("/jobs/"));
    assert!(!is_page("/jobs/4/edit"));
    assert!(!is_page("/candidate/test/"));
    assert!(!is_page("/candidate/settings"));
}

// =============================================================================
// guard
// =============================================================================

#[test]
fn public_routes_always_allowed() {
    for path in [HOME, JOBS, LOGIN, REGISTER] {
        assert_eq!(guard(path, &SessionSnapshot::anonymous()), RouteAccess::Allow);
        assert_eq!(guard(path, &loading()), RouteAccess::Allow);
    }
}

#[test]
fn protected_routes_wait_while_loading() {
    assert_eq!(guard(CANDIDATE_DASHBOARD, &loading()), RouteAccess::Wait);
    assert_eq!(guard("/jobs/4", &loading()), RouteAccess::Wait);
}

#[test]
fn anonymous_is_sent_to_login() {
    assert_eq!(
        guard(RECRUITER_ANALYTICS, &SessionSnapshot::anonymous()),
        RouteAccess::RedirectLogin
    );
    assert_eq!(guard("/jobs/4", &SessionSnapshot::anonymous()), RouteAccess::RedirectLogin);
}

#[test]
fn wrong_role_is_sent_to_own_landing() {
    assert_eq!(
        guard(RECRUITER_DASHBOARD, &signed_in(Some(Role::Candidate))),
        RouteAccess::Redirect(JOBS)
    );
    assert_eq!(
        guard(CANDIDATE_ALERTS, &signed_in(Some(Role::Recruiter))),
        RouteAccess::Redirect(RECRUITER_DASHBOARD)
    );
    assert_eq!(guard(CANDIDATE_ALERTS, &signed_in(None)), RouteAccess::Redirect(HOME));
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(guard(CANDIDATE_ALERTS, &signed_in(Some(Role::Candidate))), RouteAccess::Allow);
    assert_eq!(guard("/jobs/4", &signed_in(Some(Role::Recruiter))), RouteAccess::Allow);
    assert_eq!(guard("/candidate/test/3", &signed_in(Some(Role::Candidate))), RouteAccess::Allow);
}
