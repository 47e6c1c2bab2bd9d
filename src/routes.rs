//! Client routes, role landing pages, navigation links, and the route guard.
//!
//! Routes under `/candidate/` and `/recruiter/` belong to that role; job
//! detail pages only need a signed-in user. Everything else is public.

use crate::session::{LOGIN_ROUTE, SessionSnapshot};
use crate::types::{Id, Role};

pub const HOME: &str = "/";
pub const JOBS: &str = "/jobs";
pub const LOGIN: &str = LOGIN_ROUTE;
pub const REGISTER: &str = "/register";

pub const CANDIDATE_DASHBOARD: &str = "/candidate/dashboard";
pub const CANDIDATE_APPLICATIONS: &str = "/candidate/applications";
pub const CANDIDATE_SAVED: &str = "/candidate/saved-jobs";
pub const CANDIDATE_RECOMMENDED: &str = "/candidate/recommended-jobs";
pub const CANDIDATE_ALERTS: &str = "/candidate/alerts";
pub const CANDIDATE_PROFILE: &str = "/candidate/profile";

pub const RECRUITER_DASHBOARD: &str = "/recruiter/dashboard";
pub const RECRUITER_POST_JOB: &str = "/recruiter/jobs";
pub const RECRUITER_MANAGE_JOBS: &str = "/recruiter/manage-jobs";
pub const RECRUITER_ANALYTICS: &str = "/recruiter/analytics";
pub const RECRUITER_COMPANY: &str = "/recruiter/company";
pub const RECRUITER_PROFILE: &str = "/recruiter/profile";

#[must_use]
pub fn job_detail(id: Id) -> String {
    format!("{JOBS}/{id}")
}

#[must_use]
pub fn candidate_test(application_id: Id) -> String {
    format!("/candidate/test/{application_id}")
}

/// Route patterns the web app renders. `:name` matches one non-empty
/// segment. Keep in step with the `<Routes>` table in the web crate.
pub const PAGES: &[&str] = &[
    HOME,
    LOGIN,
    REGISTER,
    JOBS,
    "/jobs/:id",
    CANDIDATE_DASHBOARD,
    CANDIDATE_APPLICATIONS,
    CANDIDATE_SAVED,
    CANDIDATE_RECOMMENDED,
    CANDIDATE_ALERTS,
    CANDIDATE_PROFILE,
    "/candidate/test/:id",
    RECRUITER_DASHBOARD,
    RECRUITER_POST_JOB,
    RECRUITER_MANAGE_JOBS,
    RECRUITER_ANALYTICS,
    RECRUITER_COMPANY,
    RECRUITER_PROFILE,
];

/// Whether `path` resolves to one of [`PAGES`].
#[must_use]
pub fn is_page(path: &str) -> bool {
    PAGES.iter().any(|pattern| matches_pattern(pattern, path))
}

fn matches_pattern(pattern: &str, path: &str) -> bool {
    let mut wanted = pattern.split('/');
    let mut actual = path.split('/');
    loop {
        match (wanted.next(), actual.next()) {
            (None, None) => return true,
            (Some(w), Some(a)) if w.starts_with(':') && !a.is_empty() => {}
            (Some(w), Some(a)) if w == a => {}
            _ => return false,
        }
    }
}

/// Where a user lands right after signing in.
#[must_use]
pub fn landing_route(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Recruiter) => RECRUITER_DASHBOARD,
        Some(Role::Candidate) => JOBS,
        Some(Role::Other) | None => HOME,
    }
}

#[must_use]
pub fn profile_route(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Candidate) => CANDIDATE_PROFILE,
        Some(Role::Recruiter) => RECRUITER_PROFILE,
        Some(Role::Other) | None => HOME,
    }
}

/// Role that owns `path`, if any.
#[must_use]
pub fn required_role(path: &str) -> Option<Role> {
    if path.starts_with("/candidate/") {
        Some(Role::Candidate)
    } else if path.starts_with("/recruiter/") {
        Some(Role::Recruiter)
    } else {
        None
    }
}

/// Whether `path` needs a signed-in user.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    required_role(path).is_some()
        || path
            .strip_prefix(JOBS)
            .is_some_and(|rest| rest.len() > 1 && rest.starts_with('/'))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub route: &'static str,
}

impl NavLink {
    fn new(label: impl Into<String>, route: &'static str) -> Self {
        Self {
            label: label.into(),
            route,
        }
    }
}

/// Links for the navigation bar, in display order.
#[must_use]
pub fn nav_links(snapshot: &SessionSnapshot) -> Vec<NavLink> {
    let role = snapshot.role();
    let mut links = Vec::new();

    if !snapshot.is_authenticated || role.is_some() {
        links.push(NavLink::new("Jobs", JOBS));
    }

    if !snapshot.is_authenticated {
        links.push(NavLink::new("Login", LOGIN));
        links.push(NavLink::new("Register", REGISTER));
        return links;
    }

    match role {
        Some(Role::Candidate) => links.extend([
            NavLink::new("Dashboard", CANDIDATE_DASHBOARD),
            NavLink::new("Applications", CANDIDATE_APPLICATIONS),
            NavLink::new("Saved", CANDIDATE_SAVED),
            NavLink::new("Recommended", CANDIDATE_RECOMMENDED),
            NavLink::new("Alerts", CANDIDATE_ALERTS),
        ]),
        Some(Role::Recruiter) => links.extend([
            NavLink::new("Dashboard", RECRUITER_DASHBOARD),
            NavLink::new("Add Job", RECRUITER_POST_JOB),
            NavLink::new("Manage Jobs", RECRUITER_MANAGE_JOBS),
            NavLink::new("Analytics", RECRUITER_ANALYTICS),
            NavLink::new("Company", RECRUITER_COMPANY),
        ]),
        Some(Role::Other) | None => {}
    }

    let greeting = snapshot
        .user
        .as_ref()
        .filter(|user| !user.username.is_empty())
        .map_or_else(|| "Profile".to_owned(), |user| format!("Hi, {}", user.username));
    links.push(NavLink::new(greeting, profile_route(role)));
    links
}

/// Outcome of checking a route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    /// The profile is still loading; render a placeholder.
    Wait,
    RedirectLogin,
    Redirect(&'static str),
}

#[must_use]
pub fn guard(path: &str, snapshot: &SessionSnapshot) -> RouteAccess {
    if !is_protected(path) {
        return RouteAccess::Allow;
    }
    if snapshot.loading_user {
        return RouteAccess::Wait;
    }
    if !snapshot.is_authenticated {
        return RouteAccess::RedirectLogin;
    }
    match required_role(path) {
        Some(required) if snapshot.role() != Some(required) => RouteAccess::Redirect(landing_route(snapshot.role())),
        _ => RouteAccess::Allow,
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
