//! Root application component with routing and the portal context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use tracing::debug;

use crate::components::{navbar::Navbar, protected::Protected};
use crate::pages::{
    alerts::AlertsPage,
    analytics::AnalyticsPage,
    applications::ApplicationsPage,
    company::CompanyPage,
    dashboard::CandidateDashboardPage,
    home::HomePage,
    job_detail::JobDetailPage,
    jobs::JobsPage,
    login::LoginPage,
    manage_jobs::ManageJobsPage,
    post_job::PostJobPage,
    profile::{CandidateProfilePage, RecruiterProfilePage},
    recommended::RecommendedJobsPage,
    recruiter::RecruiterDashboardPage,
    register::RegisterPage,
    saved::SavedJobsPage,
    screening::ScreeningTestPage,
};
use crate::state::portal::{Portal, web_config};

/// Root application component.
///
/// Restores the session from `localStorage`, starts the profile fetch, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let portal = Portal::new(&web_config());
    provide_context(portal.clone());

    leptos::task::spawn_local(async move {
        if portal.client().start().await.is_none() {
            debug!("no signed-in user");
        }
    });

    view! {
        <Title text="Job Portal"/>

        // One <Route> per entry in `routes::PAGES`.
        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("jobs") view=JobsPage/>
                    <Route
                        path=(StaticSegment("jobs"), ParamSegment("id"))
                        view=|| view! { <Protected><JobDetailPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("candidate"), StaticSegment("dashboard"))
                        view=|| view! { <Protected><CandidateDashboardPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("candidate"), StaticSegment("applications"))
                        view=|| view! { <Protected><ApplicationsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("candidate"), StaticSegment("saved-jobs"))
                        view=|| view! { <Protected><SavedJobsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("candidate"), StaticSegment("recommended-jobs"))
                        view=|| view! { <Protected><RecommendedJobsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("candidate"), StaticSegment("alerts"))
                        view=|| view! { <Protected><AlertsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("candidate"), StaticSegment("profile"))
                        view=|| view! { <Protected><CandidateProfilePage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("candidate"), StaticSegment("test"), ParamSegment("id"))
                        view=|| view! { <Protected><ScreeningTestPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("recruiter"), StaticSegment("dashboard"))
                        view=|| view! { <Protected><RecruiterDashboardPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("recruiter"), StaticSegment("jobs"))
                        view=|| view! { <Protected><PostJobPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("recruiter"), StaticSegment("manage-jobs"))
                        view=|| view! { <Protected><ManageJobsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("recruiter"), StaticSegment("analytics"))
                        view=|| view! { <Protected><AnalyticsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("recruiter"), StaticSegment("company"))
                        view=|| view! { <Protected><CompanyPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("recruiter"), StaticSegment("profile"))
                        view=|| view! { <Protected><RecruiterProfilePage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
