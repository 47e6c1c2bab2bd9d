//! Recruiter dashboard showing server-computed analytics.

use jobportal::api;
use leptos::prelude::*;

use crate::state::portal::use_portal;

#[component]
pub fn RecruiterDashboardPage() -> impl IntoView {
    let portal = use_portal();
    let analytics = LocalResource::new(move || {
        let portal = portal.clone();
        async move { api::recruiter::analytics(portal.gateway()).await.map_err(|e| e.user_message()) }
    });

    view! {
        <div class="recruiter-dashboard">
            <h1>"Dashboard"</h1>
            <Suspense fallback=move || view! { <p>"Loading analytics..."</p> }>
                {move || {
                    analytics
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(stats) => {
                                let per_job = stats
                                    .applications_per_job
                                    .into_iter()
                                    .map(|row| view! { <li>{row.job_title} ": " {row.applications_count}</li> })
                                    .collect::<Vec<_>>();
                                view! {
                                    <dl class="stats">
                                        <dt>"Total jobs"</dt>
                                        <dd>{stats.total_jobs}</dd>
                                        <dt>"Active jobs"</dt>
                                        <dd>{stats.active_jobs}</dd>
                                        <dt>"Applications"</dt>
                                        <dd>{stats.total_applications}</dd>
                                        <dt>"Today"</dt>
                                        <dd>{stats.applications_today}</dd>
                                        <dt>"Last 7 days"</dt>
                                        <dd>{stats.applications_last_7_days}</dd>
                                    </dl>
                                    <h2>"Applications per job"</h2>
                                    <ul>{per_job}</ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
