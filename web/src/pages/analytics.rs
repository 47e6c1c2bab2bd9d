//! Application counts broken down by status and by job.

use jobportal::api;
use leptos::prelude::*;

use crate::state::portal::use_portal;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let portal = use_portal();
    let analytics = LocalResource::new(move || {
        let portal = portal.clone();
        async move { api::recruiter::analytics(portal.gateway()).await.map_err(|e| e.user_message()) }
    });

    view! {
        <div class="analytics-page">
            <h1>"Analytics"</h1>
            <Suspense fallback=move || view! { <p>"Loading analytics..."</p> }>
                {move || {
                    analytics
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(stats) => {
                                let by_status = stats
                                    .applications_by_status
                                    .into_iter()
                                    .map(|(status, count)| view! { <dt>{status}</dt><dd>{count}</dd> })
                                    .collect::<Vec<_>>();
                                let mut per_job = stats.applications_per_job;
                                per_job.sort_by(|a, b| b.applications_count.cmp(&a.applications_count));
                                let rows = per_job
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.job_title}</td>
                                                <td>{row.applications_count}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! {
                                    <h2>"By status"</h2>
                                    <dl class="stats">{by_status}</dl>
                                    <h2>"By job"</h2>
                                    <table class="analytics-page__jobs">
                                        <thead>
                                            <tr>
                                                <th>"Job"</th>
                                                <th>"Applications"</th>
                                            </tr>
                                        </thead>
                                        <tbody>{rows}</tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
