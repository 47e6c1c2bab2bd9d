//! Jobs the server recommends from the candidate's skills.

use jobportal::types::Job;
use jobportal::{api, routes};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::portal::use_portal;

#[component]
pub fn RecommendedJobsPage() -> impl IntoView {
    let portal = use_portal();
    let jobs = LocalResource::new(move || {
        let portal = portal.clone();
        async move { api::jobs::recommended(portal.gateway()).await.map_err(|e| e.user_message()) }
    });

    view! {
        <div class="recommended-page">
            <h1>"Recommended for you"</h1>
            <Suspense fallback=move || view! { <p>"Loading recommendations..."</p> }>
                {move || {
                    jobs.get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(items) if items.is_empty() => {
                                view! { <p>"Add skills to your profile to get recommendations."</p> }
                                    .into_any()
                            }
                            Ok(items) => {
                                let cards = items.into_iter().map(job_card).collect::<Vec<_>>();
                                view! { <div class="recommended-page__list">{cards}</div> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn job_card(job: Job) -> impl IntoView {
    view! {
        <article class="job-card">
            <h2>
                <A href=routes::job_detail(job.id)>{job.title}</A>
            </h2>
            <p class="job-card__meta">{job.company_name} " · " {job.location} " · " {job.job_type}</p>
            {job.skills.map(|skills| view! { <p class="job-card__skills">{skills}</p> })}
        </article>
    }
}
