//! Single job with the candidate's apply form.

use jobportal::api;
use jobportal::types::{ApplyRequest, Role};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::portal::use_portal;

#[component]
pub fn JobDetailPage() -> impl IntoView {
    let portal = use_portal();
    let session = portal.session();
    let params = use_params_map();
    let job_id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));

    let job = {
        let portal = portal.clone();
        LocalResource::new(move || {
            let portal = portal.clone();
            let id = job_id();
            async move {
                let Some(id) = id else {
                    return Err("Job not found.".to_owned());
                };
                api::jobs::get(portal.gateway(), id).await.map_err(|e| e.user_message())
            }
        })
    };

    let cover_letter = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Result<String, String>>);

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(job_id) = job_id() else {
            return;
        };
        let portal = portal.clone();
        let request = ApplyRequest {
            job_id,
            cover_letter: cover_letter.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            let result = api::applications::apply(portal.gateway(), &request)
                .await
                .map(|_| "Application submitted.".to_owned())
                .map_err(|e| e.user_message());
            outcome.set(Some(result));
        });
    };

    let is_candidate = move || session.with(|s| s.role() == Some(Role::Candidate));

    view! {
        <div class="job-detail-page">
            <Suspense fallback=move || view! { <p>"Loading job..."</p> }>
                {move || {
                    job.get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(job) => {
                                view! {
                                    <h1>{job.title}</h1>
                                    <p class="job-detail-page__meta">
                                        {job.company_name} " · " {job.location} " · " {job.job_type}
                                    </p>
                                    <p>{job.description}</p>
                                    {job.skills.map(|skills| view! { <p>"Skills: " {skills}</p> })}
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=is_candidate>
                <form class="job-detail-page__apply" on:submit=on_apply.clone()>
                    <label>"Cover letter" <textarea bind:value=cover_letter></textarea></label>
                    <button type="submit" class="btn btn--primary">"Apply"</button>
                </form>
            </Show>
            {move || {
                outcome
                    .get()
                    .map(|result| match result {
                        Ok(msg) => view! { <p class="form-success">{msg}</p> }.into_any(),
                        Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                    })
            }}
        </div>
    }
}
