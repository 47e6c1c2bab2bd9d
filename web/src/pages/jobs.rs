//! Public job search with saved-job marks for candidates.

use jobportal::listing::{self, DEFAULT_PAGE_SIZE};
use jobportal::types::{Job, Role};
use jobportal::{api, routes};
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::warn;

use crate::components::pagination::Pagination;
use crate::state::jobs::JobSearch;
use crate::state::portal::use_portal;

#[component]
pub fn JobsPage() -> impl IntoView {
    let portal = use_portal();
    let session = portal.session();
    let search = RwSignal::new(JobSearch::default());

    let jobs = {
        let portal = portal.clone();
        LocalResource::new(move || {
            let portal = portal.clone();
            let filters = search.with(|s| s.applied.clone());
            let candidate = session.with(|s| s.role() == Some(Role::Candidate));
            async move {
                let mut found = api::jobs::list(portal.gateway(), &filters)
                    .await
                    .map_err(|e| e.user_message())?;
                if candidate {
                    match api::saved::list(portal.gateway()).await {
                        Ok(saved) => listing::mark_saved(&mut found, &saved),
                        Err(e) => warn!(error = %e, "saved jobs unavailable"),
                    }
                }
                Ok::<Vec<Job>, String>(found)
            }
        })
    };

    let save = Callback::new({
        let portal = portal.clone();
        move |job_id: i64| {
            let portal = portal.clone();
            leptos::task::spawn_local(async move {
                match api::saved::add(portal.gateway(), job_id).await {
                    Ok(_) => jobs.refetch(),
                    Err(e) => warn!(job_id, error = %e, "save failed"),
                }
            });
        }
    });

    let on_page = Callback::new(move |page: usize| search.update(|s| s.page = page));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        search.update(JobSearch::submit);
    };

    let draft_input = move |field: fn(&mut JobSearch) -> &mut String| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            search.update(|s| *field(s) = value);
        }
    };

    let can_save = move || session.with(|s| s.role() == Some(Role::Candidate));

    view! {
        <div class="jobs-page">
            <form class="jobs-page__filters" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="Keywords"
                    prop:value=move || search.with(|s| s.draft.search.clone())
                    on:input=draft_input(|s| &mut s.draft.search)
                />
                <input
                    type="text"
                    placeholder="Location"
                    prop:value=move || search.with(|s| s.draft.location.clone())
                    on:input=draft_input(|s| &mut s.draft.location)
                />
                <input
                    type="text"
                    placeholder="Job type"
                    prop:value=move || search.with(|s| s.draft.job_type.clone())
                    on:input=draft_input(|s| &mut s.draft.job_type)
                />
                <button type="submit" class="btn btn--primary">"Search"</button>
                <button type="button" class="btn" on:click=move |_| search.update(JobSearch::clear)>
                    "Clear"
                </button>
            </form>

            <Suspense fallback=move || view! { <p>"Loading jobs..."</p> }>
                {move || {
                    jobs.get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(found) if found.is_empty() => {
                                view! { <p>{search.with(JobSearch::empty_message)}</p> }.into_any()
                            }
                            Ok(found) => {
                                let page = listing::paginate(&found, search.with(|s| s.page), DEFAULT_PAGE_SIZE);
                                let cards = page
                                    .items
                                    .iter()
                                    .map(|job| view! { <JobCard job=job.clone() can_save=can_save() on_save=save/> })
                                    .collect::<Vec<_>>();
                                view! {
                                    <div class="jobs-page__list">{cards}</div>
                                    <Pagination pager=page.pager on_change=on_page/>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn JobCard(job: Job, can_save: bool, on_save: Callback<i64>) -> impl IntoView {
    let id = job.id;
    let saved = job.is_saved;
    view! {
        <article class="job-card">
            <h2>
                <A href=routes::job_detail(id)>{job.title}</A>
            </h2>
            <p class="job-card__meta">{job.company_name} " · " {job.location} " · " {job.job_type}</p>
            {can_save
                .then(|| {
                    view! {
                        <button class="btn" disabled=saved on:click=move |_| on_save.run(id)>
                            {if saved { "Saved" } else { "Save" }}
                        </button>
                    }
                })}
        </article>
    }
}
