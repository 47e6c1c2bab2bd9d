//! Candidate's saved jobs with a remove action.

use jobportal::listing::{self, DEFAULT_PAGE_SIZE};
use jobportal::types::{Id, SavedJob};
use jobportal::{api, routes};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::pagination::Pagination;
use crate::state::portal::use_portal;

#[component]
pub fn SavedJobsPage() -> impl IntoView {
    let portal = use_portal();
    let page = RwSignal::new(1_usize);
    let error = RwSignal::new(None::<String>);

    let saved = {
        let portal = portal.clone();
        LocalResource::new(move || {
            let portal = portal.clone();
            async move {
                let mut items = api::saved::list(portal.gateway())
                    .await
                    .map_err(|e| e.user_message())?;
                listing::sort_newest_first(&mut items);
                Ok::<Vec<SavedJob>, String>(items)
            }
        })
    };

    let on_remove = Callback::new(move |job_id: Id| {
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            match api::saved::remove(portal.gateway(), job_id).await {
                Ok(()) => {
                    error.set(None);
                    saved.refetch();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });
    let on_page = Callback::new(move |next: usize| page.set(next));

    view! {
        <div class="saved-page">
            <h1>"Saved jobs"</h1>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <Suspense fallback=move || view! { <p>"Loading saved jobs..."</p> }>
                {move || {
                    saved
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(items) if items.is_empty() => {
                                view! { <p>"You have not saved any jobs."</p> }.into_any()
                            }
                            Ok(items) => {
                                let shown = listing::paginate(&items, page.get(), DEFAULT_PAGE_SIZE);
                                let rows = shown
                                    .items
                                    .iter()
                                    .filter_map(|entry| entry.job.clone())
                                    .map(|job| {
                                        let id = job.id;
                                        view! {
                                            <li class="saved-row">
                                                <A href=routes::job_detail(id)>{job.title}</A>
                                                <span class="saved-row__meta">
                                                    {job.company_name} " · " {job.location}
                                                </span>
                                                <button class="btn" on:click=move |_| on_remove.run(id)>
                                                    "Remove"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! {
                                    <ul class="saved-page__list">{rows}</ul>
                                    <Pagination pager=shown.pager on_change=on_page/>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
