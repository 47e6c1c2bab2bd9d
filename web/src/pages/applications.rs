//! Candidate's applications, newest first.

use jobportal::{api, routes};
use jobportal::listing::{self, DEFAULT_PAGE_SIZE};
use jobportal::types::Application;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::pagination::Pagination;
use crate::state::portal::use_portal;

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let portal = use_portal();
    let page = RwSignal::new(1_usize);

    let applications = LocalResource::new(move || {
        let portal = portal.clone();
        async move {
            let mut items = api::applications::list(portal.gateway())
                .await
                .map_err(|e| e.user_message())?;
            listing::sort_newest_first(&mut items);
            Ok::<Vec<Application>, String>(items)
        }
    });

    let on_page = Callback::new(move |next: usize| page.set(next));

    view! {
        <div class="applications-page">
            <h1>"My applications"</h1>
            <Suspense fallback=move || view! { <p>"Loading applications..."</p> }>
                {move || {
                    applications
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(items) if items.is_empty() => {
                                view! { <p>"You have not applied to any jobs yet."</p> }.into_any()
                            }
                            Ok(items) => {
                                let shown = listing::paginate(&items, page.get(), DEFAULT_PAGE_SIZE);
                                let rows = shown.items.iter().map(application_row).collect::<Vec<_>>();
                                view! {
                                    <ul class="applications-page__list">{rows}</ul>
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

fn application_row(application: &Application) -> impl IntoView {
    let title = application
        .job
        .as_ref()
        .map_or_else(|| "Job".to_owned(), |job| job.title.clone());
    let status = application.status.as_str();
    let test = application.can_take_test().then(|| routes::candidate_test(application.id));
    view! {
        <li class="application-row">
            <span class="application-row__title">{title}</span>
            <span class=format!("badge badge--{status}")>{status}</span>
            {test
                .map(|href| {
                    view! {
                        <span class="application-row__test">
                            <A href=href>"Take screening test"</A>
                        </span>
                    }
                })}
        </li>
    }
}
