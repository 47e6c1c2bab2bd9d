//! Recruiter's own postings and the applications they received.

use jobportal::listing::{self, DEFAULT_PAGE_SIZE};
use jobportal::types::{Application, ApplicationFilters, ApplicationStatus, Id, Job};
use jobportal::{api, routes};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::pagination::Pagination;
use crate::state::portal::use_portal;

const STATUSES: [ApplicationStatus; 4] = [
    ApplicationStatus::Applied,
    ApplicationStatus::Shortlisted,
    ApplicationStatus::Selected,
    ApplicationStatus::Rejected,
];

#[component]
pub fn ManageJobsPage() -> impl IntoView {
    let portal = use_portal();
    let error = RwSignal::new(None::<String>);
    let page = RwSignal::new(1_usize);

    let jobs = {
        let portal = portal.clone();
        LocalResource::new(move || {
            let portal = portal.clone();
            async move {
                let mut items = api::jobs::mine(portal.gateway())
                    .await
                    .map_err(|e| e.user_message())?;
                listing::sort_newest_first(&mut items);
                Ok::<Vec<Job>, String>(items)
            }
        })
    };
    let applications = {
        let portal = portal.clone();
        LocalResource::new(move || {
            let portal = portal.clone();
            async move {
                let mut items = api::applications::for_recruiter(portal.gateway(), &ApplicationFilters::default())
                    .await
                    .map_err(|e| e.user_message())?;
                listing::sort_newest_first(&mut items);
                Ok::<Vec<Application>, String>(items)
            }
        })
    };

    let on_delete = {
        let portal = portal.clone();
        Callback::new(move |id: Id| {
            let portal = portal.clone();
            leptos::task::spawn_local(async move {
                match api::jobs::delete(portal.gateway(), id).await {
                    Ok(()) => {
                        error.set(None);
                        jobs.refetch();
                        applications.refetch();
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };
    let on_status = Callback::new(move |(id, status): (Id, ApplicationStatus)| {
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            match api::applications::update_status(portal.gateway(), id, status).await {
                Ok(()) => {
                    error.set(None);
                    applications.refetch();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });
    let on_page = Callback::new(move |next: usize| page.set(next));

    view! {
        <div class="manage-jobs-page">
            <h1>"Manage jobs"</h1>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <Suspense fallback=move || view! { <p>"Loading your jobs..."</p> }>
                {move || {
                    jobs.get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(items) if items.is_empty() => {
                                view! {
                                    <p>
                                        "No jobs posted yet. "
                                        <A href=routes::RECRUITER_POST_JOB>"Post one"</A>
                                    </p>
                                }
                                    .into_any()
                            }
                            Ok(items) => {
                                let rows = items
                                    .into_iter()
                                    .map(|job| job_row(job, on_delete))
                                    .collect::<Vec<_>>();
                                view! { <ul class="manage-jobs-page__jobs">{rows}</ul> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <h2>"Applications"</h2>
            <Suspense fallback=move || view! { <p>"Loading applications..."</p> }>
                {move || {
                    applications
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(items) if items.is_empty() => view! { <p>"No applications yet."</p> }.into_any(),
                            Ok(items) => {
                                let shown = listing::paginate(&items, page.get(), DEFAULT_PAGE_SIZE);
                                let rows = shown
                                    .items
                                    .iter()
                                    .map(|application| application_row(application, on_status))
                                    .collect::<Vec<_>>();
                                view! {
                                    <ul class="manage-jobs-page__applications">{rows}</ul>
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

fn job_row(job: Job, on_delete: Callback<Id>) -> impl IntoView {
    let id = job.id;
    let state = if job.is_active { "active" } else { "closed" };
    view! {
        <li class="job-row">
            <A href=routes::job_detail(id)>{job.title}</A>
            <span class=format!("badge badge--{state}")>{state}</span>
            <button class="btn" on:click=move |_| on_delete.run(id)>"Delete"</button>
        </li>
    }
}

fn application_row(application: &Application, on_status: Callback<(Id, ApplicationStatus)>) -> impl IntoView {
    let id = application.id;
    let current = application.status;
    let job = application
        .job
        .as_ref()
        .map_or_else(|| "Job".to_owned(), |job| job.title.clone());
    let options = STATUSES
        .into_iter()
        .map(|status| {
            view! { <option value=status.as_str() selected=status == current>{status.as_str()}</option> }
        })
        .collect::<Vec<_>>();
    view! {
        <li class="application-row">
            <span class="application-row__candidate">{application.candidate_username.clone()}</span>
            <span class="application-row__title">{job}</span>
            <select on:change=move |ev| {
                if let Some(status) = ApplicationStatus::parse(&event_target_value(&ev)) {
                    on_status.run((id, status));
                }
            }>{options}</select>
        </li>
    }
}
