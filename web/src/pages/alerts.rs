//! Job alerts and the notifications they produce.
//!
//! Two notification feeds share the page: jobs matching an alert, and
//! status changes on the candidate's applications.

use jobportal::api;
use jobportal::listing;
use jobportal::types::{AlertDraft, AlertNotification, Id, JobAlert, StatusNotification};
use leptos::prelude::*;

use crate::state::portal::use_portal;

#[component]
pub fn AlertsPage() -> impl IntoView {
    let portal = use_portal();
    let error = RwSignal::new(None::<String>);

    let keywords = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let job_type = RwSignal::new(String::new());

    let alerts = {
        let portal = portal.clone();
        LocalResource::new(move || {
            let portal = portal.clone();
            async move { api::alerts::list(portal.gateway()).await.map_err(|e| e.user_message()) }
        })
    };
    let matches = {
        let portal = portal.clone();
        LocalResource::new(move || {
            let portal = portal.clone();
            async move {
                let mut items = api::alerts::notifications(portal.gateway())
                    .await
                    .map_err(|e| e.user_message())?;
                listing::sort_newest_first(&mut items);
                Ok::<Vec<AlertNotification>, String>(items)
            }
        })
    };
    let updates = {
        let portal = portal.clone();
        LocalResource::new(move || {
            let portal = portal.clone();
            async move {
                let mut items = api::alerts::status_notifications(portal.gateway())
                    .await
                    .map_err(|e| e.user_message())?;
                listing::sort_newest_first(&mut items);
                Ok::<Vec<StatusNotification>, String>(items)
            }
        })
    };

    let on_create = {
        let portal = portal.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let draft = AlertDraft {
                keywords: keywords.get_untracked().trim().to_owned(),
                location: location.get_untracked().trim().to_owned(),
                job_type: job_type.get_untracked().trim().to_owned(),
                ..AlertDraft::default()
            };
            if draft.keywords.is_empty() {
                error.set(Some("Keywords are required.".to_owned()));
                return;
            }
            let portal = portal.clone();
            leptos::task::spawn_local(async move {
                match api::alerts::create(portal.gateway(), &draft).await {
                    Ok(_) => {
                        error.set(None);
                        keywords.set(String::new());
                        location.set(String::new());
                        job_type.set(String::new());
                        alerts.refetch();
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        }
    };

    let on_delete = {
        let portal = portal.clone();
        Callback::new(move |id: Id| {
            let portal = portal.clone();
            leptos::task::spawn_local(async move {
                match api::alerts::delete(portal.gateway(), id).await {
                    Ok(()) => alerts.refetch(),
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };
    let on_read_match = {
        let portal = portal.clone();
        Callback::new(move |id: Id| {
            let portal = portal.clone();
            leptos::task::spawn_local(async move {
                match api::alerts::mark_notification_read(portal.gateway(), id).await {
                    Ok(()) => matches.refetch(),
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };
    let on_read_update = Callback::new(move |id: Id| {
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            match api::alerts::mark_status_read(portal.gateway(), id).await {
                Ok(()) => updates.refetch(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });

    view! {
        <div class="alerts-page">
            <h1>"Job alerts"</h1>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <form class="alerts-page__form" on:submit=on_create>
                <input type="text" placeholder="Keywords" bind:value=keywords/>
                <input type="text" placeholder="Location" bind:value=location/>
                <input type="text" placeholder="Job type" bind:value=job_type/>
                <button type="submit" class="btn btn--primary">"Create alert"</button>
            </form>

            <Suspense fallback=move || view! { <p>"Loading alerts..."</p> }>
                {move || {
                    alerts
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(items) if items.is_empty() => view! { <p>"No alerts yet."</p> }.into_any(),
                            Ok(items) => {
                                let rows = items
                                    .into_iter()
                                    .map(|alert| alert_row(alert, on_delete))
                                    .collect::<Vec<_>>();
                                view! { <ul class="alerts-page__list">{rows}</ul> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <h2>"Matching jobs"</h2>
            <Suspense fallback=move || view! { <p>"Loading notifications..."</p> }>
                {move || {
                    matches
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(items) => {
                                let unread = listing::unread_count(&items);
                                let rows = items
                                    .into_iter()
                                    .map(|n| {
                                        let id = n.id;
                                        notification_row(
                                            format!("{} at {}", n.job_title, n.company_name),
                                            n.is_read,
                                            move || on_read_match.run(id),
                                        )
                                    })
                                    .collect::<Vec<_>>();
                                view! {
                                    <p class="alerts-page__unread">{unread} " unread"</p>
                                    <ul>{rows}</ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <h2>"Application updates"</h2>
            <Suspense fallback=move || view! { <p>"Loading updates..."</p> }>
                {move || {
                    updates
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(items) => {
                                let unread = listing::unread_count(&items);
                                let rows = items
                                    .into_iter()
                                    .map(|n| {
                                        let id = n.id;
                                        let summary = if n.message.is_empty() {
                                            format!("{}: {}", n.job_title, n.status)
                                        } else {
                                            n.message
                                        };
                                        notification_row(summary, n.is_read, move || on_read_update.run(id))
                                    })
                                    .collect::<Vec<_>>();
                                view! {
                                    <p class="alerts-page__unread">{unread} " unread"</p>
                                    <ul>{rows}</ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn alert_row(alert: JobAlert, on_delete: Callback<Id>) -> impl IntoView {
    let id = alert.id;
    let scope = [alert.location, alert.job_type]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    view! {
        <li class="alert-row">
            <span class="alert-row__keywords">{alert.keywords}</span>
            <span class="alert-row__scope">{scope}</span>
            {(!alert.is_active).then(|| view! { <span class="badge">"paused"</span> })}
            <button class="btn" on:click=move |_| on_delete.run(id)>"Delete"</button>
        </li>
    }
}

fn notification_row(summary: String, is_read: bool, on_read: impl Fn() + 'static) -> impl IntoView {
    let class = if is_read { "notification" } else { "notification notification--unread" };
    view! {
        <li class=class>
            <span>{summary}</span>
            {(!is_read)
                .then(|| view! { <button class="btn" on:click=move |_| on_read()>"Mark read"</button> })}
        </li>
    }
}
