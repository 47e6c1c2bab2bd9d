//! Candidate dashboard: interviews split into upcoming and past.

use jobportal::api;
use jobportal::types::Interview;
use leptos::prelude::*;
use time::OffsetDateTime;

use crate::state::interviews::{InterviewBoard, InterviewTab, format_when};
use crate::state::portal::use_portal;

#[component]
pub fn CandidateDashboardPage() -> impl IntoView {
    let portal = use_portal();
    let tab = RwSignal::new(InterviewTab::default());

    let board = LocalResource::new(move || {
        let portal = portal.clone();
        async move {
            api::interviews::list(portal.gateway())
                .await
                .map(|items| InterviewBoard::build(items, OffsetDateTime::now_utc()))
                .map_err(|e| e.user_message())
        }
    });

    let tab_button = move |which: InterviewTab, label: &'static str| {
        view! {
            <button
                class="tab"
                class=("tab--active", move || tab.get() == which)
                on:click=move |_| tab.set(which)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="dashboard-page">
            <h1>"Interviews"</h1>
            <div class="tabs">
                {tab_button(InterviewTab::Upcoming, "Upcoming")}
                {tab_button(InterviewTab::Past, "Past")}
            </div>
            <Suspense fallback=move || view! { <p>"Loading interviews..."</p> }>
                {move || {
                    board
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(board) => {
                                let items = board.tab(tab.get());
                                if items.is_empty() {
                                    view! { <p>"No interviews here."</p> }.into_any()
                                } else {
                                    let rows = items.iter().map(interview_row).collect::<Vec<_>>();
                                    view! { <ul class="interview-list">{rows}</ul> }.into_any()
                                }
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn interview_row(interview: &Interview) -> impl IntoView {
    let title = interview.display_title().to_owned();
    let when = format_when(interview);
    let place = interview.location.clone().unwrap_or_default();
    let location = if interview.has_join_link() {
        view! { <a href=place target="_blank" rel="noopener">"Join meeting"</a> }.into_any()
    } else {
        view! { <span>{place}</span> }.into_any()
    };
    view! {
        <li class="interview-row">
            <strong>{title}</strong>
            <span>{when}</span>
            {location}
        </li>
    }
}
