//! New job posting form.

use jobportal::types::JobDraft;
use jobportal::{api, routes};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::forms;
use crate::state::portal::use_portal;

#[component]
pub fn PostJobPage() -> impl IntoView {
    let portal = use_portal();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let job_type = RwSignal::new("Full-time".to_owned());
    let salary_min = RwSignal::new(String::new());
    let salary_max = RwSignal::new(String::new());
    let qualification = RwSignal::new(String::new());
    let batch = RwSignal::new(String::new());
    let skills = RwSignal::new(String::new());
    let external_link = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let draft = JobDraft {
            title: title.get_untracked().trim().to_owned(),
            description: description.get_untracked().trim().to_owned(),
            location: location.get_untracked().trim().to_owned(),
            job_type: job_type.get_untracked(),
            salary_min: forms::optional(&salary_min.get_untracked()),
            salary_max: forms::optional(&salary_max.get_untracked()),
            qualification: forms::optional(&qualification.get_untracked()),
            batch: forms::optional(&batch.get_untracked()),
            skills: forms::optional(&skills.get_untracked()),
            external_link: forms::optional(&external_link.get_untracked()),
            is_active: true,
        };
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            error.set(Some(format!("Please fill in: {}.", missing.join(", "))));
            return;
        }

        pending.set(true);
        error.set(None);
        let portal = portal.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::jobs::create(portal.gateway(), &draft).await {
                Ok(_) => navigate(routes::RECRUITER_MANAGE_JOBS, NavigateOptions::default()),
                Err(e) => error.set(Some(e.user_message())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="post-job-page">
            <h1>"Post a job"</h1>
            <form on:submit=on_submit>
                <label>"Title" <input type="text" bind:value=title/></label>
                <label>"Description" <textarea bind:value=description></textarea></label>
                <label>"Location" <input type="text" bind:value=location/></label>
                <label>
                    "Job type"
                    <select bind:value=job_type>
                        <option value="Full-time">"Full-time"</option>
                        <option value="Part-time">"Part-time"</option>
                        <option value="Internship">"Internship"</option>
                        <option value="Contract">"Contract"</option>
                    </select>
                </label>
                <label>"Salary from" <input type="text" bind:value=salary_min/></label>
                <label>"Salary to" <input type="text" bind:value=salary_max/></label>
                <label>"Qualification" <input type="text" bind:value=qualification/></label>
                <label>"Batch" <input type="text" bind:value=batch placeholder="2024, 2025"/></label>
                <label>"Skills" <input type="text" bind:value=skills/></label>
                <label>"External link" <input type="url" bind:value=external_link/></label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Posting..." } else { "Post job" }}
                </button>
            </form>
        </div>
    }
}
