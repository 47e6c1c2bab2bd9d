//! Profile view and edit forms for both roles.
//!
//! Each page loads the current profile, then hands it to a form seeded
//! from it. Saving sends the whole profile back.

use jobportal::api;
use jobportal::types::{CandidateProfile, RecruiterProfile};
use leptos::prelude::*;

use crate::components::outcome::OutcomeMessage;
use crate::state::forms;
use crate::state::portal::use_portal;

#[component]
pub fn CandidateProfilePage() -> impl IntoView {
    let portal = use_portal();
    let profile = LocalResource::new(move || {
        let portal = portal.clone();
        async move { api::profile::candidate(portal.gateway()).await.map_err(|e| e.user_message()) }
    });

    view! {
        <div class="profile-page">
            <h1>"My profile"</h1>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(current) => view! { <CandidateForm current=current/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn CandidateForm(current: CandidateProfile) -> impl IntoView {
    let portal = use_portal();
    let full_name = RwSignal::new(current.full_name.clone());
    let phone_number = RwSignal::new(current.phone_number.clone());
    let skills = RwSignal::new(current.skills.clone());
    let experience = RwSignal::new(current.experience.to_string());
    let bio = RwSignal::new(current.bio.clone());
    let outcome = RwSignal::new(None::<Result<String, String>>);
    let base = StoredValue::new(current);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let experience = match forms::years_of_experience(&experience.get_untracked()) {
            Ok(years) => years,
            Err(msg) => {
                outcome.set(Some(Err(msg)));
                return;
            }
        };
        let updated = CandidateProfile {
            full_name: full_name.get_untracked().trim().to_owned(),
            phone_number: phone_number.get_untracked().trim().to_owned(),
            skills: skills.get_untracked().trim().to_owned(),
            bio: bio.get_untracked(),
            experience,
            ..base.get_value()
        };
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            let result = api::profile::update_candidate(portal.gateway(), &updated)
                .await
                .map(|saved| {
                    base.set_value(saved);
                    "Profile saved.".to_owned()
                })
                .map_err(|e| e.user_message());
            outcome.set(Some(result));
        });
    };

    view! {
        <form class="profile-page__form" on:submit=on_submit>
            <p class="profile-page__account">
                {base.with_value(|p| p.username.clone())} " · " {base.with_value(|p| p.email.clone())}
            </p>
            <label>"Full name" <input type="text" bind:value=full_name/></label>
            <label>"Phone" <input type="tel" bind:value=phone_number/></label>
            <label>"Skills" <input type="text" bind:value=skills placeholder="rust, sql, docker"/></label>
            <label>"Experience (years)" <input type="number" min="0" bind:value=experience/></label>
            <label>"Bio" <textarea bind:value=bio></textarea></label>
            <OutcomeMessage outcome=outcome/>
            <button type="submit" class="btn btn--primary">"Save"</button>
        </form>
    }
}

#[component]
pub fn RecruiterProfilePage() -> impl IntoView {
    let portal = use_portal();
    let profile = LocalResource::new(move || {
        let portal = portal.clone();
        async move { api::recruiter::profile(portal.gateway()).await.map_err(|e| e.user_message()) }
    });

    view! {
        <div class="profile-page">
            <h1>"My profile"</h1>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(current) => view! { <RecruiterForm current=current/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn RecruiterForm(current: RecruiterProfile) -> impl IntoView {
    let portal = use_portal();
    let full_name = RwSignal::new(current.full_name.clone());
    let phone_number = RwSignal::new(current.phone_number.clone());
    let position = RwSignal::new(current.position.clone());
    let linkedin = RwSignal::new(forms::text(current.linkedin.as_ref()));
    let bio = RwSignal::new(current.bio.clone());
    let outcome = RwSignal::new(None::<Result<String, String>>);
    let base = StoredValue::new(current);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let updated = RecruiterProfile {
            full_name: full_name.get_untracked().trim().to_owned(),
            phone_number: phone_number.get_untracked().trim().to_owned(),
            position: position.get_untracked().trim().to_owned(),
            linkedin: forms::optional(&linkedin.get_untracked()),
            bio: bio.get_untracked(),
            ..base.get_value()
        };
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            let result = api::recruiter::update_profile(portal.gateway(), &updated)
                .await
                .map(|saved| {
                    base.set_value(saved);
                    "Profile saved.".to_owned()
                })
                .map_err(|e| e.user_message());
            outcome.set(Some(result));
        });
    };

    view! {
        <form class="profile-page__form" on:submit=on_submit>
            <p class="profile-page__account">
                {base.with_value(|p| p.username.clone())} " · " {base.with_value(|p| p.email.clone())}
            </p>
            <label>"Full name" <input type="text" bind:value=full_name/></label>
            <label>"Phone" <input type="tel" bind:value=phone_number/></label>
            <label>"Position" <input type="text" bind:value=position/></label>
            <label>"LinkedIn" <input type="url" bind:value=linkedin/></label>
            <label>"Bio" <textarea bind:value=bio></textarea></label>
            <OutcomeMessage outcome=outcome/>
            <button type="submit" class="btn btn--primary">"Save"</button>
        </form>
    }
}
