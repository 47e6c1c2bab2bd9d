//! Account registration for candidates and recruiters.

use jobportal::routes;
use jobportal::types::{Registration, Role};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::portal::use_portal;

fn parse_role(raw: &str) -> Option<Role> {
    match raw {
        "candidate" => Some(Role::Candidate),
        "recruiter" => Some(Role::Recruiter),
        _ => None,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let portal = use_portal();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let company_name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let is_recruiter = move || role.with(|r| r == "recruiter");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let registration = Registration {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: parse_role(&role.get_untracked()),
            company_name: company_name.get_untracked(),
            ..Registration::default()
        };

        let portal = portal.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match portal.client().register(&registration).await {
                Ok(_) => navigate(routes::LOGIN, NavigateOptions::default()),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="register-page">
            <h1>"Create an account"</h1>
            <form on:submit=on_submit>
                <label>"Username" <input type="text" bind:value=username/></label>
                <label>"Email" <input type="email" bind:value=email/></label>
                <label>"Password" <input type="password" bind:value=password/></label>
                <label>
                    "I am a"
                    <select on:change=move |ev| role.set(event_target_value(&ev))>
                        <option value="">"Select role"</option>
                        <option value="candidate">"Candidate"</option>
                        <option value="recruiter">"Recruiter"</option>
                    </select>
                </label>
                <Show when=is_recruiter>
                    <label>"Company name" <input type="text" bind:value=company_name/></label>
                </Show>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="btn btn--primary">"Register"</button>
            </form>
        </div>
    }
}
