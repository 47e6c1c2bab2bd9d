//! Username/password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use jobportal::routes;

use crate::state::portal::use_portal;

/// Login form. On success the session fetches the profile and the page
/// navigates to the role's landing route.
#[component]
pub fn LoginPage() -> impl IntoView {
    let portal = use_portal();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let portal = portal.clone();
        let navigate = navigate.clone();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        leptos::task::spawn_local(async move {
            match portal.client().sign_in(&user, &pass).await {
                Ok(signed) => navigate(signed.landing, NavigateOptions::default()),
                Err(e) => error.set(Some(e.user_message())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Sign in"</h1>
            <form on:submit=on_submit>
                <label>"Username" <input type="text" bind:value=username autocomplete="username"/></label>
                <label>
                    "Password"
                    <input type="password" bind:value=password autocomplete="current-password"/>
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p>"No account? " <A href=routes::REGISTER>"Register"</A></p>
        </div>
    }
}
