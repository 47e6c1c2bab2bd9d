//! Top navigation bar driven by the session's role.

use jobportal::routes::{self, nav_links};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::portal::use_portal;

#[component]
pub fn Navbar() -> impl IntoView {
    let portal = use_portal();
    let session = portal.session();
    let navigate = use_navigate();

    let links = move || {
        nav_links(&session.get())
            .into_iter()
            .map(|link| view! { <A href=link.route>{link.label}</A> })
            .collect::<Vec<_>>()
    };

    let logout = move || {
        session.with(|s| s.is_authenticated).then(|| {
            let portal = portal.clone();
            let navigate = navigate.clone();
            view! {
                <button
                    class="navbar__logout"
                    on:click=move |_| {
                        let next = portal.client().sign_out();
                        navigate(next, NavigateOptions::default());
                    }
                >
                    "Logout"
                </button>
            }
        })
    };

    view! {
        <nav class="navbar">
            <A href=routes::HOME>
                <span class="navbar__brand">"Job Portal"</span>
            </A>
            <div class="navbar__links">{links}</div>
            {logout}
        </nav>
    }
}
