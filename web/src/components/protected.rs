//! Route guard wrapper for signed-in and role-owned pages.

use jobportal::routes::{self, RouteAccess};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::portal::use_portal;

/// Renders `children` only when the session may see the current path.
/// Redirects otherwise, and shows a placeholder while the profile loads.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = use_portal().session();
    let path = use_location().pathname;
    let navigate = use_navigate();

    Effect::new(move || {
        let access = routes::guard(&path.get(), &session.get());
        match access {
            RouteAccess::RedirectLogin => navigate(routes::LOGIN, NavigateOptions::default()),
            RouteAccess::Redirect(to) => navigate(to, NavigateOptions::default()),
            RouteAccess::Allow | RouteAccess::Wait => {}
        }
    });

    move || match routes::guard(&path.get(), &session.get()) {
        RouteAccess::Allow => children().into_any(),
        RouteAccess::Wait => view! { <p class="loading">"Loading..."</p> }.into_any(),
        RouteAccess::RedirectLogin | RouteAccess::Redirect(_) => ().into_any(),
    }
}
