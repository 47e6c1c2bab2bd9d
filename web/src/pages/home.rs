use jobportal::routes;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Find your next role"</h1>
            <A href=routes::JOBS>
                <span class="btn btn--primary">"Browse jobs"</span>
            </A>
        </div>
    }
}
