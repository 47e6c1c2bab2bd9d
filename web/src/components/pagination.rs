use jobportal::listing::Pager;
use leptos::prelude::*;

/// Previous/next controls; renders nothing for a single page.
#[component]
pub fn Pagination(pager: Pager, on_change: Callback<usize>) -> impl IntoView {
    pager.is_visible().then(|| {
        view! {
            <div class="pagination">
                <button
                    class="btn"
                    disabled=!pager.has_prev()
                    on:click=move |_| on_change.run(pager.prev().page())
                >
                    "Previous"
                </button>
                <span class="pagination__label">{pager.label()}</span>
                <button
                    class="btn"
                    disabled=!pager.has_next()
                    on:click=move |_| on_change.run(pager.next().page())
                >
                    "Next"
                </button>
            </div>
        }
    })
}
