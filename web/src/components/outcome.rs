use leptos::prelude::*;

/// Success or error line under a form.
#[component]
pub fn OutcomeMessage(outcome: RwSignal<Option<Result<String, String>>>) -> impl IntoView {
    move || {
        outcome.get().map(|result| match result {
            Ok(msg) => view! { <p class="form-success">{msg}</p> }.into_any(),
            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
        })
    }
}
