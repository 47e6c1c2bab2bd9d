//! Recruiter's company details.

use jobportal::api;
use jobportal::types::Company;
use leptos::prelude::*;

use crate::components::outcome::OutcomeMessage;
use crate::state::forms;
use crate::state::portal::use_portal;

#[component]
pub fn CompanyPage() -> impl IntoView {
    let portal = use_portal();
    let company = LocalResource::new(move || {
        let portal = portal.clone();
        async move { api::recruiter::company(portal.gateway()).await.map_err(|e| e.user_message()) }
    });

    view! {
        <div class="company-page">
            <h1>"Company"</h1>
            <Suspense fallback=move || view! { <p>"Loading company..."</p> }>
                {move || {
                    company
                        .get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok(current) => view! { <CompanyForm current=current/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn CompanyForm(current: Company) -> impl IntoView {
    let portal = use_portal();
    let name = RwSignal::new(current.name.clone());
    let website = RwSignal::new(forms::text(current.website.as_ref()));
    let industry = RwSignal::new(forms::text(current.industry.as_ref()));
    let location = RwSignal::new(forms::text(current.location.as_ref()));
    let company_size = RwSignal::new(forms::text(current.company_size.as_ref()));
    let founded_year = RwSignal::new(current.founded_year.map(|y| y.to_string()).unwrap_or_default());
    let about = RwSignal::new(forms::text(current.about.as_ref()));
    let outcome = RwSignal::new(None::<Result<String, String>>);
    let base = StoredValue::new(current);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let founded_year = match forms::year(&founded_year.get_untracked()) {
            Ok(year) => year,
            Err(msg) => {
                outcome.set(Some(Err(msg)));
                return;
            }
        };
        let name = name.get_untracked().trim().to_owned();
        if name.is_empty() {
            outcome.set(Some(Err("Company name is required.".to_owned())));
            return;
        }
        let updated = Company {
            name,
            website: forms::optional(&website.get_untracked()),
            industry: forms::optional(&industry.get_untracked()),
            location: forms::optional(&location.get_untracked()),
            company_size: forms::optional(&company_size.get_untracked()),
            about: forms::optional(&about.get_untracked()),
            founded_year,
            ..base.get_value()
        };
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            let result = api::recruiter::update_company(portal.gateway(), &updated)
                .await
                .map(|saved| {
                    base.set_value(saved);
                    "Company saved.".to_owned()
                })
                .map_err(|e| e.user_message());
            outcome.set(Some(result));
        });
    };

    view! {
        <form class="company-page__form" on:submit=on_submit>
            <label>"Name" <input type="text" bind:value=name/></label>
            <label>"Website" <input type="url" bind:value=website/></label>
            <label>"Industry" <input type="text" bind:value=industry/></label>
            <label>"Location" <input type="text" bind:value=location/></label>
            <label>
                "Size"
                <select bind:value=company_size>
                    <option value="">"Not set"</option>
                    <option value="small">"Small"</option>
                    <option value="medium">"Medium"</option>
                    <option value="large">"Large"</option>
                </select>
            </label>
            <label>"Founded" <input type="text" inputmode="numeric" bind:value=founded_year/></label>
            <label>"About" <textarea bind:value=about></textarea></label>
            <OutcomeMessage outcome=outcome/>
            <button type="submit" class="btn btn--primary">"Save"</button>
        </form>
    }
}
