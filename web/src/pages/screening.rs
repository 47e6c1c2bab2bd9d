//! Screening test for one of the candidate's applications.

use jobportal::api;
use jobportal::routes;
use jobportal::types::{Id, JobTest, TestOutcome, TestQuestion};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::state::portal::use_portal;
use crate::state::screening::{self, AnswerSheet};

#[component]
pub fn ScreeningTestPage() -> impl IntoView {
    let portal = use_portal();
    let params = use_params_map();
    let application_id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<Id>().ok()));

    let test = LocalResource::new(move || {
        let portal = portal.clone();
        let id = application_id();
        async move {
            let Some(id) = id else {
                return Err("Test not found.".to_owned());
            };
            api::applications::test(portal.gateway(), id)
                .await
                .map(|test| (id, test))
                .map_err(|e| e.user_message())
        }
    });

    view! {
        <div class="test-page">
            <h1>"Screening test"</h1>
            <Suspense fallback=move || view! { <p>"Loading test..."</p> }>
                {move || {
                    test.get()
                        .map(|result| match result {
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                            Ok((_, test)) if test.completed_at.is_some() => {
                                let score = test.score.unwrap_or_default();
                                view! {
                                    <p>"Already completed. Score: " {score} " / " {test.total_marks}</p>
                                    <A href=routes::CANDIDATE_APPLICATIONS>"Back to applications"</A>
                                }
                                    .into_any()
                            }
                            Ok((id, test)) => view! { <TestForm application_id=id test=test/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn TestForm(application_id: Id, test: JobTest) -> impl IntoView {
    let portal = use_portal();
    let sheet = RwSignal::new(AnswerSheet::for_test(&test));
    let outcome = RwSignal::new(None::<Result<TestOutcome, String>>);
    let pending = RwSignal::new(false);
    let total = test.questions.len();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let answers = sheet.with_untracked(AnswerSheet::answers);
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            let result = api::applications::submit_test(portal.gateway(), application_id, &answers)
                .await
                .map_err(|e| e.user_message());
            outcome.set(Some(result));
            pending.set(false);
        });
    };

    let questions = StoredValue::new(test.questions);

    view! {
        <Show
            when=move || outcome.with(|o| matches!(o, Some(Ok(_))))
            fallback=move || {
                let blocks = questions
                    .get_value()
                    .into_iter()
                    .enumerate()
                    .map(|(index, question)| question_block(index + 1, question, sheet))
                    .collect::<Vec<_>>();
                view! {
                    <form class="test-page__form" on:submit=on_submit.clone()>
                        {blocks}
                        <p class="test-page__progress">
                            {move || sheet.with(AnswerSheet::answered)} " of " {total} " answered"
                        </p>
                        {move || {
                            outcome.get().and_then(Result::err).map(|msg| view! { <p class="form-error">{msg}</p> })
                        }}
                        <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                            "Submit"
                        </button>
                    </form>
                }
            }
        >
            {move || outcome.get().and_then(Result::ok).map(result_summary)}
        </Show>
    }
}

fn question_block(number: usize, question: TestQuestion, sheet: RwSignal<AnswerSheet>) -> impl IntoView {
    let question_id = question.id;
    let name = format!("question-{question_id}");
    let choices = screening::options(&question)
        .into_iter()
        .map(|(letter, text)| {
            let text = text.to_owned();
            view! {
                <label class="test-page__option">
                    <input
                        type="radio"
                        name=name.clone()
                        value=letter
                        prop:checked=move || sheet.with(|s| s.picked(question_id) == Some(letter))
                        on:change=move |_| sheet.update(|s| s.pick(question_id, letter))
                    />
                    {letter} ". " {text}
                </label>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <fieldset class="test-page__question">
            <legend>{number} ". " {question.text}</legend>
            {choices}
        </fieldset>
    }
}

fn result_summary(outcome: TestOutcome) -> impl IntoView {
    let verdict = if outcome.passed { "Passed" } else { "Not passed" };
    view! {
        <div class="test-page__result">
            <p>{verdict} ": " {outcome.score} " / " {outcome.total}</p>
            <p>"Application status: " {outcome.application_status.as_str()}</p>
            <A href=routes::CANDIDATE_APPLICATIONS>"Back to applications"</A>
        </div>
    }
}
