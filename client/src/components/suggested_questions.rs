use leptos::prelude::*;

use crate::state::legal_ai::SUGGESTED_QUESTIONS;

/// Clickable starter questions for the legal assistant.
#[component]
pub fn SuggestedQuestions(on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="suggested-questions">
            <h3 class="suggested-questions__title">"Suggested questions"</h3>
            <ul class="suggested-questions__list">
                {SUGGESTED_QUESTIONS
                    .into_iter()
                    .map(|question| {
                        view! {
                            <li>
                                <button
                                    class="suggested-questions__item"
                                    type="button"
                                    on:click=move |_| on_pick.run(question.to_owned())
                                >
                                    {question}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
