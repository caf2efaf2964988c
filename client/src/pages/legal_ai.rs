//! Legal question assistant.
//!
//! Answers come from `net::api::ask_legal_question` and are markdown;
//! they are rendered with raw HTML stripped before being set as
//! `inner_html`.

use leptos::prelude::*;

use crate::components::suggested_questions::SuggestedQuestions;
use crate::net::api;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn LegalAiPage() -> impl IntoView {
    let question = RwSignal::new(String::new());
    let ask = Action::new_local(|q: &String| api::ask_legal_question(q.clone()));
    let pending = ask.pending();
    let answer_html = Memo::new(move |_| ask.value().get().map(|answer| render_markdown_html(&answer)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = question.get_untracked().trim().to_owned();
        if text.is_empty() || pending.get_untracked() {
            return;
        }
        ask.dispatch(text);
    };

    let on_pick = Callback::new(move |picked: String| question.set(picked));

    view! {
        <div class="legal-ai-page">
            <header class="legal-ai-page__header">
                <h1 class="legal-ai-page__title">"Ask Legal AI"</h1>
                <p class="legal-ai-page__subtitle">
                    "Get general legal information. This is not a substitute for advice from a qualified lawyer."
                </p>
            </header>
            <form class="legal-ai-page__form" on:submit=on_submit>
                <textarea
                    class="legal-ai-page__input"
                    rows="5"
                    placeholder="Describe your legal question..."
                    prop:value=move || question.get()
                    on:input=move |ev| question.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || pending.get() || question.with(|q| q.trim().is_empty())
                >
                    {move || if pending.get() { "Analyzing..." } else { "Get Answer" }}
                </button>
            </form>
            <Show when=move || pending.get()>
                <p class="legal-ai-page__loading">"Researching your question..."</p>
            </Show>
            {move || {
                answer_html
                    .get()
                    .map(|html| {
                        view! {
                            <section class="legal-ai-page__answer">
                                <h2 class="legal-ai-page__answer-title">"Legal Information"</h2>
                                <div class="markdown" inner_html=html></div>
                            </section>
                        }
                    })
            }}
            <SuggestedQuestions on_pick=on_pick/>
        </div>
    }
}
