use leptos::prelude::*;

use crate::frontend::use_layout;
use crate::models::FaqEntry;

#[component]
pub fn Faq(entries: Vec<FaqEntry>) -> impl IntoView {
    let state = use_layout();
    let is_open = move |i: usize| state.with(|s| s.faq().is_open(i));

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            view! {
                <div class=move || if is_open(i) { "faq-item active" } else { "faq-item" }>
                    <button
                        class="faq-question"
                        aria-expanded=move || is_open(i).to_string()
                        on:click=move |_| state.update(|s| s.toggle_faq(i))
                    >
                        {entry.question}
                    </button>
                    <div class="faq-answer">
                        <p>{entry.answer}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="faq" class="section faq">
            <h2 class="section-title">"Questions fréquentes"</h2>
            <div class="faq-list">{items}</div>
        </section>
    }
}
