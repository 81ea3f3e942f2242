use leptos::prelude::*;

use crate::frontend::use_layout;
use crate::models::ContactSettings;

const CONTEXTS: [(&str, &str); 3] = [
    ("projects", "Découvrir nos projets"),
    ("community", "Rejoindre un projet"),
    ("membership", "Devenir membre"),
];

/// Buttons that open the contact popup with the wording for their context.
#[component]
pub fn ContactCallToAction(contact: ContactSettings) -> impl IntoView {
    let state = use_layout();

    let buttons = CONTEXTS
        .iter()
        .map(|&(context, label)| {
            let contact = contact.clone();
            view! {
                <button
                    class="btn-primary"
                    on:click=move |_| state.update(|s| s.open_contact(context, &contact))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="contact" class="section contact-cta">
            <h2 class="section-title">"Rejoignez-nous"</h2>
            <p>"Une question, une envie de participer ? Choisissez votre démarche."</p>
            <div class="cta-buttons">{buttons}</div>
        </section>
    }
}
