use leptos::prelude::*;

use crate::models::ContactSettings;

#[component]
pub fn Footer(contact: ContactSettings) -> impl IntoView {
    let mailto = format!("mailto:{}", contact.email);
    let whatsapp = format!("https://wa.me/{}", contact.whatsapp_number);

    view! {
        <footer class="border-t site-footer">
            <div class="max-w-6xl mx-auto px-6 py-12 text-center">
                <p class="text-2xl font-bold mb-2">"Association Retour Aux Sources"</p>
                <p class="footer-tagline mb-6">"Transmettre, partager, préserver."</p>
                <p class="footer-contact">
                    <a href=mailto>{contact.email.clone()}</a>
                    " · "
                    <a href=whatsapp target="_blank" rel="noopener">{contact.whatsapp_number.clone()}</a>
                </p>
                <p class="text-xs footer-copy">"© Association Retour Aux Sources"</p>
            </div>
        </footer>
    }
}
