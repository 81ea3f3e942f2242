//! The three layout overlays. Each renders nothing while closed.

use leptos::ev;
use leptos::prelude::*;

use crate::frontend::{asset_url, use_layout};

#[component]
pub fn ActivityModal() -> impl IntoView {
    let state = use_layout();
    let close = move |_: ev::MouseEvent| state.update(|s| s.close_popup());

    let modal = move || {
        state
            .with(|s| s.activity().selected().cloned())
            .map(|activity| {
                let image = asset_url(&activity.image);
                let alt = activity.title.clone();
                let applied = activity.clone();
                view! {
                    <div class="modal-backdrop" on:click=close>
                        <div
                            class="modal"
                            role="dialog"
                            aria-modal="true"
                            on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                        >
                            <button class="modal-close" aria-label="Fermer" on:click=close>"×"</button>
                            <img src=image alt=alt/>
                            <h2>{activity.title}</h2>
                            <p>{activity.description}</p>
                            <button
                                class="btn-primary"
                                on:click=move |_| state.update(|s| s.apply_to(&applied))
                            >
                                "Je participe"
                            </button>
                        </div>
                    </div>
                }
            })
    };

    view! { {modal} }
}

#[component]
pub fn ImageViewer() -> impl IntoView {
    let state = use_layout();
    let close = move |ev: ev::MouseEvent| state.update(|s| s.close_image(&ev));

    let viewer = move || {
        state
            .with(|s| s.image().selected().cloned())
            .map(|item| {
                let image = asset_url(&item.image);
                let alt = item.title.clone();
                view! {
                    <div class="lightbox" on:click=close>
                        <button class="lightbox-close" aria-label="Fermer" on:click=close>"×"</button>
                        <figure on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                            <img src=image alt=alt/>
                            <figcaption>
                                <strong>{item.title}</strong>
                                <span>{item.location}</span>
                            </figcaption>
                        </figure>
                    </div>
                }
            })
    };

    view! { {viewer} }
}

#[component]
pub fn ContactPopup() -> impl IntoView {
    let state = use_layout();
    let close = move |_: ev::MouseEvent| state.update(|s| s.close_contact());

    let popup = move || {
        state
            .with(|s| {
                let popup = s.contact();
                popup.is_visible().then(|| {
                    (
                        popup.title().to_string(),
                        popup.message().to_string(),
                        popup.whatsapp_link().to_string(),
                        popup.mailto_link().to_string(),
                    )
                })
            })
            .map(|(title, message, whatsapp, mailto)| {
                view! {
                    <div class="modal-backdrop" on:click=close>
                        <div
                            class="modal contact-popup"
                            role="dialog"
                            aria-modal="true"
                            on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                        >
                            <button class="modal-close" aria-label="Fermer" on:click=close>"×"</button>
                            <h2>{title}</h2>
                            <p>{message}</p>
                            <div class="contact-actions">
                                <a href=whatsapp class="btn-primary" target="_blank" rel="noopener">"WhatsApp"</a>
                                <a href=mailto class="btn-ghost">"E-mail"</a>
                            </div>
                        </div>
                    </div>
                }
            })
    };

    view! { {popup} }
}
