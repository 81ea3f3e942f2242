use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::frontend::browser;
use crate::frontend::components::{ActivityModal, ContactPopup, Footer, Header, ImageViewer};
use crate::frontend::use_site;
use crate::state::{EscapePolicy, MainLayoutState};

/// Page shell around every routed view. Owns the overlay state shared by
/// the sections.
#[component]
pub fn MainLayout() -> impl IntoView {
    let site = use_site();
    let state = RwSignal::new(MainLayoutState::new(EscapePolicy::default()));
    provide_context(state);

    Effect::new(move |_| browser::set_scroll_locked(state.with(|s| s.is_scroll_locked())));

    let on_key = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            state.update(|s| {
                s.on_escape();
            });
        }
    });
    on_cleanup(move || {
        on_key.remove();
        browser::set_scroll_locked(false);
    });

    view! {
        <div class="main-layout">
            <Header/>
            <main>
                <Outlet/>
            </main>
            <Footer contact=site.content.contact.clone()/>
            <ActivityModal/>
            <ImageViewer/>
            <ContactPopup/>
        </div>
    }
}
