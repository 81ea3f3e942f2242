use leptos::ev;
use leptos::prelude::*;

use crate::frontend::browser;
use crate::state::HeaderState;

const NAV_LINKS: [(&str, &str); 6] = [
    ("/", "Accueil"),
    ("/calendar", "Calendrier"),
    ("/documentation", "Documentation"),
    ("/forum", "Forum"),
    ("/market", "Marché"),
    ("/proverbs", "Proverbes"),
];

#[component]
pub fn Header() -> impl IntoView {
    let header = RwSignal::new(HeaderState::default());

    let on_scroll = window_event_listener(ev::scroll, move |_| {
        header.update(|h| h.on_scroll(browser::scroll_offset()));
    });
    on_cleanup(move || on_scroll.remove());

    let close_menu = move |_: ev::MouseEvent| header.update(|h| h.close_mobile_menu());

    let links = NAV_LINKS
        .iter()
        .map(|(href, label)| {
            view! {
                <li>
                    <a href=*href class="nav-link" on:click=close_menu>{*label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class=move || {
            if header.with(|h| h.is_scrolled()) { "site-header scrolled" } else { "site-header" }
        }>
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="brand" on:click=close_menu>
                    <img src="/assets/logo.png" alt="" class="brand-logo"/>
                    <span class="brand-text">"Retour Aux Sources"</span>
                </a>
                <button
                    class="menu-toggle"
                    aria-label="Menu"
                    aria-expanded=move || header.with(|h| h.is_mobile_menu_open()).to_string()
                    on:click=move |_| header.update(|h| h.toggle_mobile_menu())
                >
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                </button>
                <nav class=move || {
                    if header.with(|h| h.is_mobile_menu_open()) { "site-nav open" } else { "site-nav" }
                }>
                    <ul>{links}</ul>
                </nav>
            </div>
        </header>
    }
}
