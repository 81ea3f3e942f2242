use leptos::prelude::*;

use crate::frontend::{asset_url, use_layout};
use crate::models::GalleryItem;

#[component]
pub fn Gallery(items: Vec<GalleryItem>) -> impl IntoView {
    let state = use_layout();

    let tiles = items
        .into_iter()
        .map(|item| {
            let image = asset_url(&item.image);
            let title = item.title.clone();
            let location = item.location.clone();

            view! {
                <figure class="gallery-item" on:click=move |_| state.update(|s| s.open_image(item.clone()))>
                    <img src=image alt=title.clone() loading="lazy"/>
                    <figcaption>
                        <strong>{title}</strong>
                        <span>{location}</span>
                    </figcaption>
                </figure>
            }
        })
        .collect_view();

    view! {
        <section id="gallery" class="section gallery">
            <h2 class="section-title">"Galerie"</h2>
            <div class="gallery-grid">{tiles}</div>
        </section>
    }
}
