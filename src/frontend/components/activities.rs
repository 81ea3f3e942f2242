use leptos::prelude::*;

use crate::frontend::{asset_url, use_layout};
use crate::models::ActivityPayload;

#[component]
pub fn Activities(activities: Vec<ActivityPayload>) -> impl IntoView {
    let state = use_layout();

    let cards = activities
        .into_iter()
        .map(|activity| {
            let image = asset_url(&activity.image);
            let title = activity.title.clone();
            let description = activity.description.clone();

            view! {
                <article
                    class="activity-card"
                    on:click=move |_| state.update(|s| s.open_activity(activity.clone()))
                >
                    <img src=image alt=title.clone() loading="lazy"/>
                    <h3>{title}</h3>
                    <p>{description}</p>
                    <span class="activity-more">"En savoir plus"</span>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="activities" class="section activities">
            <h2 class="section-title">"Nos activités"</h2>
            <div class="activity-grid">{cards}</div>
        </section>
    }
}
