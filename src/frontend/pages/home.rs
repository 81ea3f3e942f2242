use leptos::prelude::*;

use crate::frontend::components::{
    Activities, Agenda, ContactCallToAction, Faq, Gallery, HeroCarousel, TestimonialCarousel,
};
use crate::frontend::use_site;

#[component]
pub fn HomePage() -> impl IntoView {
    let content = use_site().content;
    let agenda = content.agenda_by_date().into_iter().cloned().collect::<Vec<_>>();

    view! {
        <HeroCarousel slides=content.hero.clone()/>
        <Activities activities=content.activities.clone()/>
        <Agenda items=agenda/>
        <Gallery items=content.gallery.clone()/>
        <TestimonialCarousel testimonials=content.testimonials.clone()/>
        <Faq entries=content.faqs.clone()/>
        <ContactCallToAction contact=content.contact.clone()/>
    }
}
