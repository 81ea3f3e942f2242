use leptos::ev;
use leptos::prelude::*;

use crate::frontend::asset_url;
use crate::frontend::browser::{self, CarouselDriver};
use crate::models::{HeroSlide, Testimonial};
use crate::state::{CarouselOptions, slides_per_view};

/// Horizontal drag, in CSS pixels, that counts as a swipe.
const SWIPE_THRESHOLD: i32 = 50;

fn finish_swipe(carousel: CarouselDriver, drag_from: RwSignal<Option<i32>>, x: i32) {
    let Some(start) = drag_from.get_untracked() else {
        return;
    };
    drag_from.set(None);

    let delta = x - start;
    if delta > SWIPE_THRESHOLD {
        carousel.prev();
    } else if delta < -SWIPE_THRESHOLD {
        carousel.next();
    } else {
        carousel.pointer_leave();
    }
}

#[component]
pub fn HeroCarousel(slides: Vec<HeroSlide>) -> impl IntoView {
    let carousel = CarouselDriver::mount(slides.len(), CarouselOptions::hero());
    let drag_from = RwSignal::new(None::<i32>);

    let slides = slides
        .into_iter()
        .enumerate()
        .map(|(i, slide)| {
            let style = format!("background-image: url('{}')", asset_url(&slide.image));
            view! {
                <article
                    class=move || if carousel.index() == i { "hero-slide active" } else { "hero-slide" }
                    style=style
                >
                    <div class="hero-overlay">
                        <h1 class="hero-title">{slide.title}</h1>
                        <p class="hero-subtitle">{slide.subtitle}</p>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section
            class="hero"
            on:mouseenter=move |_| carousel.pointer_enter()
            on:mouseleave=move |_| carousel.pointer_leave()
            on:pointerdown=move |ev: ev::PointerEvent| {
                drag_from.set(Some(ev.client_x()));
                carousel.drag_start();
            }
            on:pointerup=move |ev: ev::PointerEvent| finish_swipe(carousel, drag_from, ev.client_x())
            on:transitionend=move |_| carousel.animation_end()
        >
            <div class="hero-track">{slides}</div>
            <button class="hero-nav prev" aria-label="Précédent" on:click=move |_| carousel.prev()>"‹"</button>
            <button class="hero-nav next" aria-label="Suivant" on:click=move |_| carousel.next()>"›"</button>
        </section>
    }
}

#[component]
pub fn TestimonialCarousel(testimonials: Vec<Testimonial>) -> impl IntoView {
    let count = testimonials.len();
    let carousel = CarouselDriver::mount(count, CarouselOptions::testimonials());
    let drag_from = RwSignal::new(None::<i32>);
    let per_view = RwSignal::new(slides_per_view(browser::viewport_width()));

    let on_resize = window_event_listener(ev::resize, move |_| {
        per_view.set(slides_per_view(browser::viewport_width()));
    });
    on_cleanup(move || on_resize.remove());

    let slide_width = move || 100.0 / per_view.get() as f64;
    let track_style = move || {
        format!(
            "transform: translateX(-{}%)",
            carousel.index() as f64 * slide_width()
        )
    };

    let cards = testimonials
        .into_iter()
        .map(|testimonial| {
            view! {
                <figure class="testimonial-card" style=move || format!("flex: 0 0 {}%", slide_width())>
                    <blockquote>{testimonial.quote}</blockquote>
                    <figcaption>
                        <strong>{testimonial.author}</strong>
                        {testimonial.role.map(|role| view! { <span class="testimonial-role">{role}</span> })}
                    </figcaption>
                </figure>
            }
        })
        .collect_view();

    let indicators = (0..count)
        .map(|i| {
            view! {
                <button
                    class=move || if carousel.index() == i { "indicator active" } else { "indicator" }
                    aria-label=format!("Témoignage {}", i + 1)
                    on:click=move |_| carousel.go_to(i)
                ></button>
            }
        })
        .collect_view();

    view! {
        <section id="testimonials" class="section testimonials">
            <h2 class="section-title">"Ils témoignent"</h2>
            <div
                class="testimonial-viewport"
                on:mouseenter=move |_| carousel.pointer_enter()
                on:mouseleave=move |_| carousel.pointer_leave()
                on:pointerdown=move |ev: ev::PointerEvent| {
                    drag_from.set(Some(ev.client_x()));
                    carousel.drag_start();
                }
                on:pointerup=move |ev: ev::PointerEvent| finish_swipe(carousel, drag_from, ev.client_x())
                on:transitionend=move |_| carousel.animation_end()
            >
                <div class="testimonial-track" style=track_style>{cards}</div>
            </div>
            <div class="testimonial-indicators">{indicators}</div>
        </section>
    }
}
