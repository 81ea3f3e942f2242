//! Glue between the pure view state and the browser.

use leptos::prelude::*;
use std::time::Duration;

use crate::services::{SESSION_STORAGE_KEY, Session};
use crate::state::{Carousel, CarouselOptions, EventPropagation, IntervalScheduler};

pub type DomCarousel = Carousel<IntervalHandle>;

impl EventPropagation for leptos::ev::MouseEvent {
    fn stop_propagation(&self) {
        web_sys::Event::stop_propagation(self)
    }
}

/// Drives one carousel signal and arms its browser interval timers.
#[derive(Clone, Copy)]
pub struct CarouselDriver {
    target: RwSignal<DomCarousel>,
}

impl CarouselDriver {
    /// Creates the carousel, starts autoplay once mounted and tears it down
    /// with the owning component.
    pub fn mount(len: usize, options: CarouselOptions) -> Self {
        let driver = Self {
            target: RwSignal::new(Carousel::new(len, options)),
        };

        Effect::new(move |_| driver.drive(|c, s| c.start(s)));
        on_cleanup(move || driver.drive(|c, s| c.destroy(s)));

        driver
    }

    pub fn drive(self, f: impl FnOnce(&mut DomCarousel, &mut Self)) {
        let mut scheduler = self;
        self.target.try_update(|carousel| f(carousel, &mut scheduler));
    }

    /// Reactive read of the current slide.
    pub fn index(&self) -> usize {
        self.target.with(|c| c.index())
    }

    pub fn next(self) {
        self.drive(|c, s| c.navigate_next(s));
    }

    pub fn prev(self) {
        self.drive(|c, s| c.navigate_prev(s));
    }

    pub fn go_to(self, index: usize) {
        self.drive(|c, s| c.navigate_to(index, s));
    }

    pub fn pointer_enter(self) {
        self.drive(|c, s| c.pointer_enter(s));
    }

    pub fn pointer_leave(self) {
        self.drive(|c, s| c.pointer_leave(s));
    }

    pub fn drag_start(self) {
        self.drive(|c, s| c.drag_start(s));
    }

    pub fn animation_end(self) {
        self.drive(|c, s| c.animation_end(s));
    }
}

impl IntervalScheduler for CarouselDriver {
    type Handle = IntervalHandle;

    fn schedule(&mut self, every: Duration) -> Option<IntervalHandle> {
        let target = self.target;
        set_interval_with_handle(
            move || {
                target.try_update(|c| c.tick());
            },
            every,
        )
        .ok()
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        handle.clear();
    }
}

pub fn read_session() -> Session {
    let token = window()
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(SESSION_STORAGE_KEY).ok().flatten());

    Session::from_token(token)
}

pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Suspends or restores page scrolling behind overlays.
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        let overflow = if locked { "hidden" } else { "" };
        if let Err(err) = body.style().set_property("overflow", overflow) {
            tracing::warn!(?err, locked, "could not toggle page scrolling");
        }
    }
}
