//! Carousel state machine shared by the hero and testimonial sliders.
//!
//! ```text
//!            pointer-enter / drag-start
//!   Idle  ─────────────────────────────▶  Paused
//!    ▲  ◀─────────────────────────────    │
//!    │     pointer-leave / animation-end  │
//!    └──────────── destroy ───────────────┴──▶ Destroyed
//! ```
//!
//! Autoplay runs only in `Idle`. The timer itself lives behind
//! [`IntervalScheduler`]; every transition that arms it first cancels the
//! previous one, so a carousel never owns more than one timer. Manual
//! navigation (`navigate_*`) moves and then re-arms, so the countdown
//! restarts from the slide the visitor picked.

use std::time::Duration;

pub const HERO_AUTOPLAY: Duration = Duration::from_millis(3500);
pub const TESTIMONIAL_AUTOPLAY: Duration = Duration::from_millis(5000);

/// Repeating timer facility the carousel arms and cancels.
pub trait IntervalScheduler {
    type Handle;

    /// Starts a timer firing every `every`; `None` if the platform refused.
    fn schedule(&mut self, every: Duration) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CarouselPhase {
    Idle,
    Paused,
    Destroyed,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CarouselOptions {
    pub looping: bool,
    pub autoplay: Duration,
}

impl CarouselOptions {
    pub fn hero() -> Self {
        Self {
            looping: true,
            autoplay: HERO_AUTOPLAY,
        }
    }

    pub fn testimonials() -> Self {
        Self {
            looping: true,
            autoplay: TESTIMONIAL_AUTOPLAY,
        }
    }
}

#[derive(Debug)]
pub struct Carousel<H> {
    len: usize,
    index: usize,
    options: CarouselOptions,
    phase: CarouselPhase,
    timer: Option<H>,
}

impl<H> Carousel<H> {
    pub fn new(len: usize, options: CarouselOptions) -> Self {
        Self {
            len,
            index: 0,
            options,
            phase: CarouselPhase::Idle,
            timer: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slide, also the highlighted indicator.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn options(&self) -> CarouselOptions {
        self.options
    }

    pub fn is_autoplaying(&self) -> bool {
        self.phase == CarouselPhase::Idle && self.timer.is_some()
    }

    pub fn next(&mut self) {
        if self.phase == CarouselPhase::Destroyed || self.len == 0 {
            return;
        }
        self.index = if self.options.looping {
            (self.index + 1) % self.len
        } else {
            (self.index + 1).min(self.len - 1)
        };
    }

    pub fn prev(&mut self) {
        if self.phase == CarouselPhase::Destroyed || self.len == 0 {
            return;
        }
        self.index = match self.index {
            0 if self.options.looping => self.len - 1,
            0 => 0,
            i => i - 1,
        };
    }

    /// Jumps to `index`. Out-of-range values wrap when looping and clamp
    /// to the last slide otherwise.
    pub fn go_to(&mut self, index: usize) {
        if self.phase == CarouselPhase::Destroyed || self.len == 0 {
            return;
        }
        self.index = if self.options.looping {
            index % self.len
        } else {
            index.min(self.len - 1)
        };
    }

    /// Manual step forward: moves, then restarts the autoplay countdown,
    /// including after a drag paused it.
    pub fn navigate_next<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        self.next();
        self.resume(scheduler);
    }

    pub fn navigate_prev<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        self.prev();
        self.resume(scheduler);
    }

    /// Indicator click; see [`Carousel::go_to`] for out-of-range indices.
    pub fn navigate_to<S>(&mut self, index: usize, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        self.go_to(index);
        self.resume(scheduler);
    }

    /// Timer callback. Returns whether the carousel advanced; ticks that
    /// arrive while paused or after teardown are ignored.
    pub fn tick(&mut self) -> bool {
        if !self.is_autoplaying() {
            return false;
        }
        self.next();
        true
    }

    /// Called once the slider is mounted.
    pub fn start<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        self.resume(scheduler);
    }

    pub fn pointer_enter<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        self.pause(scheduler);
    }

    pub fn pointer_leave<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        self.resume(scheduler);
    }

    pub fn drag_start<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        self.pause(scheduler);
    }

    /// A slide transition finished; restarts the autoplay countdown.
    pub fn animation_end<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        self.resume(scheduler);
    }

    /// Cancels the timer and freezes the carousel. Idempotent.
    pub fn destroy<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        self.stop_timer(scheduler);
        self.phase = CarouselPhase::Destroyed;
    }

    fn pause<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        if self.phase == CarouselPhase::Destroyed {
            return;
        }
        self.stop_timer(scheduler);
        self.phase = CarouselPhase::Paused;
    }

    fn resume<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        if self.phase == CarouselPhase::Destroyed {
            return;
        }
        self.stop_timer(scheduler);
        self.phase = CarouselPhase::Idle;
        if self.len > 1 {
            self.timer = scheduler.schedule(self.options.autoplay);
        }
    }

    fn stop_timer<S>(&mut self, scheduler: &mut S)
    where
        S: IntervalScheduler<Handle = H>,
    {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }
}

/// Testimonial slides visible side by side at a viewport width in CSS pixels.
pub fn slides_per_view(viewport_width: f64) -> usize {
    if viewport_width >= 1024.0 {
        3
    } else if viewport_width >= 768.0 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_wraps_when_looping() {
        let mut c: Carousel<()> = Carousel::new(3, CarouselOptions::hero());
        c.prev();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_bounded_carousel_clamps() {
        let options = CarouselOptions {
            looping: false,
            autoplay: HERO_AUTOPLAY,
        };
        let mut c: Carousel<()> = Carousel::new(3, options);
        c.prev();
        assert_eq!(c.index(), 0);
        c.go_to(10);
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_slides_per_view_breakpoints() {
        assert_eq!(slides_per_view(375.0), 1);
        assert_eq!(slides_per_view(768.0), 2);
        assert_eq!(slides_per_view(1280.0), 3);
    }
}
