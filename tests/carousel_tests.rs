mod common;

#[cfg(test)]
pub mod carousel_tests {
    use super::common::*;

    use aras_web::state::*;

    fn started(len: usize, options: CarouselOptions) -> (Carousel<u32>, ManualScheduler) {
        let mut scheduler = ManualScheduler::default();
        let mut carousel = Carousel::new(len, options);
        carousel.start(&mut scheduler);
        (carousel, scheduler)
    }

    #[test]
    fn test_next_wraps_modulo_len_success() {
        for len in 1..=5 {
            for start in 0..len {
                for n in 0..12 {
                    let mut c: Carousel<u32> = Carousel::new(len, CarouselOptions::hero());
                    c.go_to(start);
                    for _ in 0..n {
                        c.next();
                    }
                    assert_eq!(c.index(), (start + n) % len, "len {len} start {start} n {n}");
                }
            }
        }
    }

    #[test]
    fn test_empty_carousel_never_moves() {
        let (mut c, scheduler) = started(0, CarouselOptions::testimonials());
        c.next();
        c.prev();
        c.go_to(3);
        assert_eq!(c.index(), 0);
        assert!(scheduler.scheduled.is_empty());
    }

    #[test]
    fn test_start_arms_single_timer() {
        let (c, scheduler) = started(3, CarouselOptions::hero());
        assert!(c.is_autoplaying());
        assert_eq!(scheduler.active.len(), 1);
    }

    #[test]
    fn test_single_slide_does_not_autoplay() {
        let (mut c, scheduler) = started(1, CarouselOptions::hero());
        assert!(!c.is_autoplaying());
        assert!(scheduler.scheduled.is_empty());
        assert!(!c.tick());
    }

    #[test]
    fn test_tick_advances_only_while_idle() {
        let (mut c, mut scheduler) = started(3, CarouselOptions::hero());
        assert!(c.tick());
        assert_eq!(c.index(), 1);

        c.pointer_enter(&mut scheduler);
        assert_eq!(c.phase(), CarouselPhase::Paused);
        assert!(scheduler.active.is_empty());
        assert!(!c.tick());
        assert_eq!(c.index(), 1);

        c.pointer_leave(&mut scheduler);
        assert!(c.tick());
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_drag_pauses_until_animation_end() {
        let (mut c, mut scheduler) = started(4, CarouselOptions::testimonials());
        c.drag_start(&mut scheduler);
        assert!(!c.is_autoplaying());

        c.next();
        c.animation_end(&mut scheduler);
        assert!(c.is_autoplaying());
        assert_eq!(scheduler.active.len(), 1);
    }

    #[test]
    fn test_manual_navigation_resets_autoplay() {
        let (mut c, mut scheduler) = started(3, CarouselOptions::hero());
        let first = scheduler.active.clone();

        c.navigate_next(&mut scheduler);
        assert_eq!(c.index(), 1);
        c.navigate_prev(&mut scheduler);
        assert_eq!(c.index(), 0);
        c.navigate_to(2, &mut scheduler);
        assert_eq!(c.index(), 2);

        assert_eq!(scheduler.scheduled.len(), 4);
        assert_eq!(scheduler.cancelled.len(), 3);
        assert_eq!(scheduler.cancelled[0], first[0]);
        assert_eq!(scheduler.active, vec![4]);
        assert!(c.is_autoplaying());
    }

    #[test]
    fn test_swipe_after_drag_resumes_autoplay() {
        let (mut c, mut scheduler) = started(4, CarouselOptions::testimonials());
        c.drag_start(&mut scheduler);
        assert_eq!(c.phase(), CarouselPhase::Paused);

        c.navigate_prev(&mut scheduler);

        assert_eq!(c.index(), 3);
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert!(c.is_autoplaying());
        assert_eq!(scheduler.active.len(), 1);
        assert!(c.tick());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_navigation_after_destroy_arms_nothing() {
        let (mut c, mut scheduler) = started(3, CarouselOptions::hero());
        c.destroy(&mut scheduler);

        c.navigate_next(&mut scheduler);
        c.navigate_to(2, &mut scheduler);

        assert_eq!(c.index(), 0);
        assert_eq!(scheduler.scheduled.len(), 1);
        assert!(scheduler.active.is_empty());
    }

    #[test]
    fn test_rearming_never_leaks_timers() {
        let (mut c, mut scheduler) = started(3, CarouselOptions::hero());
        c.pointer_leave(&mut scheduler);
        c.animation_end(&mut scheduler);
        c.animation_end(&mut scheduler);

        assert_eq!(scheduler.active.len(), 1);
        assert_eq!(scheduler.scheduled.len(), 4);
        assert_eq!(scheduler.cancelled.len(), 3);
    }

    #[test]
    fn test_destroy_cancels_timer_exactly_once() {
        let (mut c, mut scheduler) = started(3, CarouselOptions::hero());
        c.animation_end(&mut scheduler);
        let live = scheduler.active.clone();

        c.destroy(&mut scheduler);
        c.destroy(&mut scheduler);

        assert!(scheduler.active.is_empty());
        for handle in live {
            assert_eq!(scheduler.cancelled.iter().filter(|h| **h == handle).count(), 1);
        }
        assert_eq!(c.phase(), CarouselPhase::Destroyed);
    }

    #[test]
    fn test_no_advance_after_destroy() {
        let (mut c, mut scheduler) = started(3, CarouselOptions::hero());
        c.destroy(&mut scheduler);

        assert!(!c.tick());
        c.next();
        c.go_to(2);
        c.pointer_leave(&mut scheduler);
        c.animation_end(&mut scheduler);

        assert_eq!(c.index(), 0);
        assert_eq!(scheduler.scheduled.len(), 1);
        assert!(scheduler.active.is_empty());
    }

    #[test]
    fn test_refused_timer_leaves_carousel_manual() {
        let mut scheduler = ManualScheduler::refusing();
        let mut c: Carousel<u32> = Carousel::new(3, CarouselOptions::hero());
        c.start(&mut scheduler);

        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert!(!c.is_autoplaying());
        c.next();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_autoplay_intervals() {
        assert_eq!(CarouselOptions::hero().autoplay.as_millis(), 3500);
        assert_eq!(CarouselOptions::testimonials().autoplay.as_millis(), 5000);
        assert!(CarouselOptions::hero().looping && CarouselOptions::testimonials().looping);
    }
}
