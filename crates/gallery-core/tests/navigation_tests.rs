// Integration tests for the carousel state machine, driven the way a host
// drives it: pointer hits in, ticks in, caption writes out.

use gallery_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn make_controller() -> NavigationController {
    let gallery = GalleryState::new(default_catalog()).expect("default catalog is non-empty");
    NavigationController::new(gallery, NavigationParams::default())
}

fn arrow_hit(owner: usize, target: NavTarget) -> PickHit {
    PickHit {
        kind: ElementKind::Arrow(ArrowBinding { owner, target }),
        distance: 4.0,
    }
}

fn run_to_completion(nav: &mut NavigationController, caption: &mut Caption) -> usize {
    for _ in 0..1000 {
        if let TickOutcome::Completed { index } = nav.on_tick(FRAME, caption) {
            return index;
        }
    }
    panic!("transition never completed");
}

#[test]
fn advance_from_first_lands_on_second() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    nav.show_current(&mut caption);
    assert_eq!(caption.title, "Max Verstappen");

    let out = nav.on_pointer_hit(&[arrow_hit(0, NavTarget::Advance(1))], &mut caption);
    assert_eq!(
        out,
        PickOutcome::Started(NavigationRequest {
            direction: Direction::Left,
            target_index: 1
        })
    );
    assert!(!caption.visible, "caption hides while the ring turns");

    assert_eq!(run_to_completion(&mut nav, &mut caption), 1);
    assert_eq!(nav.gallery().current_index(), 1);
    assert!(!nav.is_animating());
    assert!(caption.visible);
    assert_eq!(caption.title, "You Luke Huge");
    assert_eq!(caption.artist, "You Luke");
}

#[test]
fn retreat_from_first_wraps_to_last() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    nav.on_pointer_hit(&[arrow_hit(0, NavTarget::Retreat(4))], &mut caption);
    assert_eq!(run_to_completion(&mut nav, &mut caption), 4);
    assert_eq!(nav.gallery().current_index(), 4);
    assert_eq!(caption.title, "Groundbreaking");
}

#[test]
fn current_index_only_changes_at_completion() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    nav.on_pointer_hit(&[arrow_hit(0, NavTarget::Advance(1))], &mut caption);
    loop {
        let before = nav.transition().map(|t| t.progress());
        match nav.on_tick(FRAME, &mut caption) {
            TickOutcome::Animating { progress } => {
                assert!(progress < 1.0);
                assert_eq!(nav.gallery().current_index(), 0);
                assert!(before.unwrap() <= progress);
            }
            TickOutcome::Completed { index } => {
                assert_eq!(index, 1);
                break;
            }
            TickOutcome::Idle => panic!("went idle without completing"),
        }
    }
}

#[test]
fn requests_mid_flight_are_dropped_not_queued() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    nav.on_pointer_hit(&[arrow_hit(0, NavTarget::Advance(1))], &mut caption);
    for _ in 0..10 {
        nav.on_tick(FRAME, &mut caption);
    }
    let (pending, end) = {
        let t = nav.transition().unwrap();
        (t.pending_index(), t.end_angle())
    };

    let again = nav.on_pointer_hit(&[arrow_hit(0, NavTarget::Advance(1))], &mut caption);
    assert_eq!(again, PickOutcome::Ignored(Ignored::Busy));
    let other = nav.on_pointer_hit(&[arrow_hit(0, NavTarget::Retreat(4))], &mut caption);
    assert_eq!(other, PickOutcome::Ignored(Ignored::Busy));
    assert_eq!(nav.navigate(Direction::Left, &mut caption), PickOutcome::Ignored(Ignored::Busy));

    let t = nav.transition().unwrap();
    assert_eq!(t.pending_index(), pending);
    assert_eq!(t.end_angle(), end);

    assert_eq!(run_to_completion(&mut nav, &mut caption), 1);
    // Nothing was queued behind it.
    assert_eq!(nav.on_tick(FRAME, &mut caption), TickOutcome::Idle);
    assert_eq!(nav.gallery().current_index(), 1);
}

#[test]
fn inert_hits_and_misses_change_nothing() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    nav.show_current(&mut caption);
    let snapshot = caption.clone();

    let art = PickHit {
        kind: ElementKind::Artwork { index: 0 },
        distance: 3.95,
    };
    let border = PickHit {
        kind: ElementKind::Border { index: 0 },
        distance: 3.96,
    };
    assert_eq!(
        nav.on_pointer_hit(&[art, border], &mut caption),
        PickOutcome::Ignored(Ignored::NotInteractive)
    );
    assert_eq!(nav.on_pointer_hit(&[], &mut caption), PickOutcome::Ignored(Ignored::Miss));
    assert_eq!(nav.on_pointer_miss(), PickOutcome::Ignored(Ignored::Miss));

    assert!(!nav.is_animating());
    assert_eq!(nav.rotation(), 0.0);
    assert_eq!(nav.gallery().current_index(), 0);
    assert_eq!(caption, snapshot);
}

#[test]
fn only_the_nearest_hit_counts() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    // An artwork in front of an arrow shields it, regardless of slice order.
    let hits = [
        arrow_hit(0, NavTarget::Advance(1)),
        PickHit {
            kind: ElementKind::Artwork { index: 0 },
            distance: 1.0,
        },
    ];
    assert_eq!(
        nav.on_pointer_hit(&hits, &mut caption),
        PickOutcome::Ignored(Ignored::NotInteractive)
    );
    assert!(!nav.is_animating());
}

#[test]
fn arrows_on_other_artworks_are_ignored() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    assert_eq!(
        nav.on_pointer_hit(&[arrow_hit(2, NavTarget::Advance(3))], &mut caption),
        PickOutcome::Ignored(Ignored::NotFacing)
    );
    assert!(!nav.is_animating());
}

#[test]
fn rotation_is_monotonic_and_never_overshoots() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    nav.on_pointer_hit(&[arrow_hit(0, NavTarget::Advance(1))], &mut caption);
    let (start, end) = {
        let t = nav.transition().unwrap();
        (t.start_angle(), t.end_angle())
    };
    let step = std::f32::consts::TAU / 5.0;
    assert_eq!(start, 0.0);
    assert!((end + step).abs() < 1e-6, "advance turns the ring by -2π/N");

    let mut prev = start;
    while nav.is_animating() {
        nav.on_tick(Duration::from_millis(7), &mut caption);
        let r = nav.rotation();
        assert!(r <= prev + 1e-6, "rotation reversed: {prev} -> {r}");
        assert!(r >= end - 1e-6 && r <= start + 1e-6, "overshoot: {r}");
        prev = r;
    }
    assert_eq!(nav.rotation(), end);
}

#[test]
fn every_easing_curve_turns_the_ring_without_overshoot() {
    let curves = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicInOut,
        Easing::SineInOut,
    ];
    let step = std::f32::consts::TAU / 5.0;
    for easing in curves {
        let gallery = GalleryState::new(default_catalog()).unwrap();
        let params = NavigationParams {
            duration: Duration::from_millis(300),
            easing,
        };
        let mut nav = NavigationController::new(gallery, params);
        let mut caption = Caption::default();
        nav.on_pointer_hit(&[arrow_hit(0, NavTarget::Retreat(4))], &mut caption);

        let mut prev = 0.0;
        let mut ticks = 0;
        while nav.is_animating() {
            let out = nav.on_tick(Duration::from_millis(10), &mut caption);
            let r = nav.rotation();
            assert!(r >= prev - 1e-6, "{easing:?}: rotation reversed {prev} -> {r}");
            assert!((-1e-6..=step + 1e-6).contains(&r), "{easing:?}: overshoot {r}");
            if ticks < 29 {
                assert_ne!(nav.gallery().current_index(), 4, "{easing:?}: committed early");
            } else {
                assert_eq!(out, TickOutcome::Completed { index: 4 });
            }
            prev = r;
            ticks += 1;
        }
        assert_eq!(ticks, 30, "{easing:?}: 300 ms at 10 ms per tick");
        assert_eq!(nav.rotation(), step);
        assert_eq!(caption.title, "Groundbreaking");
    }
}

#[test]
fn a_huge_tick_completes_in_one_step() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    nav.navigate(Direction::Right, &mut caption);
    assert_eq!(
        nav.on_tick(Duration::from_secs(30), &mut caption),
        TickOutcome::Completed { index: 4 }
    );
    let step = std::f32::consts::TAU / 5.0;
    assert!((nav.rotation() - step).abs() < 1e-6);
}

#[test]
fn consecutive_transitions_accumulate_rotation() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    for expected in 1..=5 {
        nav.navigate(Direction::Left, &mut caption);
        assert_eq!(run_to_completion(&mut nav, &mut caption), expected % 5);
    }
    assert_eq!(nav.gallery().current_index(), 0);
    let full_turn = -std::f32::consts::TAU;
    assert!((nav.rotation() - full_turn).abs() < 1e-4);
}

#[test]
fn idle_ticks_are_no_ops() {
    let mut nav = make_controller();
    let mut caption = Caption::default();
    assert_eq!(nav.on_tick(FRAME, &mut caption), TickOutcome::Idle);
    assert_eq!(caption, Caption::default());
}
