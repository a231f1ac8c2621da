use crate::*;

use alloc::vec;
use alloc::vec::Vec;

fn list(offset: f32) -> ScrollMetrics {
    // maxOffset = 1000 - 500 = 500
    ScrollMetrics::new(offset, 1000.0, 500.0)
}

fn short_list(offset: f32) -> ScrollMetrics {
    ScrollMetrics::new(offset, 300.0, 500.0)
}

fn run(t: &mut PullTracker, event: ScrollEvent, metrics: ScrollMetrics) -> Vec<Effect> {
    t.handle_event_collect(event, metrics)
}

const DRAG_END: ScrollEvent = ScrollEvent::DragEnd {
    will_decelerate: false,
};

#[test]
fn overscroll_distance_is_signed_gap_to_bottom_rest() {
    assert_eq!(list(400.0).overscroll_distance(), 100.0);
    assert_eq!(list(500.0).overscroll_distance(), 0.0);
    assert_eq!(list(650.0).overscroll_distance(), -150.0);
    assert_eq!(list(0.0).max_offset(), 500.0);
}

#[test]
fn scrollable_accounts_for_insets() {
    assert!(list(0.0).is_scrollable());
    assert!(!short_list(0.0).is_scrollable());

    // 450 > 500 - 0 - 0 is false, but insets shrink the visible area to 400.
    let m = ScrollMetrics::new(0.0, 450.0, 500.0);
    assert!(!m.is_scrollable());
    assert!(m.with_insets(60.0, 40.0).is_scrollable());

    // Exactly filling the area is not scrollable.
    assert!(!ScrollMetrics::new(0.0, 500.0, 500.0).is_scrollable());
}

#[test]
fn full_gesture_fires_refresh_once_and_resets() {
    let mut t = PullTracker::new(PullOptions::default());
    let inset = 24.0;

    assert!(run(&mut t, ScrollEvent::DragBegin, list(495.0).with_insets(0.0, inset)).is_empty());
    assert_eq!(t.saved_bottom_inset(), Some(inset));
    assert!(t.is_dragging());

    let fx = run(&mut t, ScrollEvent::PositionChanged, list(520.0).with_insets(0.0, inset));
    assert_eq!(
        fx,
        vec![
            Effect::AttachFooter,
            Effect::AnimateBottomInset {
                to: inset,
                duration_ms: 200
            },
        ]
    );
    assert_eq!(t.phase(), PullPhase::Revealed);

    let fx = run(&mut t, DRAG_END, list(650.0).with_insets(0.0, inset));
    assert_eq!(
        fx,
        vec![
            Effect::RefreshTriggered,
            Effect::AnimateBottomInset {
                to: inset,
                duration_ms: 200
            },
            Effect::DetachFooter { duration_ms: 200 },
        ]
    );
    assert_eq!(t.phase(), PullPhase::Idle);
    assert!(!t.is_dragging());
    assert_eq!(t.saved_bottom_inset(), None);
}

#[test]
fn release_before_refresh_threshold_only_resets() {
    let mut t = PullTracker::default();
    run(&mut t, ScrollEvent::DragBegin, list(495.0));
    run(&mut t, ScrollEvent::PositionChanged, list(520.0));
    assert!(t.is_footer_visible());

    let fx = run(&mut t, DRAG_END, list(560.0));
    assert!(!fx.contains(&Effect::RefreshTriggered));
    assert!(fx.contains(&Effect::DetachFooter { duration_ms: 200 }));
    assert!(!t.is_footer_visible());
}

#[test]
fn refresh_threshold_is_strict() {
    let mut t = PullTracker::default();
    run(&mut t, ScrollEvent::DragBegin, list(500.0));
    run(&mut t, ScrollEvent::PositionChanged, list(560.0));
    // overscroll == -100 is not past -100
    let mut fired = false;
    t.handle_event(DRAG_END, list(600.0), &mut |e| {
        fired |= e == Effect::RefreshTriggered
    });
    assert!(!fired);
}

#[test]
fn non_scrollable_content_never_reveals_or_refreshes() {
    let mut t = PullTracker::default();
    for offset in [-500.0, -210.0, 0.0, 200.0, 350.0, 1000.0] {
        let m = short_list(offset);
        run(&mut t, ScrollEvent::DragBegin, m);
        let fx = run(&mut t, ScrollEvent::PositionChanged, m);
        assert!(fx.is_empty(), "offset={offset}");
        assert!(!t.is_footer_visible());

        let fx = run(&mut t, DRAG_END, m);
        assert!(!fx.contains(&Effect::RefreshTriggered), "offset={offset}");
        assert!(!fx.contains(&Effect::AttachFooter));
    }
}

#[test]
fn repeated_samples_past_threshold_attach_once() {
    let mut t = PullTracker::default();
    run(&mut t, ScrollEvent::DragBegin, list(495.0));

    let mut attaches = 0;
    for offset in [520.0, 530.0, 530.0, 540.0, 700.0] {
        t.on_position_changed(list(offset), &mut |e| {
            if e == Effect::AttachFooter {
                attaches += 1;
            }
        });
        assert_eq!(t.phase(), PullPhase::Revealed);
    }
    assert_eq!(attaches, 1);
}

#[test]
fn reveal_requires_full_difference_threshold() {
    let mut t = PullTracker::default();
    run(&mut t, ScrollEvent::DragBegin, list(495.0));
    assert!(run(&mut t, ScrollEvent::PositionChanged, list(505.0)).is_empty());
    assert!(!t.is_footer_visible());
    // overscroll == -10 reaches the threshold
    assert!(!run(&mut t, ScrollEvent::PositionChanged, list(510.0)).is_empty());
    assert!(t.is_footer_visible());
}

#[test]
fn retreating_above_threshold_keeps_footer_until_release() {
    let mut t = PullTracker::default();
    run(&mut t, ScrollEvent::DragBegin, list(495.0));
    run(&mut t, ScrollEvent::PositionChanged, list(530.0));
    assert!(run(&mut t, ScrollEvent::PositionChanged, list(480.0)).is_empty());
    assert!(t.is_footer_visible());

    run(&mut t, DRAG_END, list(480.0));
    assert!(!t.is_footer_visible());
}

#[test]
fn drag_begin_in_interior_saves_nothing() {
    let mut t = PullTracker::default();
    t.on_drag_begin(list(200.0).with_insets(0.0, 8.0));
    assert_eq!(t.saved_bottom_inset(), None);
    assert!(t.is_dragging());
    assert_eq!(t.phase(), PullPhase::Idle);

    // An interior drag that ends normally only detaches (no inset write).
    let fx = run(&mut t, DRAG_END, list(300.0).with_insets(0.0, 8.0));
    assert_eq!(fx, vec![Effect::DetachFooter { duration_ms: 200 }]);
}

#[test]
fn drag_from_interior_past_edge_saves_inset_on_reveal() {
    let mut t = PullTracker::default();
    run(&mut t, ScrollEvent::DragBegin, list(100.0).with_insets(0.0, 12.0));
    let fx = run(&mut t, ScrollEvent::PositionChanged, list(540.0).with_insets(0.0, 12.0));
    assert_eq!(
        fx[1],
        Effect::AnimateBottomInset {
            to: 12.0,
            duration_ms: 200
        }
    );
    assert_eq!(t.saved_bottom_inset(), Some(12.0));
}

#[test]
fn deceleration_end_always_returns_to_idle() {
    let mut t = PullTracker::default();
    let fx = run(&mut t, ScrollEvent::DecelerationEnd, list(0.0));
    assert_eq!(fx, vec![Effect::DetachFooter { duration_ms: 200 }]);
    assert_eq!(t.phase(), PullPhase::Idle);

    let fx = run(&mut t, ScrollEvent::DecelerationEnd, list(0.0));
    assert_eq!(fx, vec![Effect::DetachFooter { duration_ms: 200 }]);
    assert_eq!(t.phase(), PullPhase::Idle);
}

#[test]
fn deceleration_end_restores_saved_inset_and_never_refreshes() {
    let mut t = PullTracker::default();
    run(&mut t, ScrollEvent::DragBegin, list(498.0).with_insets(0.0, 30.0));
    run(&mut t, ScrollEvent::PositionChanged, list(700.0).with_insets(0.0, 30.0));
    let fx = run(
        &mut t,
        ScrollEvent::DragEnd {
            will_decelerate: true,
        },
        list(700.0).with_insets(0.0, 30.0),
    );
    assert_eq!(fx[0], Effect::RefreshTriggered);
    // Kept for the deceleration safety net.
    assert_eq!(t.saved_bottom_inset(), Some(30.0));

    let fx = run(&mut t, ScrollEvent::DecelerationEnd, list(700.0));
    assert_eq!(
        fx,
        vec![
            Effect::AnimateBottomInset {
                to: 30.0,
                duration_ms: 200
            },
            Effect::DetachFooter { duration_ms: 200 },
        ]
    );
    assert_eq!(t.saved_bottom_inset(), None);
}

#[test]
fn position_samples_after_release_do_not_reveal_or_refresh() {
    let mut t = PullTracker::default();
    run(&mut t, ScrollEvent::DragBegin, list(495.0));
    run(&mut t, ScrollEvent::PositionChanged, list(600.0));
    let refreshed = t.handle_event(
        ScrollEvent::DragEnd {
            will_decelerate: true,
        },
        list(650.0),
        &mut |_| {},
    );
    assert!(refreshed);

    // Momentum bounce still reports overscroll past both thresholds.
    for offset in [640.0, 620.0, 560.0, 510.0] {
        assert!(run(&mut t, ScrollEvent::PositionChanged, list(offset)).is_empty());
        assert_eq!(t.phase(), PullPhase::Idle);
    }

    let fx = run(&mut t, ScrollEvent::DecelerationEnd, list(500.0));
    assert!(!fx.contains(&Effect::RefreshTriggered));
}

#[test]
fn each_gesture_can_refresh_again() {
    let mut t = PullTracker::default();
    let mut refreshes = 0;
    for _ in 0..3 {
        run(&mut t, ScrollEvent::DragBegin, list(500.0));
        run(&mut t, ScrollEvent::PositionChanged, list(520.0));
        if t.handle_event(DRAG_END, list(650.0), &mut |_| {}) {
            refreshes += 1;
        }
    }
    assert_eq!(refreshes, 3);
}

#[test]
fn zero_duration_effects() {
    let mut t = PullTracker::new(PullOptions::new().with_animation_duration_ms(0));
    run(&mut t, ScrollEvent::DragBegin, list(500.0));
    let fx = run(&mut t, ScrollEvent::PositionChanged, list(520.0));
    assert_eq!(
        fx[1],
        Effect::AnimateBottomInset {
            to: 0.0,
            duration_ms: 0
        }
    );
}

#[test]
fn custom_thresholds_apply() {
    let mut t = PullTracker::new(
        PullOptions::new()
            .with_difference_threshold(40.0)
            .with_refresh_threshold(60.0),
    );
    run(&mut t, ScrollEvent::DragBegin, list(470.0));
    assert_eq!(t.saved_bottom_inset(), Some(0.0));
    assert!(run(&mut t, ScrollEvent::PositionChanged, list(530.0)).is_empty());
    assert!(!run(&mut t, ScrollEvent::PositionChanged, list(540.0)).is_empty());
    assert!(t.handle_event(DRAG_END, list(570.0), &mut |_| {}));
}

#[test]
fn options_are_sanitized() {
    let t = PullTracker::new(
        PullOptions::new()
            .with_difference_threshold(-15.0)
            .with_refresh_threshold(f32::NAN),
    );
    assert_eq!(t.options().difference_threshold, 15.0);
    assert_eq!(t.options().refresh_threshold, DEFAULT_REFRESH_THRESHOLD);

    let mut t = PullTracker::default();
    t.update_options(|o| o.difference_threshold = f32::INFINITY);
    assert_eq!(t.options().difference_threshold, DEFAULT_DIFFERENCE_THRESHOLD);
    assert_eq!(PullOptions::default().sanitized(), PullOptions::default());
}

#[test]
fn snapshot_round_trips_mid_gesture() {
    let mut t = PullTracker::default();
    run(&mut t, ScrollEvent::DragBegin, list(495.0).with_insets(0.0, 5.0));
    run(&mut t, ScrollEvent::PositionChanged, list(530.0).with_insets(0.0, 5.0));
    let snap = t.snapshot();
    assert_eq!(
        snap,
        PullSnapshot {
            phase: PullPhase::Revealed,
            saved_bottom_inset: Some(5.0),
            dragging: true,
        }
    );

    let mut restored = PullTracker::default();
    restored.restore_snapshot(snap);
    assert!(restored.handle_event(DRAG_END, list(700.0), &mut |_| {}));
}
