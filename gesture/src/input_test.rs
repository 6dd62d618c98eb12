#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_code_maps_dom_codes() {
    assert_eq!(Button::from_code(0), Button::Primary);
    assert_eq!(Button::from_code(1), Button::Middle);
    assert_eq!(Button::from_code(2), Button::Secondary);
    assert_eq!(Button::from_code(3), Button::Other(3));
    assert_eq!(Button::from_code(4), Button::Other(4));
}

// =============================================================
// primary_sample
// =============================================================

#[test]
fn primary_sample_prefers_first_touch() {
    let touches = [PointerSample::new(10.0, 20.0), PointerSample::new(300.0, 400.0)];
    let direct = Some(PointerSample::new(1.0, 2.0));
    assert_eq!(primary_sample(&touches, direct), Some(PointerSample::new(10.0, 20.0)));
}

#[test]
fn primary_sample_falls_back_to_direct() {
    let direct = Some(PointerSample::new(7.0, 8.0));
    assert_eq!(primary_sample(&[], direct), direct);
}

#[test]
fn primary_sample_none_without_contact() {
    assert_eq!(primary_sample(&[], None), None);
}

// =============================================================
// InputEvent constructors
// =============================================================

#[test]
fn mouse_event_carries_button_and_sample() {
    let ev = InputEvent::mouse(Phase::Start, 0, PointerSample::new(5.0, 6.0), true);
    assert_eq!(ev.phase, Phase::Start);
    assert_eq!(ev.source, Source::Mouse { button: Button::Primary });
    assert_eq!(ev.sample, Some(PointerSample::new(5.0, 6.0)));
    assert!(ev.cancelable);
}

#[test]
fn touch_event_tracks_only_first_finger() {
    let touches = [PointerSample::new(1.0, 1.0), PointerSample::new(99.0, 99.0)];
    let ev = InputEvent::touch(Phase::Move, &touches, true);
    assert_eq!(ev.source, Source::Touch);
    assert_eq!(ev.sample, Some(PointerSample::new(1.0, 1.0)));
}

#[test]
fn touch_end_without_fingers_has_no_sample() {
    let ev = InputEvent::touch(Phase::End, &[], false);
    assert!(ev.sample.is_none());
}

#[test]
fn only_primary_button_or_touch_can_start() {
    let at = PointerSample::default();
    assert!(InputEvent::mouse(Phase::Start, 0, at, true).can_start_drag());
    assert!(!InputEvent::mouse(Phase::Start, 1, at, true).can_start_drag());
    assert!(!InputEvent::mouse(Phase::Start, 2, at, true).can_start_drag());
    assert!(InputEvent::touch(Phase::Start, &[at], true).can_start_drag());
}

// =============================================================
// Geometry helpers
// =============================================================

#[test]
fn delta_and_translate_compose() {
    let anchor = PointerSample::new(50.0, 50.0);
    let now = PointerSample::new(70.0, 80.0);
    let moved = Offset::new(100.0, 100.0).translated(now.delta_from(anchor));
    assert_eq!(moved, Offset::new(120.0, 130.0));
}

#[test]
fn negative_delta_moves_up_and_left() {
    let delta = PointerSample::new(0.0, 0.0).delta_from(PointerSample::new(10.0, 25.0));
    assert_eq!(Offset::new(40.0, 40.0).translated(delta), Offset::new(30.0, 15.0));
}
