use super::*;
use crate::animation::key::KeyTarget;

fn key(frame: u32, x: f32, y: f32) -> KeyPosition {
    KeyPosition {
        frame,
        target: KeyTarget::Any,
        x,
        y,
    }
}

fn parent() -> ParentSize {
    ParentSize::new(1000, 500).unwrap()
}

#[test]
fn no_keyframes_is_a_no_op() {
    assert_eq!(resolve_window(&[], 50, parent()), None);
}

#[test]
fn single_keyframe_brackets_both_sides() {
    let curve = [key(50, 0.5, 0.5)];

    // Before the keyframe it is the "next" side: window [0, 50].
    let w = resolve_window(&curve, 20, parent()).unwrap();
    assert_eq!((w.start_frame, w.end_frame), (0, 50));
    assert_eq!(w.start_anchor, None);
    assert_eq!(w.end_anchor, Some((500.0, 250.0)));

    // After it the window is [50, 100] and the anchor moves to the start.
    let w = resolve_window(&curve, 80, parent()).unwrap();
    assert_eq!((w.start_frame, w.end_frame), (50, 100));
    assert_eq!(w.start_anchor, Some((500.0, 250.0)));
    assert_eq!(w.end_anchor, None);
}

#[test]
fn exact_hit_collapses_next_side() {
    // Previous and next resolve to the same keyframe; next is treated absent.
    let curve = [key(50, 0.5, 0.5)];
    let w = resolve_window(&curve, 50, parent()).unwrap();
    assert_eq!((w.start_frame, w.end_frame), (50, 100));
    assert_eq!(w.start_anchor, Some((500.0, 250.0)));
    assert_eq!(w.end_anchor, None);
}

#[test]
fn two_keyframes_bracket_between_them() {
    let curve = [key(25, 0.2, 0.2), key(75, 0.8, 0.8)];
    let w = resolve_window(&curve, 40, parent()).unwrap();
    assert_eq!((w.start_frame, w.end_frame), (25, 75));
    assert_eq!(w.start_anchor, Some((200.0, 100.0)));
    assert_eq!(w.end_anchor, Some((800.0, 400.0)));
}

#[test]
fn local_progress_renormalizes_within_window() {
    let curve = [key(25, 0.2, 0.2), key(75, 0.8, 0.8)];
    let w = resolve_window(&curve, 50, parent()).unwrap();
    assert!((w.local_progress(0.25) - 0.0).abs() < 1e-9);
    assert!((w.local_progress(0.5) - 0.5).abs() < 1e-9);
    assert!((w.local_progress(0.75) - 1.0).abs() < 1e-9);
}

#[test]
fn degenerate_window_falls_back_to_global_progress() {
    // Two keyframes at the same frame produce a zero-width window.
    let curve = [key(50, 0.2, 0.2), key(50, 0.8, 0.8)];
    let w = resolve_window(&curve, 50, parent()).unwrap();
    assert_eq!((w.start_frame, w.end_frame), (50, 50));
    assert_eq!(w.local_progress(0.37), 0.37);
}

#[test]
fn overshoot_frame_numbers_resolve() {
    let curve = [key(50, 0.5, 0.5)];

    // Past the end of the timeline only the previous side matches.
    let w = resolve_window(&curve, 110, parent()).unwrap();
    assert_eq!((w.start_frame, w.end_frame), (50, 100));

    // Before the start only the next side matches.
    let w = resolve_window(&curve, -10, parent()).unwrap();
    assert_eq!((w.start_frame, w.end_frame), (0, 50));
}
