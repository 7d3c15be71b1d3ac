use super::*;

const EPS: f64 = 1e-6;

#[test]
fn curves_pin_endpoints() {
    for easing in [
        Easing::Standard,
        Easing::Accelerate,
        Easing::Decelerate,
        Easing::Linear,
        Easing::Anticipate,
        Easing::Overshoot,
    ] {
        assert!(easing.apply(0.0).abs() < EPS, "{easing:?} at 0");
        assert!((easing.apply(1.0) - 1.0).abs() < EPS, "{easing:?} at 1");
    }
}

#[test]
fn linear_passes_overshoot_through() {
    assert_eq!(Easing::Linear.apply(1.25), 1.25);
    assert_eq!(Easing::Linear.apply(-0.25), -0.25);
}

#[test]
fn standard_decelerates_into_target() {
    // The standard curve front-loads motion: past the midpoint of time, more
    // than half the distance is covered.
    assert!(Easing::Standard.apply(0.5) > 0.5);
    assert!(Easing::Accelerate.apply(0.3) < 0.3);
    assert!(Easing::Decelerate.apply(0.3) > 0.3);
}

#[test]
fn anticipate_dips_negative_and_overshoot_exceeds_one() {
    assert!(Easing::Anticipate.apply(0.4) < 0.0);
    assert!(Easing::Overshoot.apply(0.6) > 1.0);
}

#[test]
fn bezier_curves_clamp_input() {
    assert!((Easing::Standard.apply(1.5) - 1.0).abs() < EPS);
    assert!(Easing::Standard.apply(-0.5).abs() < EPS);
}
