use super::*;

fn pose(x: f64, y: f64, width: f64, height: f64) -> EndpointPose {
    EndpointPose {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn linear_midpoint_averages_bounds() {
    let start = pose(0.0, 0.0, 30.0, 40.0);
    let end = pose(500.0, 600.0, 30.0, 40.0);
    let bounds = interpolate_bounds(PathMode::Linear, &start, &end, 0.5, 0.5);
    assert_eq!(bounds, (250, 300, 280, 340));
}

#[test]
fn arc_start_vertical_quarter_ellipse() {
    let start = pose(0.0, 0.0, 30.0, 40.0);
    let end = pose(400.0, 400.0, 30.0, 40.0);
    let bounds = interpolate_bounds(PathMode::ArcStartVertical, &start, &end, 0.5, 0.5);
    // left = round(400 * (1 - cos 45deg)), top = round(400 * sin 45deg)
    assert_eq!(bounds, (117, 283, 147, 323));
}

#[test]
fn arc_start_horizontal_swaps_axes() {
    let start = pose(0.0, 0.0, 30.0, 40.0);
    let end = pose(400.0, 400.0, 30.0, 40.0);
    let bounds = interpolate_bounds(PathMode::ArcStartHorizontal, &start, &end, 0.5, 0.5);
    assert_eq!(bounds, (283, 117, 313, 157));
}

#[test]
fn arcs_hit_both_endpoints_exactly() {
    let start = pose(10.0, 20.0, 100.0, 50.0);
    let end = pose(300.0, 220.0, 60.0, 80.0);
    for mode in [
        PathMode::Linear,
        PathMode::ArcStartVertical,
        PathMode::ArcStartHorizontal,
    ] {
        assert_eq!(
            interpolate_bounds(mode, &start, &end, 0.0, 0.0),
            (10, 20, 110, 70),
            "{mode:?} at 0"
        );
        assert_eq!(
            interpolate_bounds(mode, &start, &end, 1.0, 1.0),
            (300, 220, 360, 300),
            "{mode:?} at 1"
        );
    }
}

#[test]
fn zero_delta_degenerates_arc_to_line() {
    // With dx = 0 the arc formulas collapse to pure vertical motion.
    let start = pose(100.0, 0.0, 10.0, 10.0);
    let end = pose(100.0, 200.0, 10.0, 10.0);
    let arc = interpolate_bounds(PathMode::ArcStartVertical, &start, &end, 0.5, 0.5);
    assert_eq!(arc.0, 100);
    let (_, top, _, _) = arc;
    // sin(45deg) of the way down, not halfway: the arc still shapes the axis
    // that moves.
    assert_eq!(top, 141);
}

#[test]
fn progress_outside_unit_range_extrapolates() {
    let start = pose(0.0, 0.0, 10.0, 10.0);
    let end = pose(100.0, 100.0, 10.0, 10.0);
    let bounds = interpolate_bounds(PathMode::Linear, &start, &end, 1.5, 1.5);
    assert_eq!(bounds, (150, 150, 160, 160));
    let bounds = interpolate_bounds(PathMode::Linear, &start, &end, -0.5, -0.5);
    assert_eq!(bounds, (-50, -50, -40, -40));
}

#[test]
fn position_is_independent_of_size_progress() {
    let start = pose(0.0, 0.0, 10.0, 10.0);
    let end = pose(100.0, 100.0, 30.0, 30.0);
    // Window-local position progress with global size progress.
    let bounds = interpolate_bounds(PathMode::Linear, &start, &end, 1.0, 0.5);
    assert_eq!(bounds, (100, 100, 120, 120));
}
