use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::Point;
use crate::foundation::math::{lerp, round_half_up};

/// Path shape for position interpolation between the two endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PathMode {
    /// Straight line between the anchors.
    #[default]
    Linear,
    /// Quarter-ellipse whose tangent is vertical at progress 0 and horizontal
    /// at progress 1.
    ArcStartVertical,
    /// Quarter-ellipse whose tangent is horizontal at progress 0 and vertical
    /// at progress 1.
    ArcStartHorizontal,
}

/// Effective endpoint pose fed to the path interpolator: fractional position
/// and size after visibility adjustment and anchor overrides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct EndpointPose {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Position along the path at unclamped progress `t`.
///
/// The arc formulas degenerate to the linear one when either axis delta is
/// zero, so no special-casing is needed.
pub(crate) fn position(mode: PathMode, start: Point, end: Point, t: f64) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    match mode {
        PathMode::Linear => Point::new(start.x + t * dx, start.y + t * dy),
        PathMode::ArcStartVertical => {
            let theta = FRAC_PI_2 * t;
            Point::new(start.x + dx * (1.0 - theta.cos()), start.y + dy * theta.sin())
        }
        PathMode::ArcStartHorizontal => {
            let theta = FRAC_PI_2 * t;
            Point::new(start.x + dx * theta.sin(), start.y + dy * (1.0 - theta.cos()))
        }
    }
}

/// Interpolated integer bounds as `(left, top, right, bottom)`.
///
/// `pos_t` drives position (it may be window-local when keyframes override
/// the anchors); `size_t` is always the global progress. Neither is clamped;
/// clamping is caller policy. Rounding is round-half-up and right/bottom are
/// derived from the rounded size so width/height stay exact.
pub(crate) fn interpolate_bounds(
    mode: PathMode,
    start: &EndpointPose,
    end: &EndpointPose,
    pos_t: f64,
    size_t: f64,
) -> (i32, i32, i32, i32) {
    let p = position(
        mode,
        Point::new(start.x, start.y),
        Point::new(end.x, end.y),
        pos_t,
    );
    let width = lerp(start.width, end.width, size_t);
    let height = lerp(start.height, end.height, size_t);

    let left = round_half_up(p.x);
    let top = round_half_up(p.y);
    (left, top, left + round_half_up(width), top + round_half_up(height))
}

#[cfg(test)]
#[path = "../../tests/unit/path/interpolator.rs"]
mod tests;
