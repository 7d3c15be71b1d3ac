/// Named transition easing curves applied to global progress.
///
/// Each curve (except `Linear`) is a cubic bézier through (0,0) and (1,1),
/// solved numerically for `y(x)`. `Linear` is the identity and passes
/// out-of-range progress through untouched so geometry extrapolation still
/// works when no shaping is wanted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Easing {
    /// Material standard curve, cubic(0.4, 0.0, 0.2, 1.0).
    Standard,
    /// Accelerating exit, cubic(0.4, 0.05, 0.8, 0.7).
    Accelerate,
    /// Decelerating entry, cubic(0.0, 0.0, 0.2, 0.95).
    Decelerate,
    /// Identity mapping.
    Linear,
    /// Pulls backward before moving forward, cubic(0.36, 0.0, 0.66, -0.56).
    Anticipate,
    /// Passes the target before settling, cubic(0.34, 1.56, 0.64, 1.0).
    Overshoot,
}

impl Easing {
    fn control_points(self) -> Option<[f64; 4]> {
        match self {
            Self::Standard => Some([0.4, 0.0, 0.2, 1.0]),
            Self::Accelerate => Some([0.4, 0.05, 0.8, 0.7]),
            Self::Decelerate => Some([0.0, 0.0, 0.2, 0.95]),
            Self::Linear => None,
            Self::Anticipate => Some([0.36, 0.0, 0.66, -0.56]),
            Self::Overshoot => Some([0.34, 1.56, 0.64, 1.0]),
        }
    }

    /// Map raw progress through the curve.
    ///
    /// Bézier curves clamp their input to `[0, 1]`; `Linear` does not.
    pub fn apply(self, t: f64) -> f64 {
        let Some([c1x, c1y, c2x, c2y]) = self.control_points() else {
            return t;
        };
        let t = t.clamp(0.0, 1.0);
        let s = solve_parameter(c1x, c2x, t);
        bezier_axis(c1y, c2y, s)
    }
}

/// One axis of a cubic bézier with endpoints fixed at 0 and 1.
fn bezier_axis(p1: f64, p2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

/// Invert the x axis by bisection. All preset x control points lie in
/// `[0, 1]`, so x is monotone in the parameter and bisection converges.
fn solve_parameter(c1x: f64, c2x: f64, x: f64) -> f64 {
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    for _ in 0..48 {
        let mid = (lo + hi) / 2.0;
        if bezier_axis(c1x, c2x, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/easing.rs"]
mod tests;
