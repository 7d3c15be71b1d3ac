/// Round half up on the fractional pixel value: add 0.5, then floor.
///
/// This is the only rounding used when writing integer bounds, so interpolated
/// geometry is pixel-reproducible across platforms.
pub(crate) fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
