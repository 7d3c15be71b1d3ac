use crate::foundation::core::{Color, Visibility};
use crate::foundation::math::lerp;
use crate::frame::snapshot::FrameSnapshot;
use crate::path::interpolator::EndpointPose;

const DEFAULT_PIVOT: f32 = 0.5;
const DEFAULT_ROTATION: f32 = 0.0;
const DEFAULT_TRANSLATION: f32 = 0.0;
const DEFAULT_SCALE: f32 = 1.0;
const DEFAULT_ALPHA: f32 = 1.0;

/// Blend one optional scalar field.
///
/// Both endpoints unset yields unset. A single unset endpoint is substituted
/// with the field-specific default before the linear blend, so the explicit
/// side animates against a sensible baseline instead of propagating
/// "undefined". `t` is not clamped.
pub(crate) fn blend_optional(
    start: Option<f32>,
    end: Option<f32>,
    default: f32,
    t: f64,
) -> Option<f32> {
    if start.is_none() && end.is_none() {
        return None;
    }
    let s = f64::from(start.unwrap_or(default));
    let e = f64::from(end.unwrap_or(default));
    Some(lerp(s, e, t) as f32)
}

/// Per-channel linear color blend.
///
/// Unlike geometry, colors never extrapolate: progress below 0 copies the
/// start color verbatim and progress above 1 copies the end color.
pub fn blend_color(start: Color, end: Color, t: f64) -> Color {
    if t < 0.0 {
        return start;
    }
    if t > 1.0 {
        return end;
    }
    let ch = |s: f32, e: f32| lerp(f64::from(s), f64::from(e), t) as f32;
    Color {
        r: ch(start.r, end.r),
        g: ch(start.g, end.g),
        b: ch(start.b, end.b),
        a: ch(start.a, end.a),
    }
}

/// Effective geometry and alpha endpoints after the visibility-GONE collapse.
///
/// A GONE endpoint takes the opposite endpoint's size, centered on its own
/// original anchor, and its alpha is forced to 0 unless explicitly set. This
/// produces a fade/scale-through-center for appearing or disappearing widgets
/// rather than a jump. The end-side adjustment reads the start width/height
/// after the start-side adjustment, mirroring the original sequential rule.
pub(crate) fn gone_adjusted(
    start: &FrameSnapshot,
    end: &FrameSnapshot,
) -> (EndpointPose, EndpointPose, Option<f32>, Option<f32>) {
    let mut s = EndpointPose {
        x: f64::from(start.left),
        y: f64::from(start.top),
        width: f64::from(start.width()),
        height: f64::from(start.height()),
    };
    let mut e = EndpointPose {
        x: f64::from(end.left),
        y: f64::from(end.top),
        width: f64::from(end.width()),
        height: f64::from(end.height()),
    };
    let mut start_alpha = start.alpha;
    let mut end_alpha = end.alpha;

    if start.visibility == Visibility::Gone {
        s.x -= e.width / 2.0;
        s.y -= e.height / 2.0;
        s.width = e.width;
        s.height = e.height;
        if start_alpha.is_none() {
            start_alpha = Some(0.0);
        }
    }
    if end.visibility == Visibility::Gone {
        e.x -= s.width / 2.0;
        e.y -= s.height / 2.0;
        e.width = s.width;
        e.height = s.height;
        if end_alpha.is_none() {
            end_alpha = Some(0.0);
        }
    }

    (s, e, start_alpha, end_alpha)
}

/// Write every blended scalar transform field and custom attribute into `out`.
///
/// `start_alpha`/`end_alpha` are the GONE-adjusted endpoint alphas from
/// [`gone_adjusted`]; blending them against the default of 1 makes a side
/// with no explicit opacity fully visible, so the explicit side fades in or
/// out against it.
pub(crate) fn blend_attributes(
    out: &mut FrameSnapshot,
    start: &FrameSnapshot,
    end: &FrameSnapshot,
    start_alpha: Option<f32>,
    end_alpha: Option<f32>,
    t: f64,
) {
    out.pivot_x = blend_optional(start.pivot_x, end.pivot_x, DEFAULT_PIVOT, t);
    out.pivot_y = blend_optional(start.pivot_y, end.pivot_y, DEFAULT_PIVOT, t);

    out.rotation_x = blend_optional(start.rotation_x, end.rotation_x, DEFAULT_ROTATION, t);
    out.rotation_y = blend_optional(start.rotation_y, end.rotation_y, DEFAULT_ROTATION, t);
    out.rotation_z = blend_optional(start.rotation_z, end.rotation_z, DEFAULT_ROTATION, t);

    out.translation_x =
        blend_optional(start.translation_x, end.translation_x, DEFAULT_TRANSLATION, t);
    out.translation_y =
        blend_optional(start.translation_y, end.translation_y, DEFAULT_TRANSLATION, t);
    out.translation_z =
        blend_optional(start.translation_z, end.translation_z, DEFAULT_TRANSLATION, t);

    out.scale_x = blend_optional(start.scale_x, end.scale_x, DEFAULT_SCALE, t);
    out.scale_y = blend_optional(start.scale_y, end.scale_y, DEFAULT_SCALE, t);

    out.alpha = blend_optional(start_alpha, end_alpha, DEFAULT_ALPHA, t);

    // Custom attributes blend only when both endpoints carry the name; a
    // one-sided attribute has no defined default and is dropped.
    out.custom_colors.clear();
    for (name, s) in &start.custom_colors {
        if let Some(e) = end.custom_colors.get(name) {
            out.custom_colors.insert(name.clone(), blend_color(*s, *e, t));
        }
    }
    out.custom_floats.clear();
    for (name, s) in &start.custom_floats {
        if let Some(e) = end.custom_floats.get(name) {
            let blended = lerp(f64::from(*s), f64::from(*e), t) as f32;
            out.custom_floats.insert(name.clone(), blended);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/attributes.rs"]
mod tests;
