use std::collections::BTreeMap;

use crate::foundation::core::{Color, Visibility, WidgetId};

/// Live widget handle consumed by [`FrameSnapshot::capture_from`].
///
/// Implemented by the view layer; the engine only reads through it and never
/// retains the handle itself.
pub trait MotionWidget {
    /// Stable identity of the widget.
    fn id(&self) -> WidgetId;
    /// Current layout bounds as `(left, top, right, bottom)` in pixels.
    fn bounds(&self) -> (i32, i32, i32, i32);
    /// Current Z rotation in degrees, if the widget has one applied.
    fn rotation(&self) -> Option<f32>;
}

/// Point-in-time geometric and visual state of a widget.
///
/// Transform fields are `Option<f32>`: `None` means "unset" and is distinct
/// from every valid value. Unset fields are substituted with field-specific
/// defaults at blend time, never before, so a snapshot round-trips without
/// losing which fields were actually specified.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSnapshot {
    /// Back-reference to the originating widget, used for identity and
    /// keyframe lookup only.
    #[serde(default)]
    pub widget: Option<WidgetId>,

    /// Left edge in pixels.
    pub left: i32,
    /// Top edge in pixels.
    pub top: i32,
    /// Right edge in pixels.
    pub right: i32,
    /// Bottom edge in pixels.
    pub bottom: i32,

    /// Pivot x as a fraction of width; blend default 0.5.
    #[serde(default)]
    pub pivot_x: Option<f32>,
    /// Pivot y as a fraction of height; blend default 0.5.
    #[serde(default)]
    pub pivot_y: Option<f32>,
    /// Rotation around the x axis in degrees; blend default 0.
    #[serde(default)]
    pub rotation_x: Option<f32>,
    /// Rotation around the y axis in degrees; blend default 0.
    #[serde(default)]
    pub rotation_y: Option<f32>,
    /// Rotation around the z axis in degrees; blend default 0.
    #[serde(default)]
    pub rotation_z: Option<f32>,
    /// Translation along x in pixels; blend default 0.
    #[serde(default)]
    pub translation_x: Option<f32>,
    /// Translation along y in pixels; blend default 0.
    #[serde(default)]
    pub translation_y: Option<f32>,
    /// Translation along z (elevation) in pixels; blend default 0.
    #[serde(default)]
    pub translation_z: Option<f32>,
    /// Horizontal scale factor; blend default 1.
    #[serde(default)]
    pub scale_x: Option<f32>,
    /// Vertical scale factor; blend default 1.
    #[serde(default)]
    pub scale_y: Option<f32>,
    /// Opacity in `[0, 1]`; blend default 1, so an endpoint with no explicit
    /// opacity is treated as fully visible.
    #[serde(default)]
    pub alpha: Option<f32>,

    /// Visibility at this endpoint.
    #[serde(default)]
    pub visibility: Visibility,

    /// Named custom colors carried alongside the transform.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_colors: BTreeMap<String, Color>,
    /// Named custom floats carried alongside the transform.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_floats: BTreeMap<String, f32>,
}

impl FrameSnapshot {
    /// Empty snapshot with zero bounds and every transform field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given bounds and every transform field unset.
    pub fn with_bounds(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            ..Self::default()
        }
    }

    /// Replace the pixel bounds.
    pub fn set_bounds(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
    }

    /// Width in pixels. May be transiently negative during a GONE collapse;
    /// the engine still terminates and produces finite values.
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Horizontal center in pixels.
    pub fn center_x(&self) -> f32 {
        self.left as f32 + (self.right - self.left) as f32 / 2.0
    }

    /// Vertical center in pixels.
    pub fn center_y(&self) -> f32 {
        self.top as f32 + (self.bottom - self.top) as f32 / 2.0
    }

    /// Copy live geometry and rotation from an external widget handle.
    pub fn capture_from(&mut self, widget: &impl MotionWidget) {
        let (left, top, right, bottom) = widget.bounds();
        self.set_bounds(left, top, right, bottom);
        self.widget = Some(widget.id());
        self.rotation_z = widget.rotation();
    }

    /// Deep-copy another snapshot, including custom attribute maps.
    pub fn copy_from(&mut self, other: &FrameSnapshot) {
        *self = other.clone();
    }

    /// True iff every transform field except pivot is unset.
    ///
    /// Callers use this to skip transform application when only position and
    /// size changed.
    pub fn is_default_transform(&self) -> bool {
        self.rotation_x.is_none()
            && self.rotation_y.is_none()
            && self.rotation_z.is_none()
            && self.translation_x.is_none()
            && self.translation_y.is_none()
            && self.translation_z.is_none()
            && self.scale_x.is_none()
            && self.scale_y.is_none()
            && self.alpha.is_none()
    }

    /// Attach or replace a named custom color.
    pub fn set_custom_color(&mut self, name: impl Into<String>, color: Color) {
        self.custom_colors.insert(name.into(), color);
    }

    /// Look up a named custom color.
    pub fn custom_color(&self, name: &str) -> Option<Color> {
        self.custom_colors.get(name).copied()
    }

    /// Attach or replace a named custom float.
    pub fn set_custom_float(&mut self, name: impl Into<String>, value: f32) {
        self.custom_floats.insert(name.into(), value);
    }

    /// Look up a named custom float.
    pub fn custom_float(&self, name: &str) -> Option<f32> {
        self.custom_floats.get(name).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/snapshot.rs"]
mod tests;
