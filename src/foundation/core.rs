use crate::foundation::error::{KinemaError, KinemaResult};

pub use kurbo::{Point, Vec2};

/// Stable widget identity used for keyframe targeting and cache keys.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct WidgetId(pub String);

impl WidgetId {
    /// Build an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Widget visibility at a motion endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Visibility {
    /// Drawn and occupying space.
    #[default]
    Visible,
    /// Occupying space but not drawn.
    Invisible,
    /// Contributing no space; triggers collapse-to-opposite-endpoint geometry
    /// during interpolation.
    Gone,
}

/// Straight (non-premultiplied) RGBA color, channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Build a color from channel values.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Dimensions of the containing area, used to convert fractional keyframe
/// coordinates to absolute pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParentSize {
    /// Container width in pixels.
    pub width: i32,
    /// Container height in pixels.
    pub height: i32,
}

impl ParentSize {
    /// Build a parent size; dimensions must be non-negative.
    pub fn new(width: i32, height: i32) -> KinemaResult<Self> {
        if width < 0 || height < 0 {
            return Err(KinemaError::validation("ParentSize must be non-negative"));
        }
        Ok(Self { width, height })
    }
}
