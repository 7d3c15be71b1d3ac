//! Kinema is a keyframe-driven 2D motion interpolation engine.
//!
//! Given a widget's bounds and transform attributes at a start and an end
//! state, plus an ordered set of optional keyframe overrides, it computes the
//! fully interpolated geometric/visual state at any requested progress. The
//! surrounding motion framework calls it once per animation frame; everything
//! else (view attachment, attribute parsing, gesture routing) is
//! orchestration around that call.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: keyframe window + anchor overrides for the requested
//!    progress (`KeyframeSet` -> window-local progress)
//! 2. **Path**: position/size along a straight line or quarter-ellipse arc
//!    (`PathMode`)
//! 3. **Blend**: remaining scalar transform fields and custom attributes,
//!    with default substitution for unset endpoints
//! 4. **Write**: result lands in the caller-owned output [`FrameSnapshot`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce bit-identical output; the
//!   engine keeps no hidden mutable state that affects results.
//! - **Total**: `interpolate` never fails for in-range numeric inputs;
//!   malformed keyframe windows degrade to plain linear interpolation.
//! - **Single-threaded**: call-and-return on the animation/render thread; the
//!   only shared mutable resources are the caller-owned output snapshot and
//!   the external [`KeyCache`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod blend;
mod engine;
mod foundation;
mod frame;
mod path;

pub use animation::easing::Easing;
pub use animation::key::{
    KeyAttribute, KeyCycle, KeyPosition, KeyTarget, KeyTimeCycle, KeyTrigger, Keyframe,
    KeyframeSet,
};
pub use blend::attributes::blend_color;
pub use engine::cache::KeyCache;
pub use engine::motion::MotionEngine;
pub use foundation::core::{Color, ParentSize, Point, Vec2, Visibility, WidgetId};
pub use foundation::error::{KinemaError, KinemaResult};
pub use frame::snapshot::{FrameSnapshot, MotionWidget};
pub use path::interpolator::PathMode;
