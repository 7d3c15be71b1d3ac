use crate::foundation::core::WidgetId;
use crate::foundation::error::{KinemaError, KinemaResult};

/// Which widgets a keyframe applies to.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum KeyTarget {
    /// Wildcard: applies to every widget in the motion scene.
    Any,
    /// Applies only to the widget with this id.
    Widget(WidgetId),
}

impl KeyTarget {
    /// True when this target selects the given widget.
    pub fn matches(&self, id: &WidgetId) -> bool {
        match self {
            Self::Any => true,
            Self::Widget(w) => w == id,
        }
    }
}

/// Pins the motion path to a fractional point at a timeline percentage.
///
/// `x`/`y` are fractions of the parent container's width/height; `frame` is a
/// position on the 0–100 percentage-scale timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyPosition {
    /// Timeline position, 0–100.
    pub frame: u32,
    /// Widget selector.
    pub target: KeyTarget,
    /// Fractional x relative to parent width.
    pub x: f32,
    /// Fractional y relative to parent height.
    pub y: f32,
}

/// Raw attribute overrides anchored at a timeline percentage.
///
/// Consumed by the attribute-curve extension layer; the core resolver carries
/// these through without interpreting the payload.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyAttribute {
    /// Timeline position, 0–100.
    pub frame: u32,
    /// Widget selector.
    pub target: KeyTarget,
    /// Raw attribute payload.
    pub values: serde_json::Value,
}

/// Oscillation anchored at a timeline percentage (extension point).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyCycle {
    /// Timeline position, 0–100.
    pub frame: u32,
    /// Widget selector.
    pub target: KeyTarget,
    /// Wave period in cycles over the transition; must be positive.
    pub wave_period: f32,
    /// Wave offset added to the oscillated value.
    pub wave_offset: f32,
}

/// Wall-clock-driven oscillation anchored at a timeline percentage
/// (extension point).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyTimeCycle {
    /// Timeline position, 0–100.
    pub frame: u32,
    /// Widget selector.
    pub target: KeyTarget,
    /// Wave period in cycles per second; must be positive.
    pub wave_period: f32,
    /// Wave offset added to the oscillated value.
    pub wave_offset: f32,
}

/// Fires a named event when the timeline crosses its frame (extension point).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyTrigger {
    /// Timeline position, 0–100.
    pub frame: u32,
    /// Widget selector.
    pub target: KeyTarget,
    /// Event identifier delivered to the orchestration layer.
    pub event: String,
}

/// Closed set of keyframe kinds attached to a motion session.
///
/// Only [`Keyframe::Position`] participates in core interpolation; the other
/// kinds are validated and carried for the extension layers that consume them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Keyframe {
    /// Position override on the motion path.
    Position(KeyPosition),
    /// Attribute overrides (extension point).
    Attribute(KeyAttribute),
    /// Progress-driven oscillation (extension point).
    Cycle(KeyCycle),
    /// Time-driven oscillation (extension point).
    TimeCycle(KeyTimeCycle),
    /// Timeline event trigger (extension point).
    Trigger(KeyTrigger),
}

impl Keyframe {
    /// Timeline position, 0–100.
    pub fn frame(&self) -> u32 {
        match self {
            Self::Position(k) => k.frame,
            Self::Attribute(k) => k.frame,
            Self::Cycle(k) => k.frame,
            Self::TimeCycle(k) => k.frame,
            Self::Trigger(k) => k.frame,
        }
    }

    /// Widget selector.
    pub fn target(&self) -> &KeyTarget {
        match self {
            Self::Position(k) => &k.target,
            Self::Attribute(k) => &k.target,
            Self::Cycle(k) => &k.target,
            Self::TimeCycle(k) => &k.target,
            Self::Trigger(k) => &k.target,
        }
    }

    fn validate(&self) -> KinemaResult<()> {
        if self.frame() > 100 {
            return Err(KinemaError::keyframe("keyframe frame must be in 0..=100"));
        }
        match self {
            Self::Position(k) => {
                if !k.x.is_finite() || !k.y.is_finite() {
                    return Err(KinemaError::keyframe("KeyPosition x/y must be finite"));
                }
            }
            Self::Cycle(k) => {
                if !(k.wave_period > 0.0) {
                    return Err(KinemaError::keyframe("KeyCycle wave_period must be > 0"));
                }
            }
            Self::TimeCycle(k) => {
                if !(k.wave_period > 0.0) {
                    return Err(KinemaError::keyframe("KeyTimeCycle wave_period must be > 0"));
                }
            }
            Self::Attribute(_) | Self::Trigger(_) => {}
        }
        Ok(())
    }
}

/// Ordered set of keyframes for one motion session, immutable once the
/// session is configured.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyframeSet {
    keys: Vec<Keyframe>,
}

impl KeyframeSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list of keyframes. Insertion order need not be
    /// sorted; per-widget curves are sorted when first resolved.
    pub fn from_keys(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    /// Append a keyframe.
    pub fn push(&mut self, key: Keyframe) {
        self.keys.push(key);
    }

    /// Number of keyframes of any kind.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when no keyframes are attached.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over all keyframes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Keyframe> {
        self.keys.iter()
    }

    /// Validate every keyframe (frame range, finite coordinates, wave
    /// periods).
    pub fn validate(&self) -> KinemaResult<()> {
        for key in &self.keys {
            key.validate()?;
        }
        Ok(())
    }

    /// Position keyframes matching a widget, sorted by frame index.
    pub(crate) fn positions_for(&self, id: &WidgetId) -> Vec<KeyPosition> {
        let mut positions: Vec<KeyPosition> = self
            .keys
            .iter()
            .filter_map(|key| match key {
                Keyframe::Position(p) if p.target.matches(id) => Some(p.clone()),
                Keyframe::Position(_)
                | Keyframe::Attribute(_)
                | Keyframe::Cycle(_)
                | Keyframe::TimeCycle(_)
                | Keyframe::Trigger(_) => None,
            })
            .collect();
        positions.sort_by_key(|p| p.frame);
        positions
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/key.rs"]
mod tests;
