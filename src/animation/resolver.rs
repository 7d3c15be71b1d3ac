use crate::animation::key::KeyPosition;
use crate::foundation::core::ParentSize;

/// Anchor overrides and window bracket resolved for one interpolation call.
///
/// Overrides replace the position anchors fed to the path interpolator;
/// width/height anchors are never touched by position keyframes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PositionWindow {
    /// Window start on the 0–100 timeline; 0 when no previous keyframe.
    pub start_frame: u32,
    /// Window end on the 0–100 timeline; 100 when no next keyframe.
    pub end_frame: u32,
    /// Absolute-pixel override for the start anchor.
    pub start_anchor: Option<(f64, f64)>,
    /// Absolute-pixel override for the end anchor.
    pub end_anchor: Option<(f64, f64)>,
}

impl PositionWindow {
    /// Re-derive the local progress fed to the path interpolator.
    ///
    /// The window is searched with the rounded frame number, but the numerator
    /// uses unrounded `progress * 100` so motion stays continuous instead of
    /// quantizing to whole-percent steps. A degenerate window (end <= start)
    /// falls back to the raw global progress rather than dividing by zero.
    pub fn local_progress(&self, progress: f64) -> f64 {
        if self.end_frame <= self.start_frame {
            tracing::debug!(
                start = self.start_frame,
                end = self.end_frame,
                "degenerate keyframe window; falling back to global progress"
            );
            return progress;
        }
        let span = f64::from(self.end_frame - self.start_frame);
        (progress * 100.0 - f64::from(self.start_frame)) / span
    }
}

/// Find the enclosing `[previous, next]` keyframe window for a frame number.
///
/// `positions` must be filtered to the requested widget and sorted by frame
/// (see the per-widget curve memo). Returns `None` when no keyframe matches,
/// in which case global progress and the original anchors pass through
/// unchanged. When previous and next resolve to the identical keyframe the
/// next side is treated as absent.
pub(crate) fn resolve_window(
    positions: &[KeyPosition],
    frame_number: i32,
    parent: ParentSize,
) -> Option<PositionWindow> {
    if positions.is_empty() {
        return None;
    }

    let mut previous: Option<usize> = None;
    let mut next: Option<usize> = None;
    for (i, key) in positions.iter().enumerate() {
        if i32::try_from(key.frame).unwrap_or(i32::MAX) <= frame_number {
            previous = Some(i);
        }
        if next.is_none() && i32::try_from(key.frame).unwrap_or(i32::MAX) >= frame_number {
            next = Some(i);
        }
    }
    if previous == next {
        next = None;
    }

    let anchor = |idx: usize| -> (f64, f64) {
        let key = &positions[idx];
        (
            f64::from(key.x) * f64::from(parent.width),
            f64::from(key.y) * f64::from(parent.height),
        )
    };

    let mut window = PositionWindow {
        start_frame: 0,
        end_frame: 100,
        start_anchor: None,
        end_anchor: None,
    };
    if let Some(i) = previous {
        window.start_frame = positions[i].frame;
        window.start_anchor = Some(anchor(i));
    }
    if let Some(i) = next {
        window.end_frame = positions[i].frame;
        window.end_anchor = Some(anchor(i));
    }
    Some(window)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/resolver.rs"]
mod tests;
