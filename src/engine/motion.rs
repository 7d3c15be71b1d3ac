use crate::animation::easing::Easing;
use crate::animation::key::KeyframeSet;
use crate::animation::resolver::resolve_window;
use crate::blend::attributes::{blend_attributes, gone_adjusted};
use crate::engine::cache::KeyCache;
use crate::foundation::core::ParentSize;
use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::round_half_up;
use crate::frame::snapshot::FrameSnapshot;
use crate::path::interpolator::{PathMode, interpolate_bounds};

/// Composition root of the interpolation engine.
///
/// Owns the start/end snapshots, the keyframe set, path mode and duration for
/// one motion session. Snapshots are captured once at configuration and are
/// immutable for the session, so the engine can be queried out of order
/// (scrubbing, repeated measurement passes) and always produces the same
/// output for the same progress.
#[derive(Clone, Debug)]
pub struct MotionEngine {
    start: FrameSnapshot,
    end: FrameSnapshot,
    keyframes: KeyframeSet,
    path_mode: PathMode,
    easing: Option<Easing>,
    parent: ParentSize,
    duration_ms: u64,
    last: Option<FrameSnapshot>,
}

impl MotionEngine {
    /// Configure a motion session.
    ///
    /// Validates the keyframe set and the duration; this is the only fallible
    /// step of the engine. Interpolation afterwards is total.
    pub fn configure(
        start: FrameSnapshot,
        end: FrameSnapshot,
        keyframes: KeyframeSet,
        path_mode: PathMode,
        parent: ParentSize,
        duration_ms: u64,
    ) -> KinemaResult<Self> {
        keyframes.validate()?;
        if duration_ms == 0 {
            return Err(KinemaError::validation("duration_ms must be > 0"));
        }
        Ok(Self {
            start,
            end,
            keyframes,
            path_mode,
            easing: None,
            parent,
            duration_ms,
            last: None,
        })
    }

    /// Shape global progress through a named easing curve.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = Some(easing);
    }

    /// Start snapshot of the session.
    pub fn start(&self) -> &FrameSnapshot {
        &self.start
    }

    /// End snapshot of the session.
    pub fn end(&self) -> &FrameSnapshot {
        &self.end
    }

    /// Path mode of the session.
    pub fn path_mode(&self) -> PathMode {
        self.path_mode
    }

    /// Session duration in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Raw progress for an elapsed wall-clock time since the session started.
    ///
    /// Not clamped: callers scrubbing or overshooting decide their own policy.
    pub fn progress_at(&self, elapsed_nanos: u64) -> f32 {
        (elapsed_nanos as f64 / (self.duration_ms as f64 * 1_000_000.0)) as f32
    }

    /// Compute the fully interpolated state at `progress` into `out`.
    ///
    /// Returns `true` when the produced state differs from the previous call's
    /// output, so callers can skip repaints. The first call always reports a
    /// change. `time_nanos` is the caller's animation clock; the core records
    /// it for tracing and leaves time-driven keyframe kinds to the extension
    /// layer. Progress outside `[0, 1]` extrapolates geometry and transforms
    /// but clamps custom colors.
    #[tracing::instrument(skip(self, out, cache))]
    pub fn interpolate(
        &mut self,
        out: &mut FrameSnapshot,
        progress: f32,
        time_nanos: u64,
        cache: &mut KeyCache,
    ) -> bool {
        let p = match self.easing {
            Some(easing) => easing.apply(f64::from(progress)),
            None => f64::from(progress),
        };

        let (mut start_pose, mut end_pose, start_alpha, end_alpha) =
            gone_adjusted(&self.start, &self.end);

        // Position keyframes re-anchor the path and re-normalize progress
        // within their window; width/height keep the global progress.
        let mut pos_t = p;
        if !self.keyframes.is_empty() {
            if let Some(id) = self.start.widget.as_ref() {
                let curve = cache.curve_for(id, &self.keyframes);
                let frame_number = round_half_up(p * 100.0);
                if let Some(window) = resolve_window(&curve.positions, frame_number, self.parent) {
                    if let Some((x, y)) = window.start_anchor {
                        start_pose.x = x;
                        start_pose.y = y;
                    }
                    if let Some((x, y)) = window.end_anchor {
                        end_pose.x = x;
                        end_pose.y = y;
                    }
                    pos_t = window.local_progress(p);
                }
            }
        }

        let (left, top, right, bottom) =
            interpolate_bounds(self.path_mode, &start_pose, &end_pose, pos_t, p);

        out.widget = self.start.widget.clone();
        out.set_bounds(left, top, right, bottom);
        blend_attributes(out, &self.start, &self.end, start_alpha, end_alpha, p);

        tracing::trace!(time_nanos, left, top, right, bottom, "sampled motion frame");

        let changed = self.last.as_ref() != Some(out);
        if changed {
            self.last = Some(out.clone());
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/motion.rs"]
mod tests;
