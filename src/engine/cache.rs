use std::collections::HashMap;

use crate::animation::key::{KeyPosition, KeyframeSet};
use crate::foundation::core::WidgetId;

/// Caller-owned memo of per-widget motion curves.
///
/// The engine never constructs one implicitly: the calling animation session
/// owns the cache, passes it by reference into every `interpolate` call, and
/// decides its lifetime. An entry is populated lazily on the first
/// interpolation for a given widget and reused for the rest of the session.
#[derive(Clone, Debug, Default)]
pub struct KeyCache {
    curves: HashMap<WidgetId, CurveMemo>,
}

/// Resolved per-widget curve: position keyframes filtered by target id (or
/// wildcard) and sorted by frame index.
#[derive(Clone, Debug)]
pub(crate) struct CurveMemo {
    pub positions: Vec<KeyPosition>,
}

impl KeyCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of widgets with a cached curve.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// True when no curve has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Drop all cached curves; they are rebuilt on the next interpolation.
    pub fn clear(&mut self) {
        self.curves.clear();
    }

    pub(crate) fn curve_for(&mut self, id: &WidgetId, keys: &KeyframeSet) -> &CurveMemo {
        self.curves
            .entry(id.clone())
            .or_insert_with(|| CurveMemo {
                positions: keys.positions_for(id),
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/cache.rs"]
mod tests;
