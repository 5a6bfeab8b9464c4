use std::collections::BTreeMap;

use crate::overlay::OverlayId;
use crate::registry;

/// Load state of an overlay's remote source.
///
/// The rendering libraries fetch their own tiles; completion callbacks
/// report the result here so the shell can surface sources that never
/// arrived.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SourceStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlayState {
    pub visible: bool,
    pub opacity: f32,
    pub status: SourceStatus,
}

/// Single source of truth for per-overlay visibility and opacity.
///
/// Notes:
/// - Visibility and opacity are independent gates: opacity 0 with
///   `visible = true` is a valid state (nothing shows, the toggle stays on),
///   and a hidden overlay keeps its opacity for when it is re-enabled.
/// - Mutation happens only through the setters; renderers read through
///   `draw_opacity`.
#[derive(Debug)]
pub struct OverlayStore {
    states: BTreeMap<OverlayId, OverlayState>,
}

impl OverlayStore {
    /// Seeds every registry overlay with its descriptor defaults.
    pub fn new() -> Self {
        let states = registry::registry()
            .iter()
            .map(|o| {
                (
                    o.id,
                    OverlayState {
                        visible: o.default_visible,
                        opacity: o.default_opacity,
                        status: SourceStatus::Loading,
                    },
                )
            })
            .collect();
        Self { states }
    }

    pub fn state(&self, id: OverlayId) -> Option<OverlayState> {
        self.states.get(&id).copied()
    }

    /// Flips visibility; no other state is touched.
    ///
    /// Returns the new visibility, or `None` for an unknown overlay.
    pub fn toggle_visible(&mut self, id: OverlayId) -> Option<bool> {
        let state = self.states.get_mut(&id)?;
        state.visible = !state.visible;
        Some(state.visible)
    }

    /// Sets opacity, clamping out-of-range input to [0, 1].
    pub fn set_opacity(&mut self, id: OverlayId, value: f32) {
        if let Some(state) = self.states.get_mut(&id) {
            state.opacity = value.clamp(0.0, 1.0);
        }
    }

    /// Opacity to draw with, or `None` when the overlay must not draw at
    /// all.
    ///
    /// `Some(0.0)` is possible: the visibility gate is open but the opacity
    /// gate shut.
    pub fn draw_opacity(&self, id: OverlayId) -> Option<f32> {
        let state = self.states.get(&id)?;
        state.visible.then_some(state.opacity)
    }

    pub fn set_status(&mut self, id: OverlayId, status: SourceStatus) {
        if let Some(state) = self.states.get_mut(&id) {
            state.status = status;
        }
    }

    /// Overlays whose source failed to load, in id order.
    pub fn degraded(&self) -> Vec<OverlayId> {
        self.states
            .iter()
            .filter(|(_, s)| s.status == SourceStatus::Failed)
            .map(|(id, _)| *id)
            .collect()
    }
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{OverlayStore, SourceStatus};
    use crate::registry::{AIR_QUALITY, NATIONAL_PARK, PHOTOS, TRAIL};

    #[test]
    fn opacity_clamps_instead_of_rejecting() {
        let mut store = OverlayStore::new();
        store.set_opacity(NATIONAL_PARK, 1.7);
        assert_eq!(store.state(NATIONAL_PARK).unwrap().opacity, 1.0);
        store.set_opacity(NATIONAL_PARK, -0.3);
        assert_eq!(store.state(NATIONAL_PARK).unwrap().opacity, 0.0);
    }

    #[test]
    fn visibility_and_opacity_gate_independently() {
        let mut store = OverlayStore::new();

        // Visible at 5%: still draws, just faint.
        store.toggle_visible(AIR_QUALITY);
        store.set_opacity(AIR_QUALITY, 0.05);
        assert_eq!(store.draw_opacity(AIR_QUALITY), Some(0.05));

        // Opaque but hidden: does not draw.
        store.set_opacity(NATIONAL_PARK, 0.8);
        assert_eq!(store.draw_opacity(NATIONAL_PARK), None);

        // Hiding does not clobber opacity.
        store.toggle_visible(AIR_QUALITY);
        assert_eq!(store.draw_opacity(AIR_QUALITY), None);
        assert_eq!(store.state(AIR_QUALITY).unwrap().opacity, 0.05);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut store = OverlayStore::new();
        let was_visible = store.state(PHOTOS).unwrap().visible;
        assert_eq!(store.toggle_visible(PHOTOS), Some(!was_visible));
        assert_eq!(store.toggle_visible(PHOTOS), Some(was_visible));
    }

    #[test]
    fn failed_sources_are_reported() {
        let mut store = OverlayStore::new();
        assert!(store.degraded().is_empty());
        store.set_status(TRAIL, SourceStatus::Failed);
        store.set_status(PHOTOS, SourceStatus::Ready);
        assert_eq!(store.degraded(), vec![TRAIL]);
    }
}
