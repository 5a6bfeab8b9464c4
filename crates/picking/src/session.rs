use features::PickedFeature;
use foundation::screen::ScreenPoint;

use crate::resolve::{OverlayHitReport, PickConfig, PickHit, RenderedFeature, resolve_pick};

/// The feature the active tooltip describes.
///
/// At most one exists at a time. An unpinned target is replaced or cleared
/// by the next pointer event; a pinned one survives until a click toggles
/// it back or it is explicitly dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipTarget {
    pub feature: PickedFeature,
    pub layer_id: String,
    pub anchor: ScreenPoint,
    pub pinned: bool,
}

/// Drives pick resolution across pointer events and owns the active
/// tooltip target.
///
/// The renderer query is supplied per event as a closure taking the window
/// center and half-width, mirroring how the renderer's spatial index is
/// consulted; this keeps the crate free of renderer bindings. The closure
/// is only invoked when the GPU overlay engine did not already claim the
/// event.
#[derive(Debug)]
pub struct PickSession {
    config: PickConfig,
    allow_list: Vec<&'static str>,
    tooltip: Option<TooltipTarget>,
}

impl PickSession {
    /// Session over the registry's interactive vector-tile layers.
    pub fn new(config: PickConfig) -> Self {
        Self::with_allow_list(config, overlays::registry::interactive_layer_ids())
    }

    pub fn with_allow_list(config: PickConfig, allow_list: Vec<&'static str>) -> Self {
        Self {
            config,
            allow_list,
            tooltip: None,
        }
    }

    pub fn tooltip(&self) -> Option<&TooltipTarget> {
        self.tooltip.as_ref()
    }

    pub fn is_pinned(&self) -> bool {
        self.tooltip.as_ref().is_some_and(|t| t.pinned)
    }

    /// Pointer hover.
    ///
    /// Skipped entirely while a tooltip is pinned. A resolved hit replaces
    /// the target (unpinned); a miss clears it.
    pub fn on_hover<F>(&mut self, at: ScreenPoint, overlay: OverlayHitReport, query_rendered: F)
    where
        F: FnOnce(ScreenPoint, f64) -> Vec<RenderedFeature>,
    {
        if at.is_ui_sentinel() || self.is_pinned() {
            return;
        }

        self.tooltip = self
            .resolve(at, overlay, query_rendered)
            .map(|hit| target_from(hit, at, false));
    }

    /// Pointer click.
    ///
    /// A successful pick toggles the pinned flag: clicking while unpinned
    /// pins the hit, clicking while pinned unpins (the new hit still
    /// replaces the target). A miss clears the target unless it is pinned.
    pub fn on_click<F>(&mut self, at: ScreenPoint, overlay: OverlayHitReport, query_rendered: F)
    where
        F: FnOnce(ScreenPoint, f64) -> Vec<RenderedFeature>,
    {
        if at.is_ui_sentinel() {
            return;
        }

        match self.resolve(at, overlay, query_rendered) {
            Some(hit) => {
                let pinned = !self.is_pinned();
                self.tooltip = Some(target_from(hit, at, pinned));
            }
            None => {
                if !self.is_pinned() {
                    self.tooltip = None;
                }
            }
        }
    }

    /// Explicit dismissal, the pinned card's close affordance.
    pub fn dismiss(&mut self) {
        self.tooltip = None;
    }

    fn resolve<F>(
        &self,
        at: ScreenPoint,
        overlay: OverlayHitReport,
        query_rendered: F,
    ) -> Option<PickHit>
    where
        F: FnOnce(ScreenPoint, f64) -> Vec<RenderedFeature>,
    {
        let rendered = if overlay.is_hit() {
            Vec::new()
        } else {
            query_rendered(at, self.config.radius_px)
        };
        resolve_pick(overlay, rendered, &self.allow_list)
    }
}

fn target_from(hit: PickHit, anchor: ScreenPoint, pinned: bool) -> TooltipTarget {
    TooltipTarget {
        feature: hit.feature,
        layer_id: hit.layer_id,
        anchor,
        pinned,
    }
}

#[cfg(test)]
mod tests {
    use super::PickSession;
    use crate::resolve::{OverlayHitReport, PickConfig, RenderedFeature};
    use features::PickedFeature;
    use foundation::screen::ScreenPoint;

    fn session() -> PickSession {
        PickSession::with_allow_list(
            PickConfig::default(),
            vec!["nationalpark_fill", "wilderness_fill"],
        )
    }

    fn park() -> Vec<RenderedFeature> {
        vec![RenderedFeature::new(
            "nationalpark_fill",
            PickedFeature::new("nationalpark_fill"),
        )]
    }

    fn photo_hit() -> OverlayHitReport {
        OverlayHitReport::hit(PickedFeature::new("photos"), "photos")
    }

    #[test]
    fn hover_sets_then_clears() {
        let mut s = session();
        s.on_hover(ScreenPoint::new(10.0, 10.0), OverlayHitReport::miss(), |_, _| park());
        assert_eq!(s.tooltip().unwrap().layer_id, "nationalpark_fill");
        assert!(!s.is_pinned());

        s.on_hover(ScreenPoint::new(11.0, 10.0), OverlayHitReport::miss(), |_, _| Vec::new());
        assert!(s.tooltip().is_none());
    }

    #[test]
    fn sentinel_coordinates_touch_nothing() {
        let mut s = session();
        s.on_hover(ScreenPoint::new(10.0, 10.0), OverlayHitReport::miss(), |_, _| park());

        let mut queried = false;
        s.on_hover(ScreenPoint::new(-1.0, 240.0), photo_hit(), |_, _| {
            queried = true;
            Vec::new()
        });
        s.on_click(ScreenPoint::new(300.0, -1.0), photo_hit(), |_, _| Vec::new());

        assert!(!queried);
        assert_eq!(s.tooltip().unwrap().layer_id, "nationalpark_fill");
    }

    #[test]
    fn renderer_is_not_queried_when_the_overlay_engine_hits() {
        let mut s = session();
        let mut queried = false;
        s.on_hover(ScreenPoint::new(50.0, 50.0), photo_hit(), |_, _| {
            queried = true;
            park()
        });
        assert!(!queried);
        assert_eq!(s.tooltip().unwrap().layer_id, "photos");
    }

    #[test]
    fn click_pins_and_click_again_unpins() {
        let mut s = session();
        s.on_click(ScreenPoint::new(10.0, 10.0), OverlayHitReport::miss(), |_, _| park());
        assert!(s.is_pinned());

        // Hover is inert while pinned, even over nothing.
        let mut queried = false;
        s.on_hover(ScreenPoint::new(500.0, 500.0), OverlayHitReport::miss(), |_, _| {
            queried = true;
            Vec::new()
        });
        assert!(!queried);
        assert!(s.tooltip().is_some());

        // A click miss keeps the pinned tooltip.
        s.on_click(ScreenPoint::new(500.0, 500.0), OverlayHitReport::miss(), |_, _| Vec::new());
        assert!(s.is_pinned());

        // A second successful click unpins.
        s.on_click(ScreenPoint::new(10.0, 10.0), OverlayHitReport::miss(), |_, _| park());
        assert!(!s.is_pinned());
        assert!(s.tooltip().is_some());
    }

    #[test]
    fn click_miss_clears_when_unpinned() {
        let mut s = session();
        s.on_hover(ScreenPoint::new(10.0, 10.0), OverlayHitReport::miss(), |_, _| park());
        s.on_click(ScreenPoint::new(400.0, 400.0), OverlayHitReport::miss(), |_, _| Vec::new());
        assert!(s.tooltip().is_none());
    }

    #[test]
    fn dismiss_clears_a_pinned_tooltip() {
        let mut s = session();
        s.on_click(ScreenPoint::new(10.0, 10.0), OverlayHitReport::miss(), |_, _| park());
        assert!(s.is_pinned());
        s.dismiss();
        assert!(s.tooltip().is_none());
    }
}
