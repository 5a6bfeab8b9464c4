use features::PickedFeature;

/// A feature returned by the vector-tile renderer's spatial query.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFeature {
    pub layer_id: String,
    pub feature: PickedFeature,
}

impl RenderedFeature {
    pub fn new(layer_id: impl Into<String>, feature: PickedFeature) -> Self {
        Self {
            layer_id: layer_id.into(),
            feature,
        }
    }
}

/// Raw hit report from the GPU overlay engine.
///
/// The engine hit-tests its own primitives and reports the picked object
/// and its owning layer independently; only a report carrying both counts
/// as a hit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OverlayHitReport {
    pub feature: Option<PickedFeature>,
    pub layer_id: Option<String>,
}

impl OverlayHitReport {
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn hit(feature: PickedFeature, layer_id: impl Into<String>) -> Self {
        Self {
            feature: Some(feature),
            layer_id: Some(layer_id.into()),
        }
    }

    pub fn is_hit(&self) -> bool {
        self.feature.is_some() && self.layer_id.is_some()
    }

    fn into_hit(self) -> Option<(PickedFeature, String)> {
        Some((self.feature?, self.layer_id?))
    }
}

/// Which rendering system produced a resolved pick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PickSource {
    GpuOverlay,
    VectorTile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub feature: PickedFeature,
    pub layer_id: String,
    pub source: PickSource,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickConfig {
    /// Half-width in pixels of the square window queried against the
    /// vector-tile renderer.
    pub radius_px: f64,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self { radius_px: 5.0 }
    }
}

/// Resolves one pointer event to at most one feature across the two
/// rendering systems.
///
/// Ordering contract:
/// - A GPU overlay hit (object and owning layer both present) wins
///   unconditionally; the renderer results are not consulted.
/// - Otherwise the first rendered feature whose layer id is on the
///   allow-list wins, in the renderer's own topmost-first order. No
///   additional tie-break is applied.
/// - `None` means the pointer is over nothing interactive.
pub fn resolve_pick(
    overlay: OverlayHitReport,
    rendered: Vec<RenderedFeature>,
    allow_list: &[&str],
) -> Option<PickHit> {
    if let Some((feature, layer_id)) = overlay.into_hit() {
        return Some(PickHit {
            feature,
            layer_id,
            source: PickSource::GpuOverlay,
        });
    }

    rendered
        .into_iter()
        .find(|r| allow_list.contains(&r.layer_id.as_str()))
        .map(|r| PickHit {
            feature: r.feature,
            layer_id: r.layer_id,
            source: PickSource::VectorTile,
        })
}
