use crate::overlay::{Overlay, OverlayId, OverlayKind, OverlayStyle, RenderSystem};

pub const TRAIL: OverlayId = OverlayId("trail");
pub const PHOTOS: OverlayId = OverlayId("photos");
pub const AIR_QUALITY: OverlayId = OverlayId("air_quality");
pub const CURRENT_WILDFIRE: OverlayId = OverlayId("nifc_current");
pub const WIKIPEDIA: OverlayId = OverlayId("wikipedia");
pub const NATIONAL_PARK: OverlayId = OverlayId("nationalpark");
pub const NATIONAL_FOREST: OverlayId = OverlayId("nationalforest");
pub const WILDERNESS: OverlayId = OverlayId("wilderness");
pub const HISTORICAL_WILDFIRE: OverlayId = OverlayId("wildfire_historical");
pub const SLOPE_ANGLE: OverlayId = OverlayId("slope_angle");
pub const TRANSIT: OverlayId = OverlayId("transit");

/// Every overlay the viewer composes, GPU-drawn point/polygon layers first,
/// then the vector-tile and raster layers.
static REGISTRY: &[Overlay] = &[
    Overlay {
        id: PHOTOS,
        source_url: "https://tiles.nst.guide/photos/index.geojson",
        kind: OverlayKind::Point,
        renderer: RenderSystem::GpuOverlay,
        pick_layer: Some("photos"),
        sub_layers: &["photos"],
        default_visible: true,
        default_opacity: 1.0,
        style: OverlayStyle::new([0.07, 0.0, 0.96, 0.78], None),
    },
    Overlay {
        id: AIR_QUALITY,
        source_url: "https://tiles.nst.guide/airnow/current.geojson",
        kind: OverlayKind::Polygon,
        renderer: RenderSystem::GpuOverlay,
        pick_layer: None,
        sub_layers: &["air_quality"],
        default_visible: false,
        default_opacity: 0.4,
        style: OverlayStyle::new([0.0, 0.8, 0.2, 0.6], None),
    },
    Overlay {
        id: CURRENT_WILDFIRE,
        source_url: "https://tiles.nst.guide/nifc/current.geojson",
        kind: OverlayKind::Polygon,
        renderer: RenderSystem::GpuOverlay,
        pick_layer: Some("nifc_current"),
        sub_layers: &["nifc_current"],
        default_visible: false,
        default_opacity: 0.6,
        style: OverlayStyle::new([0.92, 0.25, 0.1, 0.7], Some([0.6, 0.1, 0.0, 1.0])),
    },
    Overlay {
        id: WIKIPEDIA,
        source_url: "https://tiles.nst.guide/wikipedia/index.geojson",
        kind: OverlayKind::Point,
        renderer: RenderSystem::GpuOverlay,
        pick_layer: Some("wikipedia"),
        sub_layers: &["wikipedia"],
        default_visible: false,
        default_opacity: 1.0,
        style: OverlayStyle::new([0.2, 0.2, 0.2, 0.9], None),
    },
    Overlay {
        id: TRAIL,
        source_url: "https://tiles.nst.guide/pct/hmline/tile.json",
        kind: OverlayKind::Line,
        renderer: RenderSystem::VectorTile,
        pick_layer: None,
        sub_layers: &["hmline_line_pct", "hmline_line_alt", "hmline_label"],
        default_visible: true,
        default_opacity: 1.0,
        style: OverlayStyle::new([0.92, 0.2, 0.14, 0.78], Some([0.0, 0.15, 0.96, 0.78])),
    },
    Overlay {
        id: NATIONAL_PARK,
        source_url: "https://tiles.nst.guide/nationalpark/tile.json",
        kind: OverlayKind::Polygon,
        renderer: RenderSystem::VectorTile,
        pick_layer: Some("nationalpark_fill"),
        sub_layers: &[
            "nationalpark_fill",
            "nationalpark_outline",
            "nationalpark_label",
        ],
        default_visible: false,
        default_opacity: 0.6,
        style: OverlayStyle::new([0.45, 0.3, 0.15, 1.0], Some([0.15, 0.1, 0.05, 1.0])),
    },
    Overlay {
        id: NATIONAL_FOREST,
        source_url: "https://tiles.nst.guide/pct/nationalforest/tile.json",
        kind: OverlayKind::Polygon,
        renderer: RenderSystem::VectorTile,
        pick_layer: Some("nationalforest_fill"),
        sub_layers: &[
            "nationalforest_fill",
            "nationalforest_outline",
            "nationalforest_label",
        ],
        default_visible: false,
        default_opacity: 0.6,
        style: OverlayStyle::new([0.8, 0.78, 0.0, 1.0], Some([0.2, 0.2, 0.0, 1.0])),
    },
    Overlay {
        id: WILDERNESS,
        source_url: "https://tiles.nst.guide/pct/wilderness/tile.json",
        kind: OverlayKind::Polygon,
        renderer: RenderSystem::VectorTile,
        pick_layer: Some("wilderness_fill"),
        sub_layers: &["wilderness_fill", "wilderness_outline", "wilderness_label"],
        default_visible: false,
        default_opacity: 0.6,
        style: OverlayStyle::new([0.29, 0.5, 0.0, 1.0], Some([0.1, 0.17, 0.0, 1.0])),
    },
    Overlay {
        id: HISTORICAL_WILDFIRE,
        source_url: "https://tiles.nst.guide/pct/wildfire_historical/tile.json",
        kind: OverlayKind::Polygon,
        renderer: RenderSystem::VectorTile,
        pick_layer: Some("wildfire_historical_fill"),
        sub_layers: &[
            "wildfire_historical_fill",
            "wildfire_historical_outline",
            "wildfire_historical_label",
        ],
        default_visible: false,
        default_opacity: 0.6,
        style: OverlayStyle::new([0.6, 0.07, 0.0, 1.0], Some([0.6, 0.07, 0.0, 1.0])),
    },
    Overlay {
        id: SLOPE_ANGLE,
        source_url: "https://tiles.nst.guide/slope-angle-png/tile.json",
        kind: OverlayKind::Raster,
        renderer: RenderSystem::VectorTile,
        pick_layer: None,
        sub_layers: &["slope_angle_raster"],
        default_visible: false,
        default_opacity: 0.35,
        style: OverlayStyle::new([1.0, 1.0, 1.0, 1.0], None),
    },
    Overlay {
        id: TRANSIT,
        source_url: "https://tiles.nst.guide/pct/transit/tile.json",
        kind: OverlayKind::Line,
        renderer: RenderSystem::VectorTile,
        pick_layer: Some("transit_routes"),
        sub_layers: &[
            "transit_routes_casing",
            "transit_routes",
            "transit_stops",
            "transit_routes_label",
        ],
        default_visible: false,
        default_opacity: 1.0,
        style: OverlayStyle::new([0.28, 0.6, 1.0, 1.0], Some([0.0, 0.0, 0.0, 1.0])),
    },
];

pub fn registry() -> &'static [Overlay] {
    REGISTRY
}

pub fn overlay(id: OverlayId) -> Option<&'static Overlay> {
    REGISTRY.iter().find(|o| o.id == id)
}

pub fn overlay_by_name(name: &str) -> Option<&'static Overlay> {
    REGISTRY.iter().find(|o| o.id.as_str() == name)
}

/// Vector-tile layer ids allowed to produce picks.
///
/// Basemap layers and decorative sub-layers (outlines, labels) are excluded;
/// GPU overlays are not listed because that engine hit-tests its own
/// primitives.
pub fn interactive_layer_ids() -> Vec<&'static str> {
    REGISTRY
        .iter()
        .filter(|o| o.renderer == RenderSystem::VectorTile)
        .filter_map(|o| o.pick_layer)
        .collect()
}

/// Slope-angle shading buckets, steepest last, as (label, srgb) pairs.
pub static SLOPE_ANGLE_LEGEND: &[(&str, [u8; 3])] = &[
    ("27°-29°", [248, 253, 85]),
    ("30°-31°", [241, 184, 64]),
    ("32°-34°", [238, 128, 49]),
    ("35°-45°", [235, 51, 35]),
    ("46°-50°", [122, 41, 217]),
    ("51°-59°", [0, 38, 245]),
    ("60°+", [0, 0, 0]),
];

#[cfg(test)]
mod tests {
    use super::{interactive_layer_ids, overlay, overlay_by_name, registry, NATIONAL_PARK};
    use crate::overlay::RenderSystem;

    #[test]
    fn ids_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for o in registry() {
            assert!(seen.insert(o.id), "duplicate overlay id {}", o.id);
        }
    }

    #[test]
    fn pick_allow_list_is_vector_tile_only() {
        let ids = interactive_layer_ids();
        assert!(ids.contains(&"nationalpark_fill"));
        assert!(ids.contains(&"transit_routes"));
        assert!(!ids.contains(&"photos"));
        assert!(!ids.contains(&"nationalpark_label"));
    }

    #[test]
    fn lookup_by_id_and_name_agree() {
        let a = overlay(NATIONAL_PARK).expect("registry entry");
        let b = overlay_by_name("nationalpark").expect("name lookup");
        assert_eq!(a, b);
        assert_eq!(a.renderer, RenderSystem::VectorTile);
        assert!(a.interactive());
    }
}
