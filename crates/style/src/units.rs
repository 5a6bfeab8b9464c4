use foundation::units::UnitSystem;

use crate::document::{StyleDocument, VISIBILITY_NONE, VISIBILITY_VISIBLE};

/// Layer ids showing metric measurements, paired 1:1 by role with
/// `IMPERIAL_LAYER_IDS`. The source styles ship with the metric set hidden
/// and the imperial set visible.
pub static METRIC_LAYER_IDS: &[&str] = &[
    "contour_index_m",
    "contour_m",
    "contour_label_m",
    "poi_saddle_m",
    "poi_peak_rank1_m",
    "poi_volcano_rank1_m",
];

pub static IMPERIAL_LAYER_IDS: &[&str] = &[
    "contour_index_ft",
    "contour_ft",
    "contour_label_ft",
    "poi_saddle_ft",
    "poi_peak_rank1_ft",
    "poi_volcano_rank1_ft",
];

/// Rewrites layer visibility for the requested unit system.
///
/// Imperial is the baseline baked into the source styles, so requesting it
/// leaves the document untouched; metric flips each pair.
pub fn apply_unit_visibility(style: &mut StyleDocument, units: UnitSystem) {
    if units != UnitSystem::Metric {
        return;
    }

    for layer in &mut style.layers {
        if METRIC_LAYER_IDS.contains(&layer.id.as_str()) {
            layer.set_visibility(VISIBILITY_VISIBLE);
        } else if IMPERIAL_LAYER_IDS.contains(&layer.id.as_str()) {
            layer.set_visibility(VISIBILITY_NONE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IMPERIAL_LAYER_IDS, METRIC_LAYER_IDS, apply_unit_visibility};
    use crate::document::parse_style;
    use foundation::units::UnitSystem;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fixture() -> crate::document::StyleDocument {
        parse_style(
            &json!({
                "layers": [
                    { "id": "contour_m", "layout": { "visibility": "none" } },
                    { "id": "contour_ft", "layout": { "visibility": "visible" } },
                    { "id": "water", "layout": { "visibility": "visible" } },
                    { "id": "poi_peak_rank1_ft" },
                ],
            })
            .to_string(),
        )
        .expect("fixture")
    }

    #[test]
    fn metric_flips_each_pair() {
        let mut doc = fixture();
        apply_unit_visibility(&mut doc, UnitSystem::Metric);
        assert_eq!(doc.layers[0].visibility(), Some("visible"));
        assert_eq!(doc.layers[1].visibility(), Some("none"));
        assert_eq!(doc.layers[2].visibility(), Some("visible"));
        // A layer without a layout object gains one.
        assert_eq!(doc.layers[3].visibility(), Some("none"));
    }

    #[test]
    fn imperial_leaves_the_document_alone() {
        let mut doc = fixture();
        let before = doc.clone();
        apply_unit_visibility(&mut doc, UnitSystem::Imperial);
        assert_eq!(doc, before);
    }

    #[test]
    fn pairs_line_up_by_role() {
        assert_eq!(METRIC_LAYER_IDS.len(), IMPERIAL_LAYER_IDS.len());
        for (m, ft) in METRIC_LAYER_IDS.iter().zip(IMPERIAL_LAYER_IDS) {
            assert_eq!(
                m.strip_suffix("_m").unwrap(),
                ft.strip_suffix("_ft").unwrap()
            );
        }
    }
}
