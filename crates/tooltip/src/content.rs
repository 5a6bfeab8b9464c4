use features::PickedFeature;
use picking::TooltipTarget;

/// Tooltip content, selected by the exact layer id of the pick.
///
/// Each variant carries only the properties its card renders, every one
/// optional: a property missing from the source data is omitted from the
/// card, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureDetails {
    Photo(PhotoCard),
    CurrentWildfire(CurrentWildfireCard),
    NationalPark(NationalParkCard),
    NationalForest(NationalForestCard),
    Wilderness(WildernessCard),
    HistoricalWildfire(HistoricalWildfireCard),
    Wikipedia(WikipediaCard),
    Transit(TransitCard),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PhotoCard {
    /// Keys the image file: `photos/{id}.jpeg`.
    pub image_id: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CurrentWildfireCard {
    pub incident_name: Option<String>,
    pub updated: Option<String>,
    /// Estimated burned area, rounded to whole acres.
    pub acres: Option<i64>,
}

/// First entry of a park's NPS image carousel.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NpsImage {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub credit: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NationalParkCard {
    pub full_name: Option<String>,
    pub trail_meters: Option<f64>,
    pub url: Option<String>,
    pub wiki_url: Option<String>,
    pub description: Option<String>,
    pub weather_info: Option<String>,
    pub directions_info: Option<String>,
    pub image: Option<NpsImage>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NationalForestCard {
    pub forest_name: Option<String>,
    pub trail_meters: Option<f64>,
    pub official_url: Option<String>,
    pub wiki_url: Option<String>,
    pub wiki_image: Option<String>,
    pub wiki_summary: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WildernessCard {
    pub name: Option<String>,
    pub trail_meters: Option<f64>,
    pub url: Option<String>,
    pub wiki_url: Option<String>,
    pub description: Option<String>,
    pub wiki_summary: Option<String>,
    pub year_designated: Option<String>,
    pub wiki_image: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct HistoricalWildfireCard {
    pub name: Option<String>,
    pub year: Option<String>,
    pub trail_meters: Option<f64>,
    pub inciweb_url: Option<String>,
    pub wiki_url: Option<String>,
    pub wiki_summary: Option<String>,
    pub wiki_image: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WikipediaCard {
    pub title: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
    pub best_image: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Vehicle {
    Bus,
    Rail,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransitCard {
    pub name: Option<String>,
    pub vehicle: Option<Vehicle>,
    pub operator: Option<String>,
    pub route_url: Option<String>,
}

impl FeatureDetails {
    pub fn from_target(target: &TooltipTarget) -> Option<Self> {
        Self::from_feature(&target.layer_id, &target.feature)
    }

    /// Fills the card for `layer_id`; `None` for layers without a tooltip
    /// template.
    pub fn from_feature(layer_id: &str, feature: &PickedFeature) -> Option<Self> {
        let p = &feature.properties;
        let details = match layer_id {
            "photos" => Self::Photo(PhotoCard {
                image_id: feature.id.clone(),
                date: p.text("date"),
                description: p.str("description").map(str::to_owned),
            }),
            "nifc_current" => Self::CurrentWildfire(CurrentWildfireCard {
                incident_name: p.str("IncidentNa").map(title_case),
                updated: p.text("DateCurren"),
                acres: p.f64("GISAcres").map(|a| a.round() as i64),
            }),
            "nationalpark_fill" => Self::NationalPark(NationalParkCard {
                full_name: p.str("fullName").map(str::to_owned),
                trail_meters: p.f64("length"),
                url: p.str("url").map(str::to_owned),
                wiki_url: p.str("wiki_url").map(str::to_owned),
                description: p.str("description").map(str::to_owned),
                weather_info: p.str("weatherInfo").map(str::to_owned),
                directions_info: p.str("directionsInfo").map(str::to_owned),
                image: first_nps_image(p),
            }),
            "nationalforest_fill" => Self::NationalForest(NationalForestCard {
                forest_name: p.str("forestname").map(str::to_owned),
                trail_meters: p.f64("length"),
                official_url: p.str("official_url").map(str::to_owned),
                wiki_url: p.str("wiki_url").map(str::to_owned),
                wiki_image: p.str("wiki_image").map(str::to_owned),
                wiki_summary: p.str("wiki_summary").map(str::to_owned),
            }),
            "wilderness_fill" => Self::Wilderness(WildernessCard {
                name: p.str("name").map(str::to_owned),
                trail_meters: p.f64("length"),
                url: p.str("url").map(str::to_owned),
                wiki_url: p.str("wiki_url").map(str::to_owned),
                // The source data truncates this attribute name.
                description: p.str("descriptio").map(str::to_owned),
                wiki_summary: p.str("wiki_summary").map(str::to_owned),
                year_designated: p.text("yeardesign"),
                wiki_image: p.str("wiki_image").map(str::to_owned),
            }),
            "wildfire_historical_fill" => Self::HistoricalWildfire(HistoricalWildfireCard {
                name: p.str("name").map(str::to_owned),
                year: p.text("year"),
                trail_meters: p.f64("length"),
                inciweb_url: p
                    .str("inciwebid")
                    .map(|id| format!("https://inciweb.nwcg.gov/incident/{id}")),
                wiki_url: p.str("wiki_url").map(str::to_owned),
                wiki_summary: p.str("wiki_summary").map(str::to_owned),
                wiki_image: p.str("wiki_image").map(str::to_owned),
            }),
            "wikipedia" => Self::Wikipedia(WikipediaCard {
                title: p.str("title").map(str::to_owned),
                url: p.str("url").map(str::to_owned),
                summary: p.str("summary").map(str::to_owned),
                best_image: p.str("best_image").map(str::to_owned),
            }),
            "transit_routes" => Self::Transit(TransitCard {
                name: p.str("name").map(title_case),
                vehicle: match p.str("vehicle_type") {
                    Some("bus") => Some(Vehicle::Bus),
                    Some("rail") => Some(Vehicle::Rail),
                    _ => None,
                },
                operator: p.str("operated_by_name").map(str::to_owned),
                route_url: p
                    .json("tags")
                    .and_then(|tags| tags.get("route_url")?.as_str().map(str::to_owned)),
            }),
            _ => return None,
        };
        Some(details)
    }
}

fn first_nps_image(p: &features::PropertyMap) -> Option<NpsImage> {
    let images = p.json("images")?;
    let first = images.as_array()?.first()?;
    Some(NpsImage {
        url: first.get("url").and_then(|v| v.as_str()).map(str::to_owned),
        alt: first
            .get("altText")
            .and_then(|v| v.as_str())
            .map(str::to_owned),
        credit: first
            .get("credit")
            .and_then(|v| v.as_str())
            .map(str::to_owned),
    })
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(|c| c.to_lowercase()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{FeatureDetails, Vehicle, title_case};
    use features::PickedFeature;
    use serde_json::json;

    fn feature(layer: &str, properties: serde_json::Value) -> PickedFeature {
        serde_json::from_value(json!({
            "properties": properties,
            "source_layer": layer,
        }))
        .expect("feature")
    }

    #[test]
    fn unknown_layers_have_no_template() {
        let f = feature("contour_ft", json!({ "ele": 8000 }));
        assert_eq!(FeatureDetails::from_feature("contour_ft", &f), None);
    }

    #[test]
    fn wildfire_card_rounds_acreage() {
        let f = feature(
            "nifc_current",
            json!({ "IncidentNa": "CREEK", "GISAcres": 153738.6 }),
        );
        let Some(FeatureDetails::CurrentWildfire(card)) =
            FeatureDetails::from_feature("nifc_current", &f)
        else {
            panic!("expected wildfire card");
        };
        assert_eq!(card.incident_name.as_deref(), Some("Creek"));
        assert_eq!(card.acres, Some(153739));
        assert_eq!(card.updated, None);
    }

    #[test]
    fn park_card_reads_the_first_nps_image() {
        let f = feature(
            "nationalpark_fill",
            json!({
                "fullName": "Yosemite National Park",
                "length": 16093.4,
                "images": "[{\"url\":\"https://nps.example/1.jpg\",\"credit\":\"NPS\"},{\"url\":\"https://nps.example/2.jpg\"}]",
            }),
        );
        let Some(FeatureDetails::NationalPark(card)) =
            FeatureDetails::from_feature("nationalpark_fill", &f)
        else {
            panic!("expected park card");
        };
        assert_eq!(card.trail_meters, Some(16093.4));
        let image = card.image.expect("image");
        assert_eq!(image.url.as_deref(), Some("https://nps.example/1.jpg"));
        assert_eq!(image.credit.as_deref(), Some("NPS"));
        assert_eq!(card.description, None);
    }

    #[test]
    fn transit_card_parses_the_tags_payload() {
        let f = feature(
            "transit_routes",
            json!({
                "name": "YARTS HIGHWAY 140",
                "vehicle_type": "bus",
                "operated_by_name": "Yosemite Area Regional Transportation System",
                "tags": "{\"route_url\":\"https://yarts.example/140\"}",
            }),
        );
        let Some(FeatureDetails::Transit(card)) =
            FeatureDetails::from_feature("transit_routes", &f)
        else {
            panic!("expected transit card");
        };
        assert_eq!(card.name.as_deref(), Some("Yarts Highway 140"));
        assert_eq!(card.vehicle, Some(Vehicle::Bus));
        assert_eq!(card.route_url.as_deref(), Some("https://yarts.example/140"));
    }

    #[test]
    fn historical_fire_links_inciweb() {
        let f = feature(
            "wildfire_historical_fill",
            json!({ "name": "Rim", "year": 2013, "inciwebid": "3660" }),
        );
        let Some(FeatureDetails::HistoricalWildfire(card)) =
            FeatureDetails::from_feature("wildfire_historical_fill", &f)
        else {
            panic!("expected historical wildfire card");
        };
        assert_eq!(
            card.inciweb_url.as_deref(),
            Some("https://inciweb.nwcg.gov/incident/3660")
        );
        assert_eq!(card.year.as_deref(), Some("2013"));
    }

    #[test]
    fn target_layer_selects_the_template() {
        let target = picking::TooltipTarget {
            feature: feature("wikipedia", json!({ "title": "Mount Whitney" })),
            layer_id: "wikipedia".to_string(),
            anchor: foundation::screen::ScreenPoint::new(12.0, 40.0),
            pinned: false,
        };
        let Some(FeatureDetails::Wikipedia(card)) = FeatureDetails::from_target(&target) else {
            panic!("expected wikipedia card");
        };
        assert_eq!(card.title.as_deref(), Some("Mount Whitney"));
    }

    #[test]
    fn title_case_matches_the_card_headers() {
        assert_eq!(title_case("CREEK"), "Creek");
        assert_eq!(title_case("el dorado"), "El Dorado");
    }
}
