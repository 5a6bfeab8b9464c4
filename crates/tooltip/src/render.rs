use foundation::units::{UnitSystem, trail_length_label};

use crate::content::{FeatureDetails, Vehicle};

/// Plain-text rendering of a card: header first, then meta and body lines.
///
/// Absent fields are omitted, so a card never renders an empty slot; an
/// entirely empty property bag yields an empty card.
pub fn summary_lines(details: &FeatureDetails, units: UnitSystem) -> Vec<String> {
    let mut lines = Vec::new();
    let mut push = |line: Option<String>| lines.extend(line);

    match details {
        FeatureDetails::Photo(card) => {
            push(card.image_id.as_ref().map(|id| format!("photos/{id}.jpeg")));
            push(card.date.clone());
            push(card.description.clone());
        }
        FeatureDetails::CurrentWildfire(card) => {
            push(card.incident_name.as_ref().map(|n| format!("{n} Fire")));
            push(card.updated.as_ref().map(|d| format!("Updated {d}")));
            push(card
                .acres
                .map(|a| format!("This fire is estimated to be {a} acres.")));
            push(Some("Fire boundaries may not be current.".to_string()));
        }
        FeatureDetails::NationalPark(card) => {
            push(card.full_name.clone());
            push(card.trail_meters.map(|m| trail_length_label(m, units)));
            push(card.url.clone());
            push(card.wiki_url.clone());
            push(card.description.clone());
            push(card.weather_info.clone());
            push(card.directions_info.clone());
            push(
                card.image
                    .as_ref()
                    .and_then(|i| i.credit.as_ref())
                    .map(|c| format!("Photo © {c}")),
            );
        }
        FeatureDetails::NationalForest(card) => {
            push(card.forest_name.clone());
            push(card.trail_meters.map(|m| trail_length_label(m, units)));
            push(card.official_url.clone());
            push(card.wiki_url.clone());
            push(card.wiki_summary.clone());
        }
        FeatureDetails::Wilderness(card) => {
            push(card.name.clone());
            push(card.trail_meters.map(|m| trail_length_label(m, units)));
            push(card
                .year_designated
                .as_ref()
                .map(|y| format!("Designated in {y}")));
            push(card.url.clone());
            push(card.wiki_url.clone());
            push(card.description.clone());
            push(card.wiki_summary.clone());
        }
        FeatureDetails::HistoricalWildfire(card) => {
            push(card.name.as_ref().map(|n| format!("{n} Fire")));
            push(card.year.clone());
            push(card.trail_meters.map(|m| trail_length_label(m, units)));
            push(card.inciweb_url.clone());
            push(card.wiki_url.clone());
            push(card.wiki_summary.clone());
        }
        FeatureDetails::Wikipedia(card) => {
            push(card.title.clone());
            push(card.url.clone());
            push(card.summary.clone());
        }
        FeatureDetails::Transit(card) => {
            push(match (card.vehicle, card.name.as_ref()) {
                (Some(Vehicle::Bus), Some(n)) => Some(format!("(bus) {n}")),
                (Some(Vehicle::Rail), Some(n)) => Some(format!("(rail) {n}")),
                (None, Some(n)) => Some(n.clone()),
                (_, None) => None,
            });
            push(card.operator.clone());
            push(card.route_url.clone());
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::summary_lines;
    use crate::content::{FeatureDetails, NationalParkCard, PhotoCard, WildernessCard};
    use foundation::units::UnitSystem;

    #[test]
    fn trail_length_follows_the_unit_flag() {
        let details = FeatureDetails::NationalPark(NationalParkCard {
            full_name: Some("Yosemite National Park".to_string()),
            trail_meters: Some(16093.4),
            ..NationalParkCard::default()
        });

        let imperial = summary_lines(&details, UnitSystem::Imperial);
        assert_eq!(imperial, vec!["Yosemite National Park", "10 trail miles"]);

        let metric = summary_lines(&details, UnitSystem::Metric);
        assert_eq!(metric[1], "16 trail kilometers");
    }

    #[test]
    fn missing_fields_are_simply_omitted() {
        let details = FeatureDetails::Wilderness(WildernessCard {
            name: Some("Ansel Adams Wilderness".to_string()),
            ..WildernessCard::default()
        });
        assert_eq!(
            summary_lines(&details, UnitSystem::Imperial),
            vec!["Ansel Adams Wilderness"]
        );

        let empty = FeatureDetails::Photo(PhotoCard::default());
        assert!(summary_lines(&empty, UnitSystem::Imperial).is_empty());
    }
}
