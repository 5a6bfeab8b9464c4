use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use camera::ViewState;
use camera::fragment::{self, FragmentDecode};
use features::PickedFeature;
use foundation::units::UnitSystem;
use overlays::registry;
use overlays::store::OverlayStore;
use style::session::{Applied, LoadStep, StyleSession};
use tooltip::content::FeatureDetails;
use tooltip::render::summary_lines;

#[derive(Parser)]
#[command(name = "trailguide", about = "Trail-guide map viewer shell")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a basemap style, applying the allow-list and unit rewrite.
    Style {
        /// Style document URL; anything off the allow-list falls back to
        /// the default style.
        #[arg(long, default_value = style::catalog::default_url())]
        url: String,

        /// Show metric contours and elevations.
        #[arg(long)]
        metric: bool,
    },

    /// Decode a `#zoom/latitude/longitude/bearing/pitch` URL fragment.
    View { fragment: String },

    /// List the overlay registry with its defaults.
    Overlays,

    /// Render the tooltip card for a GeoJSON feature file.
    Tooltip {
        /// Layer id selecting the card template (e.g. nationalpark_fill).
        #[arg(long)]
        layer: String,

        /// Path to a GeoJSON feature.
        #[arg(long)]
        feature: PathBuf,

        #[arg(long)]
        metric: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Style { url, metric } => load_style(&url, units_for(metric)).await,
        Command::View { fragment } => decode_fragment(&fragment),
        Command::Overlays => {
            list_overlays();
            Ok(())
        }
        Command::Tooltip {
            layer,
            feature,
            metric,
        } => render_tooltip(&layer, &feature, units_for(metric)).await,
    }
}

fn units_for(metric: bool) -> UnitSystem {
    if metric {
        UnitSystem::Metric
    } else {
        UnitSystem::Imperial
    }
}

async fn load_style(url: &str, units: UnitSystem) -> Result<(), Box<dyn Error>> {
    let mut session = StyleSession::new(units);

    let doc = match session.request_style(url)? {
        LoadStep::Ready(doc) => doc,
        LoadStep::Fetch {
            token,
            url: resolved,
        } => {
            if resolved != url {
                warn!("unrecognized style url, substituting {resolved}");
            }
            info!("fetching style {resolved}");
            let body = reqwest::Client::new()
                .get(resolved)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            match session.complete_load(token, body)? {
                Applied::Style(doc) => doc,
                Applied::Stale => {
                    warn!("style response superseded before it applied");
                    return Ok(());
                }
            }
        }
    };

    info!("style ready: {} layers", doc.layers.len());
    for id in style::units::METRIC_LAYER_IDS
        .iter()
        .chain(style::units::IMPERIAL_LAYER_IDS)
    {
        if let Some(layer) = doc.layers.iter().find(|l| l.id == **id) {
            println!("{:<24} {}", layer.id, layer.visibility().unwrap_or("visible"));
        }
    }
    Ok(())
}

fn decode_fragment(raw: &str) -> Result<(), Box<dyn Error>> {
    let view = match fragment::decode(raw) {
        FragmentDecode::View(view) => view,
        FragmentDecode::NoFragment => {
            info!("no fragment present, using the default view");
            ViewState::default()
        }
        FragmentDecode::Invalid => {
            warn!("malformed fragment, clearing it and using the default view");
            ViewState::default()
        }
    };
    println!("{}", serde_json::to_string_pretty(&view)?);
    println!("fragment: {}", fragment::encode(&view));
    Ok(())
}

fn list_overlays() {
    let store = OverlayStore::new();
    for overlay in registry::registry() {
        let drawn = match store.draw_opacity(overlay.id) {
            Some(opacity) => format!("drawn at {opacity:.2}"),
            None => "hidden".to_string(),
        };
        println!(
            "{:<20} {:<8} {:<12} {}",
            overlay.id,
            format!("{:?}", overlay.kind).to_lowercase(),
            drawn,
            overlay.source_url,
        );
    }
    println!(
        "\npickable vector layers: {}",
        registry::interactive_layer_ids().join(", ")
    );
    println!("\nslope angle legend:");
    for (label, [r, g, b]) in registry::SLOPE_ANGLE_LEGEND {
        println!("  {label:<8} rgb({r}, {g}, {b})");
    }
}

async fn render_tooltip(
    layer: &str,
    path: &PathBuf,
    units: UnitSystem,
) -> Result<(), Box<dyn Error>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let feature: PickedFeature = serde_json::from_str(&raw)?;

    let Some(details) = FeatureDetails::from_feature(layer, &feature) else {
        warn!("layer {layer} has no tooltip template");
        return Ok(());
    };
    for line in summary_lines(&details, units) {
        println!("{line}");
    }
    Ok(())
}
