use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::properties::PropertyMap;

/// A feature resolved from a pointer event.
///
/// Transient: one instance exists per pointer event and is replaced or
/// cleared by the next event (unless a pinned tooltip keeps it alive).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickedFeature {
    /// Feature id where the source assigns one (photo features key their
    /// image file by id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Geometry exactly as the source encoded it; never interpreted here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,

    #[serde(default)]
    pub properties: PropertyMap,

    /// Id of the source layer the renderer attributed this feature to.
    #[serde(default)]
    pub source_layer: String,
}

impl PickedFeature {
    pub fn new(source_layer: impl Into<String>) -> Self {
        Self {
            source_layer: source_layer.into(),
            ..Self::default()
        }
    }

    pub fn with_properties(source_layer: impl Into<String>, properties: PropertyMap) -> Self {
        Self {
            properties,
            ..Self::new(source_layer)
        }
    }
}
