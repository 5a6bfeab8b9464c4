use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const VISIBILITY_VISIBLE: &str = "visible";
pub const VISIBILITY_NONE: &str = "none";

/// A basemap style document.
///
/// Only `layers[].id` and `layers[].layout.visibility` are inspected or
/// mutated here; every other field is owned by the style's author and is
/// preserved untouched through a parse → rewrite → serialize cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    #[serde(default)]
    pub layers: Vec<StyleLayer>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleLayer {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StyleLayer {
    pub fn visibility(&self) -> Option<&str> {
        self.layout.as_ref()?.get("visibility")?.as_str()
    }

    pub fn set_visibility(&mut self, visibility: &str) {
        self.layout.get_or_insert_with(Map::new).insert(
            "visibility".to_string(),
            Value::String(visibility.to_string()),
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    Parse(String),
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::Parse(msg) => write!(f, "style document parse failed: {msg}"),
        }
    }
}

impl std::error::Error for StyleError {}

pub fn parse_style(raw: &str) -> Result<StyleDocument, StyleError> {
    serde_json::from_str(raw).map_err(|e| StyleError::Parse(e.to_string()))
}
