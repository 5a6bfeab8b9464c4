use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property bag of a picked feature.
///
/// Overlay data sources are opaque remote GeoJSON/vector-tile endpoints;
/// each feature's `properties` object arrives as-is. Typed accessors return
/// `None` for missing keys and for values of the wrong shape — absent data
/// is never an error at this level.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(Map<String, Value>);

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a parsed JSON value; anything but an object yields an empty map.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Numeric property. Tile pipelines stringify numbers inconsistently, so
    /// numeric strings are accepted as well.
    pub fn f64(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Property rendered as display text: strings pass through, numbers and
    /// booleans are formatted.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Property holding nested JSON, either inline or encoded as a string
    /// (vector-tile attributes flatten nested values to strings).
    pub fn json(&self, key: &str) -> Option<Value> {
        match self.0.get(key)? {
            Value::String(s) => serde_json::from_str(s).ok(),
            v @ (Value::Object(_) | Value::Array(_)) => Some(v.clone()),
            _ => None,
        }
    }
}
