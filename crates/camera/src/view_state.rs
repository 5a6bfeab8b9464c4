use serde::{Deserialize, Serialize};

/// Camera parameters describing what part of the map is visible.
///
/// Validity is all-or-nothing: a view state either has five well-formed
/// numbers or it does not exist (see `fragment::decode`).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub bearing: f64,
    pub pitch: f64,
    pub zoom: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for ViewState {
    /// Initial camera over the Sierra high country.
    fn default() -> Self {
        Self {
            bearing: 0.0,
            pitch: 0.0,
            zoom: 8.0,
            latitude: 37.8759,
            longitude: -119.3629,
        }
    }
}
