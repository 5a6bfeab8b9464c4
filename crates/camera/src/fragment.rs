use crate::view_state::ViewState;

/// Outcome of decoding a URL fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum FragmentDecode {
    View(ViewState),

    /// Nothing `#`-prefixed was present; callers use the default view.
    NoFragment,

    /// At least one segment failed numeric parsing. No view state is
    /// produced; the caller must clear the fragment from the address bar
    /// and fall back to the default on the next render.
    Invalid,
}

/// Decodes `#zoom/latitude/longitude/bearing/pitch`.
///
/// Notes:
/// - Trailing segments may be omitted and take their defaults; empty
///   segments do the same.
/// - Segments beyond the fifth are ignored.
/// - Validity is all-or-nothing: a single malformed segment rejects the
///   whole fragment.
pub fn decode(fragment: &str) -> FragmentDecode {
    let Some(body) = fragment.strip_prefix('#') else {
        return FragmentDecode::NoFragment;
    };

    let defaults = ViewState::default();
    let mut values = [
        defaults.zoom,
        defaults.latitude,
        defaults.longitude,
        defaults.bearing,
        defaults.pitch,
    ];

    for (slot, segment) in values.iter_mut().zip(body.split('/')) {
        if segment.is_empty() {
            continue;
        }
        match segment.parse::<f64>() {
            Ok(v) if v.is_finite() => *slot = v,
            _ => return FragmentDecode::Invalid,
        }
    }

    let [zoom, latitude, longitude, bearing, pitch] = values;
    FragmentDecode::View(ViewState {
        bearing,
        pitch,
        zoom,
        latitude,
        longitude,
    })
}

/// Encodes a view state so that `decode` round-trips all five numbers.
pub fn encode(view: &ViewState) -> String {
    format!(
        "#{}/{}/{}/{}/{}",
        view.zoom, view.latitude, view.longitude, view.bearing, view.pitch
    )
}
