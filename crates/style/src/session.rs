use std::collections::BTreeMap;

use foundation::units::UnitSystem;

use crate::catalog;
use crate::document::{StyleDocument, StyleError, parse_style};
use crate::units::apply_unit_visibility;

/// Identifies one outstanding style-load request.
///
/// Tokens increase monotonically and each new request invalidates the one
/// before it, so style switching is last-request-wins rather than
/// last-response-wins.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

/// Next action for a requested style.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStep {
    /// Produced from the cached raw document; no fetch needed.
    Ready(StyleDocument),

    /// Fetch `url` and hand the body to `complete_load` with this token.
    Fetch {
        token: RequestToken,
        url: &'static str,
    },
}

/// Outcome of handing a fetched body back to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Style(StyleDocument),

    /// A newer request superseded this one; the response was dropped.
    Stale,
}

/// Style loading and unit rewriting for one viewer.
///
/// Notes:
/// - Requested URLs are resolved against the catalog allow-list first; an
///   off-list URL silently becomes the default style.
/// - Raw documents are cached per URL. A unit toggle re-processes the
///   cached text and only returns to the network when nothing is cached.
#[derive(Debug)]
pub struct StyleSession {
    raw_cache: BTreeMap<&'static str, String>,
    units: UnitSystem,
    active_url: &'static str,
    next_token: u64,
    pending: Option<(RequestToken, &'static str)>,
}

impl StyleSession {
    pub fn new(units: UnitSystem) -> Self {
        Self {
            raw_cache: BTreeMap::new(),
            units,
            active_url: catalog::default_url(),
            next_token: 0,
            pending: None,
        }
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// URL of the style most recently requested (post-substitution).
    pub fn active_url(&self) -> &'static str {
        self.active_url
    }

    /// Starts switching to `url`.
    ///
    /// Any in-flight fetch is invalidated, whether the new style is served
    /// from cache or needs a fetch of its own.
    pub fn request_style(&mut self, url: &str) -> Result<LoadStep, StyleError> {
        let url = catalog::sanitize_url(url);
        self.active_url = url;

        if let Some(raw) = self.raw_cache.get(url) {
            let doc = process(raw, self.units)?;
            self.pending = None;
            return Ok(LoadStep::Ready(doc));
        }

        let token = RequestToken(self.next_token);
        self.next_token += 1;
        self.pending = Some((token, url));
        Ok(LoadStep::Fetch { token, url })
    }

    /// Applies a fetched style body if its token is still the latest.
    ///
    /// Bodies that fail to parse are not cached.
    pub fn complete_load(
        &mut self,
        token: RequestToken,
        raw: String,
    ) -> Result<Applied, StyleError> {
        let Some((expected, url)) = self.pending else {
            return Ok(Applied::Stale);
        };
        if token != expected {
            return Ok(Applied::Stale);
        }

        let doc = process(&raw, self.units)?;
        self.raw_cache.insert(url, raw);
        self.pending = None;
        Ok(Applied::Style(doc))
    }

    /// Switches the unit system and re-processes the active style.
    ///
    /// The cached raw document is rewritten in place; a fetch is requested
    /// only when no raw document is cached for the active URL.
    pub fn set_units(&mut self, units: UnitSystem) -> Result<LoadStep, StyleError> {
        self.units = units;
        self.request_style(self.active_url)
    }
}

impl Default for StyleSession {
    fn default() -> Self {
        Self::new(UnitSystem::default())
    }
}

fn process(raw: &str, units: UnitSystem) -> Result<StyleDocument, StyleError> {
    let mut doc = parse_style(raw)?;
    apply_unit_visibility(&mut doc, units);
    Ok(doc)
}
