/// Sidebar accordion sections, one per overlay group plus the style and
/// unit pickers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    MapStyle,
    MapUnits,
    Photos,
    AirQuality,
    CurrentWildfire,
    SlopeAngle,
    LandManagement,
    Transit,
}

/// Expansion state of the "Map Options" sidebar.
///
/// Sub-sections are mutually exclusive: expanding one collapses whichever
/// was expanded before. The top-level container is an independent boolean
/// and collapsing it does not forget which sub-section was open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PanelState {
    map_options_open: bool,
    expanded: Option<Section>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map_options_open(&self) -> bool {
        self.map_options_open
    }

    pub fn expanded(&self) -> Option<Section> {
        self.expanded
    }

    pub fn toggle_map_options(&mut self) -> bool {
        self.map_options_open = !self.map_options_open;
        self.map_options_open
    }

    /// Expands `section`, collapsing any other open section. Expanding the
    /// section that is already open collapses it.
    pub fn expand_section(&mut self, section: Section) {
        self.expanded = if self.expanded == Some(section) {
            None
        } else {
            Some(section)
        };
    }
}
