/// One selectable basemap style.
///
/// Each style is published in two flavors; browsers without WebP support
/// get the `-png` variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StyleChoice {
    pub id: &'static str,
    pub label: &'static str,
    webp_url: &'static str,
    png_url: &'static str,
}

impl StyleChoice {
    pub fn url(&self, webp_supported: bool) -> &'static str {
        if webp_supported {
            self.webp_url
        } else {
            self.png_url
        }
    }
}

static CHOICES: &[StyleChoice] = &[
    StyleChoice {
        id: "style",
        label: "OSM Topo",
        webp_url: "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style.json",
        png_url: "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-png.json",
    },
    StyleChoice {
        id: "fstopo",
        label: "USFS Topo",
        webp_url: "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-fstopo.json",
        png_url: "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-fstopo-png.json",
    },
    StyleChoice {
        id: "hybrid",
        label: "Aerial Hybrid",
        webp_url: "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-hybrid.json",
        png_url: "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-hybrid-png.json",
    },
    StyleChoice {
        id: "aerial",
        label: "Aerial",
        webp_url: "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-aerial.json",
        png_url: "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-aerial-png.json",
    },
];

/// Every style document URL this viewer will fetch. The first entry is the
/// default substituted for anything off-list.
static ALLOWED_URLS: &[&str] = &[
    "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style.json",
    "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-png.json",
    "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-aerial-png.json",
    "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-aerial.json",
    "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-fstopo-png.json",
    "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-fstopo.json",
    "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-hybrid-png.json",
    "https://raw.githubusercontent.com/nst-guide/osm-liberty-topo/gh-pages/style-hybrid.json",
];

pub fn choices() -> &'static [StyleChoice] {
    CHOICES
}

pub fn allowed_urls() -> &'static [&'static str] {
    ALLOWED_URLS
}

pub fn default_url() -> &'static str {
    ALLOWED_URLS[0]
}

/// Maps a requested URL onto the allow-list.
///
/// Anything not on the list silently resolves to the default style rather
/// than failing the request (or fetching an arbitrary host).
pub fn sanitize_url(url: &str) -> &'static str {
    ALLOWED_URLS
        .iter()
        .copied()
        .find(|allowed| *allowed == url)
        .unwrap_or_else(default_url)
}
