use foundation::screen::{ScreenPoint, Viewport};

/// Offset from the left or right viewport edge, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HorizontalAnchor {
    FromLeft(f64),
    FromRight(f64),
}

/// Offset from the top or bottom viewport edge, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum VerticalAnchor {
    FromTop(f64),
    FromBottom(f64),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

/// Positions a tooltip near the pointer without letting it leave the
/// pointer's viewport quadrant.
///
/// A pointer in the left half anchors from the left edge at
/// `min(0.3 * width, x)`; the right half mirrors. Vertically the same rule
/// applies at half height with a 50% clamp.
pub fn place(anchor: ScreenPoint, viewport: Viewport) -> Placement {
    let horizontal = if anchor.x <= viewport.half_width() {
        HorizontalAnchor::FromLeft((viewport.width * 0.3).min(anchor.x))
    } else {
        HorizontalAnchor::FromRight((viewport.width * 0.3).min(viewport.width - anchor.x))
    };

    let vertical = if anchor.y <= viewport.half_height() {
        VerticalAnchor::FromTop((viewport.height * 0.5).min(anchor.y))
    } else {
        VerticalAnchor::FromBottom((viewport.height * 0.5).min(viewport.height - anchor.y))
    };

    Placement {
        horizontal,
        vertical,
    }
}
