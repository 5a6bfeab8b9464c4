/// A pointer position in CSS pixels from the top-left corner of the map
/// canvas.
///
/// The embedding shell reports `-1.0` on either axis when the pointer sits
/// over a UI element instead of the map; such events carry no usable map
/// coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when either axis carries the "pointer is over UI" sentinel.
    pub fn is_ui_sentinel(&self) -> bool {
        self.x == -1.0 || self.y == -1.0
    }
}

/// Canvas dimensions in CSS pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}
