// File: crates/pulse-core/src/types.rs
// Summary: Shared types and constants (surface size, padding, dimension presets).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: f64 = 500.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 320.0;

/// Screen margins around the plot area, in pixels.
/// Contract: callers keep `left + right <= width` and `top + bottom <= height`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Create padding in CSS order (top, right, bottom, left).
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same padding on every side.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Padding {
    // Extra left room for value labels, extra bottom room for category labels.
    fn default() -> Self {
        Self::new(30.0, 30.0, 50.0, 55.0)
    }
}

/// Drawing surface size plus the padding reserved for axes and labels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64, padding: Padding) -> Self {
        Self { width, height, padding }
    }

    /// SVG `viewBox` attribute covering the whole surface.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self { default_dimensions() }
}

/// Preset for line and column charts.
pub fn default_dimensions() -> Dimensions {
    Dimensions::new(WIDTH, HEIGHT, Padding::default())
}

/// Preset for pie charts: no axes, so a small uniform padding.
pub fn pie_dimensions() -> Dimensions {
    Dimensions::new(WIDTH, HEIGHT, Padding::uniform(20.0))
}
