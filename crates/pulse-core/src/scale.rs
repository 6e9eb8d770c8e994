// File: crates/pulse-core/src/scale.rs
// Summary: Category (X) and value (Y) scale transforms from data space to plot pixels.

use crate::geometry::Area;

/// Vertical value scale mapping `[0, vmax]` onto the plot area, inverted so
/// larger values sit higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub bottom_px: f64,
    pub extent_px: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(area: &Area, vmax: f64) -> Self {
        Self { bottom_px: area.bottom(), extent_px: area.height, vmax }
    }

    /// Pixel length of a value measured up from the baseline.
    #[inline]
    pub fn length(&self, v: f64) -> f64 {
        (v / self.vmax) * self.extent_px
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.bottom_px - self.length(v)
    }
}

/// Horizontal scale placing `count` categories on evenly spaced points from
/// the left to the right edge. A single category sits in the middle.
#[derive(Clone, Copy, Debug)]
pub struct PointScale {
    pub left_px: f64,
    pub step_px: f64,
    center_px: Option<f64>,
}

impl PointScale {
    pub fn new(area: &Area, count: usize) -> Self {
        if count > 1 {
            Self { left_px: area.x, step_px: area.width / (count - 1) as f64, center_px: None }
        } else {
            Self { left_px: area.x, step_px: 0.0, center_px: Some(area.center_x()) }
        }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        match self.center_px {
            Some(c) => c,
            None => self.left_px + index as f64 * self.step_px,
        }
    }
}

/// Horizontal scale splitting the plot width into `count` equal slots.
#[derive(Clone, Copy, Debug)]
pub struct SlotScale {
    pub left_px: f64,
    pub slot_px: f64,
}

impl SlotScale {
    pub fn new(area: &Area, count: usize) -> Self {
        Self { left_px: area.x, slot_px: area.width / count.max(1) as f64 }
    }

    /// Left edge of slot `index`.
    #[inline]
    pub fn start_px(&self, index: usize) -> f64 {
        self.left_px + index as f64 * self.slot_px
    }
}
