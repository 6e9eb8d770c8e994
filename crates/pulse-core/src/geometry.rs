// File: crates/pulse-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot area, polar conversion).

use serde::{Deserialize, Serialize};

use crate::types::Dimensions;

/// A point in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Usable drawing rectangle inside the padding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    /// Derive the plot area from surface dimensions. Negative extents are
    /// passed through untouched.
    pub fn from_dimensions(dim: &Dimensions) -> Self {
        let p = dim.padding;
        Self {
            x: p.left,
            y: p.top,
            width: dim.width - p.left - p.right,
            height: dim.height - p.top - p.bottom,
        }
    }

    /// Y coordinate of the value baseline (bottom edge).
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn center_x(&self) -> f64 { self.x + self.width / 2.0 }
}

/// Free-function form of [`Area::from_dimensions`].
pub fn area(dim: &Dimensions) -> Area {
    Area::from_dimensions(dim)
}

/// Convert polar coordinates around `(cx, cy)` to cartesian. Angles are in
/// radians, measured clockwise from 3 o'clock in screen space (y grows down).
#[inline]
pub fn polar_to_cartesian(cx: f64, cy: f64, r: f64, angle: f64) -> Point {
    Point::new(cx + r * angle.cos(), cy + r * angle.sin())
}
