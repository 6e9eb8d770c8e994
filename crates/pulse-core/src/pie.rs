// File: crates/pulse-core/src/pie.rs
// Summary: Pie chart geometry: angular partition of the circle, wedge paths, label anchors.
//
// Angles are radians in screen space: 0 points right, and angles grow
// clockwise because y grows downward. Slices start at 12 o'clock (-PI/2).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::geometry::{polar_to_cartesian, Area, Point};
use crate::path::PathData;
use crate::series::{total_value, SeriesItem};
use crate::types::Dimensions;

/// Distance of the percentage label from the center, as a share of the radius.
pub const LABEL_RADIUS_RATIO: f64 = 0.65;
/// How far a hovered slice is pushed out along its mid angle, in pixels.
pub const HOVER_OFFSET: f64 = 8.0;
/// Gap between the pie and the edge of the plot area, in pixels.
pub const RADIUS_INSET: f64 = 10.0;
/// Spans within this of a full turn are drawn as a full circle.
const FULL_CIRCLE_EPSILON: f64 = 0.001;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputedSlice {
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    /// SVG path data for the wedge (or full disc).
    pub path: String,
    /// Share of the total, rounded to a whole percent.
    pub percentage: u32,
    pub item: SeriesItem,
    pub index: usize,
    pub label_x: f64,
    pub label_y: f64,
}

impl ComputedSlice {
    pub fn span(&self) -> f64 { self.end_angle - self.start_angle }

    /// Translation pushing the slice `distance` pixels out along its mid angle.
    pub fn hover_offset(&self, distance: f64) -> (f64, f64) {
        (distance * self.mid_angle.cos(), distance * self.mid_angle.sin())
    }
}

/// Center and radius of a pie drawn into a surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl PieLayout {
    /// Center on the surface; the radius fits the shorter side of the plot
    /// area, less [`RADIUS_INSET`].
    pub fn from_dimensions(dim: &Dimensions) -> Self {
        let area = Area::from_dimensions(dim);
        Self {
            cx: dim.width / 2.0,
            cy: dim.height / 2.0,
            radius: area.width.min(area.height) / 2.0 - RADIUS_INSET,
        }
    }

    pub fn slices(&self, series: &[SeriesItem]) -> Vec<ComputedSlice> {
        pie_slices(series, self.cx, self.cy, self.radius)
    }
}

/// Partition the circle among the items in series order, clockwise from 12
/// o'clock. Returns nothing when the series is empty or sums to zero.
pub fn pie_slices(series: &[SeriesItem], cx: f64, cy: f64, radius: f64) -> Vec<ComputedSlice> {
    if series.is_empty() {
        return Vec::new();
    }
    let total = total_value(series);
    if total == 0.0 {
        return Vec::new();
    }

    let single = series.len() == 1;
    let label_radius = radius * LABEL_RADIUS_RATIO;
    let mut angle = -FRAC_PI_2;

    series
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let share = item.clamped() / total;
            let span = share * 2.0 * PI;
            let start = angle;
            let end = angle + span;
            let mid = start + span / 2.0;
            angle = end;

            let label = polar_to_cartesian(cx, cy, label_radius, mid);
            let path = if single || span >= TAU - FULL_CIRCLE_EPSILON {
                full_circle_path(cx, cy, radius)
            } else {
                describe_arc(cx, cy, radius, start, end)
            };

            ComputedSlice {
                start_angle: start,
                end_angle: end,
                mid_angle: mid,
                path,
                percentage: (share * 100.0).round() as u32,
                item: item.clone(),
                index: i,
                label_x: label.x,
                label_y: label.y,
            }
        })
        .collect()
}

/// Filled wedge from the center out to the arc between two angles. The large
/// arc flag is set when the span exceeds half a turn.
pub fn describe_arc(cx: f64, cy: f64, r: f64, start_angle: f64, end_angle: f64) -> String {
    let from = polar_to_cartesian(cx, cy, r, end_angle);
    let to = polar_to_cartesian(cx, cy, r, start_angle);
    let large_arc = end_angle - start_angle > PI;

    PathData::new()
        .move_to(Point::new(cx, cy))
        .line_to(from)
        .arc_to(r, large_arc, false, to)
        .close()
        .build()
}

/// A full disc as two half-circle arcs; one arc command cannot close a circle.
pub fn full_circle_path(cx: f64, cy: f64, r: f64) -> String {
    let left = Point::new(cx - r, cy);
    let right = Point::new(cx + r, cy);

    PathData::new()
        .move_to(left)
        .arc_to(r, true, true, right)
        .arc_to(r, true, true, left)
        .close()
        .build()
}
