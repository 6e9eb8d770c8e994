// File: crates/pulse-core/src/line.rs
// Summary: Line chart geometry: one point per item, polyline and area fill path.

use serde::{Deserialize, Serialize};

use crate::axis::{axis_ticks, scale_max, DEFAULT_TICK_COUNT};
use crate::geometry::{Area, Point};
use crate::path::{fmt_num, PathData};
use crate::scale::{PointScale, ValueScale};
use crate::series::{max_value, SeriesItem};
use crate::types::Dimensions;

/// Stroke colour used when a line series has no items.
pub const FALLBACK_LINE_COLOR: &str = "#888";

/// A plotted line vertex with the item it came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputedPoint {
    pub x: f64,
    pub y: f64,
    pub item: SeriesItem,
    pub index: usize,
}

impl ComputedPoint {
    pub fn point(&self) -> Point { Point::new(self.x, self.y) }
}

/// Place each item on an evenly spaced x position, with y scaled against the
/// last axis tick.
pub fn line_points(series: &[SeriesItem], dim: &Dimensions) -> Vec<ComputedPoint> {
    if series.is_empty() {
        return Vec::new();
    }

    let area = Area::from_dimensions(dim);
    let ticks = axis_ticks(max_value(series), DEFAULT_TICK_COUNT);
    let ys = ValueScale::new(&area, scale_max(&ticks));
    let xs = PointScale::new(&area, series.len());

    series
        .iter()
        .enumerate()
        .map(|(i, item)| ComputedPoint {
            x: xs.to_px(i),
            y: ys.to_px(item.clamped()),
            item: item.clone(),
            index: i,
        })
        .collect()
}

/// `points` attribute for an SVG polyline: `"x,y x,y ..."`.
pub fn polyline_points(points: &[ComputedPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path filling the region between the line and the baseline.
/// Empty for fewer than two points.
pub fn area_path(points: &[ComputedPoint], area: &Area) -> String {
    let (first, last) = match (points.first(), points.last()) {
        (Some(f), Some(l)) if points.len() >= 2 => (f, l),
        _ => return String::new(),
    };
    let baseline = area.bottom();

    let mut path = PathData::new().move_to(Point::new(first.x, baseline));
    for p in points {
        path = path.line_to(p.point());
    }
    path.line_to(Point::new(last.x, baseline)).close().build()
}

/// Stroke colour for the line: the first item's colour.
pub fn line_color(series: &[SeriesItem]) -> &str {
    series.first().map(|s| s.color.as_str()).unwrap_or(FALLBACK_LINE_COLOR)
}
