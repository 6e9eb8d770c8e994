// File: crates/pulse-core/src/grid.rs
// Summary: Horizontal grid line layout for value-axis ticks.

use serde::{Deserialize, Serialize};

use crate::axis::scale_max;
use crate::format::format_value;
use crate::geometry::Area;
use crate::scale::ValueScale;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub y: f64,
    pub value: f64,
    pub label: String,
}

/// One grid line per tick, positioned with the same scale the series use.
pub fn grid_lines(ticks: &[f64], area: &Area) -> Vec<GridLine> {
    let ys = ValueScale::new(area, scale_max(ticks));
    ticks
        .iter()
        .map(|&t| GridLine { y: ys.to_px(t), value: t, label: format_value(t) })
        .collect()
}
