// File: crates/pulse-core/src/column.rs
// Summary: Column chart geometry: one bar per item, centered in its slot, growing up from the baseline.

use serde::{Deserialize, Serialize};

use crate::axis::{axis_ticks, scale_max, DEFAULT_TICK_COUNT};
use crate::geometry::Area;
use crate::scale::{SlotScale, ValueScale};
use crate::series::{max_value, SeriesItem};
use crate::types::Dimensions;

/// Share of the slot a bar may fill.
pub const BAR_FILL_RATIO: f64 = 0.6;
/// Widest a bar ever gets, in pixels.
pub const MAX_BAR_WIDTH: f64 = 60.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputedBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub item: SeriesItem,
    pub index: usize,
}

impl ComputedBar {
    /// Horizontal center of the bar, where category labels go.
    pub fn center_x(&self) -> f64 { self.x + self.width / 2.0 }
}

pub fn column_bars(series: &[SeriesItem], dim: &Dimensions) -> Vec<ComputedBar> {
    if series.is_empty() {
        return Vec::new();
    }

    let area = Area::from_dimensions(dim);
    let ticks = axis_ticks(max_value(series), DEFAULT_TICK_COUNT);
    let ys = ValueScale::new(&area, scale_max(&ticks));
    let slots = SlotScale::new(&area, series.len());

    let width = (slots.slot_px * BAR_FILL_RATIO).min(MAX_BAR_WIDTH);
    let gap = (slots.slot_px - width) / 2.0;

    series
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let height = ys.length(item.clamped());
            ComputedBar {
                x: slots.start_px(i) + gap,
                y: ys.bottom_px - height,
                width,
                height,
                item: item.clone(),
                index: i,
            }
        })
        .collect()
}
