// File: crates/pulse-core/src/series.rs
// Summary: Series model (name, value, color) and the value reductions used for scaling.

use serde::{Deserialize, Serialize};

/// One labeled value of a chart series.
///
/// `value` may be any real; it is clamped to zero for geometry but the item
/// still takes its slot. `color` is passed through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesItem {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl SeriesItem {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self { name: name.into(), value, color: color.into() }
    }

    /// Value as used for geometry (see [`clamp_value`]).
    #[inline]
    pub fn clamped(&self) -> f64 { clamp_value(self.value) }
}

/// Floor a value at zero. NaN and infinities have no drawable magnitude and
/// map to zero as well.
#[inline]
pub fn clamp_value(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Largest clamped value, never below 1 when nothing positive is present.
pub fn max_value(series: &[SeriesItem]) -> f64 {
    let max = series.iter().map(SeriesItem::clamped).fold(0.0f64, f64::max);
    if max > 0.0 { max } else { 1.0 }
}

/// Sum of clamped values.
pub fn total_value(series: &[SeriesItem]) -> f64 {
    series.iter().map(SeriesItem::clamped).fold(0.0, |acc, v| acc + v)
}
