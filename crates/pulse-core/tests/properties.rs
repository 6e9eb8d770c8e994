// File: crates/pulse-core/tests/properties.rs
// Purpose: Property checks for tick sequences, per-item primitives and pie coverage.

use std::f64::consts::TAU;

use proptest::prelude::*;
use pulse_core::{
    axis_ticks, column_bars, default_dimensions, line_points, max_value, pie_slices, SeriesItem,
    DEFAULT_TICK_COUNT,
};

fn series_strategy() -> impl Strategy<Value = Vec<SeriesItem>> {
    proptest::collection::vec(-1_000.0f64..100_000.0, 0..40).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| SeriesItem::new(format!("item {i}"), v, "#14b8a6"))
            .collect()
    })
}

proptest! {
    #[test]
    fn ticks_start_at_zero_increase_and_cover_max(max in 0.001f64..1.0e9, count in 1usize..12) {
        let ticks = axis_ticks(max, count);
        prop_assert_eq!(ticks[0], 0.0);
        prop_assert!(ticks.len() >= 2);
        for w in ticks.windows(2) {
            prop_assert!(w[1] > w[0], "not increasing: {:?}", ticks);
        }
        let last = ticks[ticks.len() - 1];
        prop_assert!(last >= max, "last tick {} below max {}", last, max);
    }

    #[test]
    fn one_primitive_per_item(series in series_strategy()) {
        let dim = default_dimensions();
        let points = line_points(&series, &dim);
        let bars = column_bars(&series, &dim);
        prop_assert_eq!(points.len(), series.len());
        prop_assert_eq!(bars.len(), series.len());

        for (i, (p, b)) in points.iter().zip(&bars).enumerate() {
            prop_assert_eq!(p.index, i);
            prop_assert_eq!(b.index, i);
            prop_assert!(p.x.is_finite() && p.y.is_finite());
            // everything stays inside the plot area
            prop_assert!(p.y >= 30.0 - 1e-9 && p.y <= 270.0 + 1e-9);
            prop_assert!(b.height >= 0.0 && b.height <= 240.0 + 1e-9);
            prop_assert!(b.width <= 60.0);
        }
    }

    #[test]
    fn non_positive_series_scale_to_nothing(values in proptest::collection::vec(-1_000.0f64..=0.0, 1..20)) {
        let series: Vec<SeriesItem> = values.iter().map(|&v| SeriesItem::new("x", v, "#000")).collect();
        prop_assert_eq!(max_value(&series), 1.0);
        for b in column_bars(&series, &default_dimensions()) {
            prop_assert_eq!(b.height, 0.0);
        }
        prop_assert!(pie_slices(&series, 0.0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn pie_spans_cover_the_circle(series in series_strategy()) {
        let slices = pie_slices(&series, 250.0, 160.0, 130.0);
        let positive = series.iter().any(|s| s.value > 0.0);
        prop_assert_eq!(slices.is_empty(), !positive);
        if positive {
            prop_assert_eq!(slices.len(), series.len());
            let total: f64 = slices.iter().map(|s| s.span()).sum();
            prop_assert!((total - TAU).abs() < 1e-9);
            for s in &slices {
                prop_assert!(s.span() >= 0.0);
                prop_assert!(s.percentage <= 100);
                prop_assert!(s.path.starts_with('M') && s.path.ends_with('Z'));
            }
        }
    }
}

#[test]
fn default_tick_count_is_five() {
    assert_eq!(DEFAULT_TICK_COUNT, 5);
}
