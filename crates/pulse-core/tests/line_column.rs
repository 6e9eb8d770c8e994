// File: crates/pulse-core/tests/line_column.rs
// Purpose: Validate line points and column bars against the default 500x320 surface.

use pulse_core::line::line_color;
use pulse_core::{
    area, area_path, column_bars, default_dimensions, line_points, polyline_points, Dimensions, Padding,
    SeriesItem,
};

fn series(values: &[(&str, f64)]) -> Vec<SeriesItem> {
    values.iter().map(|&(n, v)| SeriesItem::new(n, v, "#f97316")).collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn area_subtracts_padding() {
    let a = area(&default_dimensions());
    assert_eq!((a.x, a.y, a.width, a.height), (55.0, 30.0, 415.0, 240.0));

    // no guard against padding larger than the surface
    let tight = Dimensions::new(50.0, 40.0, Padding::uniform(30.0));
    let a = area(&tight);
    assert_eq!((a.width, a.height), (-10.0, -20.0));
}

#[test]
fn monthly_revenue_line_points() {
    let s = series(&[("Jan", 42.0), ("Feb", 58.0), ("Mar", 35.0)]);
    let pts = line_points(&s, &default_dimensions());
    assert_eq!(pts.len(), 3);

    // 415px over two steps; y against the final tick (60), baseline at 270
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![55.0, 262.5, 470.0]);
    assert!(approx(pts[0].y, 270.0 - 42.0 / 60.0 * 240.0));
    assert!(approx(pts[1].y, 38.0));
    assert!(approx(pts[2].y, 130.0));

    for (i, p) in pts.iter().enumerate() {
        assert_eq!(p.index, i);
        assert_eq!(p.item, s[i]);
    }
}

#[test]
fn single_line_point_is_centered() {
    let pts = line_points(&series(&[("Only", 10.0)]), &default_dimensions());
    assert_eq!(pts.len(), 1);
    assert_eq!(pts[0].x, 262.5);
    assert!(approx(pts[0].y, 30.0));
}

#[test]
fn negative_values_sit_on_the_baseline() {
    let s = series(&[("a", -5.0), ("b", 0.0), ("c", -1.0)]);
    for p in line_points(&s, &default_dimensions()) {
        assert_eq!(p.y, 270.0);
    }
    for b in column_bars(&s, &default_dimensions()) {
        assert_eq!(b.height, 0.0);
        assert_eq!(b.y, 270.0);
    }
    // the item keeps its original value
    let pts = line_points(&s, &default_dimensions());
    assert_eq!(pts[0].item.value, -5.0);
}

#[test]
fn empty_series_yields_nothing() {
    assert!(line_points(&[], &default_dimensions()).is_empty());
    assert!(column_bars(&[], &default_dimensions()).is_empty());
    assert_eq!(line_color(&[]), "#888");
}

#[test]
fn polyline_and_area_path_strings() {
    let s = series(&[("A", 0.0), ("B", 60.0)]);
    let pts = line_points(&s, &default_dimensions());
    assert_eq!(polyline_points(&pts), "55,270 470,30");

    let a = area(&default_dimensions());
    assert_eq!(area_path(&pts, &a), "M 55 270 L 55 270 L 470 30 L 470 270 Z");
    assert_eq!(area_path(&pts[..1], &a), "");
    assert_eq!(line_color(&s), "#f97316");
}

#[test]
fn region_sales_bars_are_capped_and_centered() {
    let s = series(&[("North", 120.0), ("South", 85.0), ("East", 145.0), ("West", 70.0)]);
    let bars = column_bars(&s, &default_dimensions());
    assert_eq!(bars.len(), 4);

    // slot 103.75px; 60% would be 62.25px so the 60px cap applies
    for (i, b) in bars.iter().enumerate() {
        assert_eq!(b.index, i);
        assert_eq!(b.width, 60.0);
        assert!(approx(b.x, 55.0 + i as f64 * 103.75 + 21.875));
        assert!(approx(b.y + b.height, 270.0));
    }
    // scale max is the final tick, 160
    assert!(approx(bars[0].height, 180.0));
    assert!(approx(bars[2].height, 217.5));
    assert!(approx(bars[2].y, 52.5));
}

#[test]
fn narrow_slots_use_sixty_percent() {
    let s: Vec<SeriesItem> = (0..20).map(|i| SeriesItem::new(format!("c{i}"), i as f64, "#000")).collect();
    let bars = column_bars(&s, &default_dimensions());
    let slot = 415.0 / 20.0;
    assert!(approx(bars[0].width, slot * 0.6));
    assert!(approx(bars[0].x, 55.0 + (slot - slot * 0.6) / 2.0));
    assert!(approx(bars[7].center_x(), 55.0 + 7.0 * slot + slot / 2.0));
}

#[test]
fn huge_values_still_produce_geometry() {
    let s = series(&[("big", 1.795e308), ("small", 1.0)]);
    let dim = default_dimensions();
    let points = line_points(&s, &dim);
    assert_eq!(points.len(), 2);
    assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    assert!(points[0].y >= 30.0 && points[0].y < points[1].y);

    let bars = column_bars(&s, &dim);
    assert_eq!(bars.len(), 2);
    assert!(bars.iter().all(|b| b.height.is_finite() && b.height <= 240.0));
}
