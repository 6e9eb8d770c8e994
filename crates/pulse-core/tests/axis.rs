// File: crates/pulse-core/tests/axis.rs
// Purpose: Validate nice-step selection, tick generation and the scale maximum.

use pulse_core::axis::nice_step;
use pulse_core::{axis_ticks, max_value, scale_max, SeriesItem, DEFAULT_TICK_COUNT};

fn item(name: &str, value: f64) -> SeriesItem {
    SeriesItem::new(name, value, "#000")
}

#[test]
fn ticks_for_zero_is_single_zero() {
    assert_eq!(axis_ticks(0.0, DEFAULT_TICK_COUNT), vec![0.0]);
    assert_eq!(axis_ticks(-3.0, DEFAULT_TICK_COUNT), vec![0.0]);
    assert_eq!(axis_ticks(f64::NAN, DEFAULT_TICK_COUNT), vec![0.0]);
}

#[test]
fn ticks_extend_past_max_when_cutoff_stops_short() {
    // step 10; the loop stops at 50 and one more step is appended
    assert_eq!(axis_ticks(58.0, 5), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    assert_eq!(axis_ticks(145.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0, 140.0, 160.0]);
    assert_eq!(axis_ticks(90.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn ticks_landing_on_max_stop_there() {
    assert_eq!(axis_ticks(100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(axis_ticks(60.0, 5), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
}

#[test]
fn fractional_ticks_are_rounded_to_three_decimals() {
    // 0.2 * 3 accumulates to 0.6000000000000001 before rounding
    assert_eq!(axis_ticks(1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
}

#[test]
fn zero_tick_count_does_not_hang() {
    assert_eq!(axis_ticks(10.0, 0), vec![0.0, 10.0]);
}

#[test]
fn nice_step_thresholds() {
    assert_eq!(nice_step(15.0), 10.0);
    assert_eq!(nice_step(16.0), 20.0);
    assert_eq!(nice_step(3.0), 2.0);
    assert_eq!(nice_step(7.0), 5.0);
    assert_eq!(nice_step(8.0), 10.0);
}

#[test]
fn scale_max_is_last_tick_or_one() {
    assert_eq!(scale_max(&[0.0, 10.0, 20.0]), 20.0);
    assert_eq!(scale_max(&[0.0]), 1.0);
    assert_eq!(scale_max(&[]), 1.0);
}

#[test]
fn max_value_floors_at_one() {
    assert_eq!(max_value(&[]), 1.0);
    assert_eq!(max_value(&[item("a", 0.0), item("b", -4.0)]), 1.0);
    assert_eq!(max_value(&[item("a", 42.0), item("b", 58.0), item("c", -100.0)]), 58.0);
    // a positive max below one is kept
    assert_eq!(max_value(&[item("a", 0.25)]), 0.25);
}

#[test]
fn ticks_near_f64_max_terminate_at_the_max() {
    for max in [1.795e308, f64::MAX] {
        let t = axis_ticks(max, DEFAULT_TICK_COUNT);
        assert_eq!(t[0], 0.0);
        assert!(t.windows(2).all(|w| w[0] < w[1]), "not increasing: {t:?}");
        assert!(t.iter().all(|v| v.is_finite()), "non-finite tick: {t:?}");
        assert!(*t.last().unwrap() >= max);
    }
}
