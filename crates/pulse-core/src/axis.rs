// File: crates/pulse-core/src/axis.rs
// Summary: Value axis tick generation ("nice" 1/2/5/10 steps) and the scale maximum.

use tracing::trace;

/// Tick count aimed for when none is given.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Pick a human-friendly step near `raw_step`: 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(raw_step: f64) -> f64 {
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let factor = if residual <= 1.5 {
        1.0
    } else if residual <= 3.0 {
        2.0
    } else if residual <= 7.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Generate value-axis ticks from 0 up to at least `max_value`.
///
/// Ticks are evenly spaced by [`nice_step`] of `max_value / tick_count` and
/// rounded to three decimals (steps finer than 0.001 are left unrounded so
/// ticks stay distinct). The sequence is strictly increasing, starts at
/// 0 and its last element is `>= max_value`. Non-positive or non-finite maxima
/// yield `[0]`; a `tick_count` of 0 is treated as 1. Near `f64::MAX`, where the
/// next step would overflow, `max_value` itself closes the sequence.
pub fn axis_ticks(max_value: f64, tick_count: usize) -> Vec<f64> {
    if max_value <= 0.0 || !max_value.is_finite() {
        return vec![0.0];
    }

    let step = nice_step(max_value / tick_count.max(1) as f64);
    if step <= 0.0 || !step.is_finite() {
        // subnormal maxima underflow the step
        return vec![0.0, max_value];
    }
    // tolerate float noise at the boundary
    let limit = max_value + step * 0.01;

    let mut ticks = Vec::new();
    let mut v = 0.0f64;
    // `limit` overflows to +inf for maxima close to f64::MAX
    while v <= limit && v.is_finite() {
        ticks.push(if step >= 0.001 { round3(v) } else { v });
        v += step;
    }

    if let Some(&last) = ticks.last() {
        if last < max_value {
            let next = last + step;
            ticks.push(if next.is_finite() { next } else { max_value });
        }
    }

    trace!(max_value, step, count = ticks.len(), "axis ticks");
    ticks
}

/// Plotting denominator for a tick set: its last tick, or 1 when that is 0.
pub fn scale_max(ticks: &[f64]) -> f64 {
    match ticks.last() {
        Some(&t) if t != 0.0 && !t.is_nan() => t,
        _ => 1.0,
    }
}

#[inline]
fn round3(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    if r.is_finite() { r } else { v }
}
