// File: crates/pulse-core/src/format.rs
// Summary: Compact value labels for axes and tooltips (999, 1.5K, 2.0M).

/// Format a value with a K/M suffix above a thousand.
///
/// Suffixed values carry exactly one decimal; anything below 1000 is printed
/// in its shortest decimal form. No locale grouping.
pub fn format_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", to_fixed_1(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{}K", to_fixed_1(value / 1_000.0))
    } else {
        crate::path::fmt_num(value)
    }
}

/// One-decimal fixed formatting with exact ties rounded up (`1.25 -> 1.3`).
///
/// `{:.1}` rounds ties to even; a tie at the first decimal is only exactly
/// representable for fractions .25 and .75, which this bumps upward.
fn to_fixed_1(v: f64) -> String {
    let quarters = v * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        return format!("{:.1}", (v * 10.0).ceil() / 10.0);
    }
    format!("{:.1}", v)
}
