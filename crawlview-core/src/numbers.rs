//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Floor a f64 into the u64 range, returning 0 for NaN and negative values.
#[must_use]
pub fn floor_f64_to_u64(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    cast::<f64, u64>(value.floor()).unwrap_or(u64::MAX)
}

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Round to a fixed number of decimals and render without insignificant zeros.
///
/// Exact halves round away from zero (`1.125` to `1.13`). `1.50` renders as
/// `1.5`, `2.00` as `2`.
#[must_use]
pub fn trim_fixed(value: f64, decimals: u8) -> String {
    let scale = 10.0_f64.powi(i32::from(decimals));
    let rounded = (value * scale).round() / scale;
    let precision = usize::from(decimals);
    let fixed = format!("{rounded:.precision$}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
