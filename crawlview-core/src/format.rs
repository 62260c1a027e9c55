//! Display formatting for sizes and durations shown on the dashboard pages.

use crate::numbers::{floor_f64_to_u64, trim_fixed, u64_to_f64};

const BYTE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const UNIT_STEP: u64 = 1024;

/// Format a byte count with a base-1024 unit, e.g. `1536` as `1.5 KB`.
///
/// The scaled value is rounded to two decimals with insignificant zeros
/// dropped. Counts of 1024 GB and above stay in GB.
#[must_use]
pub fn format_byte_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let index = usize::try_from(bytes.ilog(UNIT_STEP))
        .unwrap_or(usize::MAX)
        .min(BYTE_UNITS.len() - 1);
    let divisor = (0..index).fold(1.0_f64, |acc, _| acc * u64_to_f64(UNIT_STEP));
    let scaled = u64_to_f64(bytes) / divisor;
    format!("{} {}", trim_fixed(scaled, 2), BYTE_UNITS[index])
}

/// Format a playback duration as `m:ss`.
///
/// Zero, NaN, negative and infinite inputs render as `0:00`. Minutes are not
/// wrapped into hours, so an hour reads `60:00`.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds == 0.0 || !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let minutes = floor_f64_to_u64(seconds / 60.0);
    let remaining = floor_f64_to_u64(seconds % 60.0);
    format!("{minutes}:{remaining:02}")
}

/// Format a crawl's elapsed time in words: `12.5 seconds`, `3 min 7 sec`, `2 hr 5 min`.
#[must_use]
pub fn format_elapsed(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0.0 seconds".to_string();
    }
    if seconds < 60.0 {
        format!("{seconds:.1} seconds")
    } else if seconds < 3600.0 {
        let minutes = floor_f64_to_u64(seconds / 60.0);
        let remaining = floor_f64_to_u64(seconds % 60.0);
        format!("{minutes} min {remaining} sec")
    } else {
        let hours = floor_f64_to_u64(seconds / 3600.0);
        let minutes = floor_f64_to_u64((seconds % 3600.0) / 60.0);
        format!("{hours} hr {minutes} min")
    }
}

/// Share of `part` in `total` as a percentage rounded to one decimal; `0.0` for an empty total.
///
/// Exact halves round to the even digit, so 6.25 becomes 6.2.
#[must_use]
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = 100.0 * u64_to_f64(part) / u64_to_f64(total);
    (pct * 10.0).round_ties_even() / 10.0
}
