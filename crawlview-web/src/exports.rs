//! Formatting and tracking helpers callable from the page's own scripts.

use crawlview_core::numbers::floor_f64_to_u64;
use crawlview_core::{format, tracking};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = formatFileSize)]
#[must_use]
pub fn format_file_size(bytes: f64) -> String {
    format::format_byte_size(floor_f64_to_u64(bytes))
}

/// `null` and `undefined` format like zero.
#[wasm_bindgen(js_name = formatDuration)]
#[must_use]
pub fn format_duration(seconds: Option<f64>) -> String {
    format::format_duration(seconds.unwrap_or(0.0))
}

#[wasm_bindgen(js_name = formatElapsed)]
#[must_use]
pub fn format_elapsed(seconds: f64) -> String {
    format::format_elapsed(seconds)
}

#[wasm_bindgen]
#[must_use]
pub fn percentage(part: f64, total: f64) -> f64 {
    format::percentage(floor_f64_to_u64(part), floor_f64_to_u64(total))
}

#[wasm_bindgen(js_name = trackEvent)]
pub fn track_event(category: &str, action: &str, label: &str) {
    tracking::track_event(category, action, label);
}
