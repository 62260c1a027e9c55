//! Page-supplied configuration.
//!
//! A page may embed
//! `<script id="crawlview-config" type="application/json">{...}</script>`
//! with any subset of [`UiConfig`] fields. Without it, or when it does not
//! parse, the defaults matching the dashboard templates are used.

use crawlview_core::UiConfig;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "crawlview-config";

#[must_use]
pub fn page_config(doc: &Document) -> UiConfig {
    let Some(text) = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return UiConfig::default();
    };
    UiConfig::from_json(&text).unwrap_or_else(|err| {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
        UiConfig::default()
    })
}
