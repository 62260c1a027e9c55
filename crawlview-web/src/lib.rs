#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod config;
pub mod dom;
pub mod exports;
pub mod storage;
pub mod theme;

use web_sys::Document;

/// Page-ready work: theme controller first, then the accessibility pass.
///
/// A page without the theme toggle still gets the accessibility pass.
pub fn boot(doc: &Document) {
    let config = config::page_config(doc);
    theme::install(doc, &config);
    a11y::enhance(doc, &config);
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
}

#[cfg(target_arch = "wasm32")]
fn boot_when_ready(doc: Document) {
    if doc.ready_state() != "loading" {
        boot(&doc);
        return;
    }
    let target = doc.clone();
    let on_ready = Closure::once(move || boot(&doc));
    if let Err(err) = target
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        dom::console_error(&format!(
            "crawlview: DOMContentLoaded listener failed: {}",
            dom::js_error_message(&err)
        ));
    }
    on_ready.forget();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logging();
    if let Some(doc) = dom::document() {
        boot_when_ready(doc);
    }
}
