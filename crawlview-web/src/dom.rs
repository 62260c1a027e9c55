use crawlview_core::StorageError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

/// Retrieve the global `window` object, if running in a browser context.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console, bypassing the `log` facade.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns [`StorageError::Unavailable`] without a window or when the browser
/// reports no storage, and [`StorageError::Read`] when accessing it throws
/// (e.g. storage disabled by privacy settings).
pub fn local_storage() -> Result<Storage, StorageError> {
    window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|err| StorageError::Read(js_error_message(&err)))?
        .ok_or(StorageError::Unavailable)
}

/// Collect all elements matching `selector`. An invalid selector yields no elements.
#[must_use]
pub fn query_elements(doc: &Document, selector: &str) -> Vec<Element> {
    let nodes = match doc.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::debug!("selector {selector:?} rejected: {}", js_error_message(&err));
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
