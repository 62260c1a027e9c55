// Accessibility enhancements applied once the page is ready

use crawlview_core::{
    ACTIVATION_MARKER_ATTR, LabelTarget, UiConfig, apply_synthesized_labels, is_activation_key,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::dom::{js_error_message, query_elements};

const ARIA_LABEL: &str = "aria-label";

/// A DOM element seen through the label-synthesis rules.
pub struct ElementLabel(pub Element);

impl LabelTarget for ElementLabel {
    fn aria_label(&self) -> Option<String> {
        self.0.get_attribute(ARIA_LABEL)
    }

    fn visible_text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_aria_label(&self, label: &str) {
        if let Err(err) = self.0.set_attribute(ARIA_LABEL, label) {
            log::debug!("aria-label not set: {}", js_error_message(&err));
        }
    }
}

/// Give unlabelled buttons an `aria-label` from their visible text.
pub fn synthesize_labels(doc: &Document, config: &UiConfig) -> usize {
    let buttons = query_elements(doc, &config.unlabeled_button_selector);
    apply_synthesized_labels(buttons.into_iter().map(ElementLabel))
}

/// Key-release handler: Enter or Space clicks the element.
///
/// Returns whether the key activated the element.
pub fn handle_activation_key(element: &HtmlElement, event: &KeyboardEvent) -> bool {
    if !is_activation_key(&event.key()) {
        return false;
    }
    event.prevent_default();
    element.click();
    true
}

/// Attach the keyboard activation listener to every interactive element.
///
/// Elements wired by an earlier pass carry a marker attribute and are
/// skipped. The marker is written before the listener is attached; an
/// element that cannot be marked is left unwired. Returns the number of
/// newly wired elements.
pub fn wire_keyboard_activation(doc: &Document, config: &UiConfig) -> usize {
    let mut wired = 0;
    for element in query_elements(doc, &config.interactive_selector) {
        if element.has_attribute(ACTIVATION_MARKER_ATTR) {
            continue;
        }
        let Ok(target) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        if attach_activation_listener(&target) {
            wired += 1;
        }
    }
    wired
}

fn attach_activation_listener(target: &HtmlElement) -> bool {
    if let Err(err) = target.set_attribute(ACTIVATION_MARKER_ATTR, "") {
        log::debug!("activation marker not set: {}", js_error_message(&err));
        return false;
    }
    let activated = target.clone();
    let on_keyup = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        handle_activation_key(&activated, &event);
    });
    if let Err(err) =
        target.add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref())
    {
        log::debug!("keyup listener not attached: {}", js_error_message(&err));
        if let Err(err) = target.remove_attribute(ACTIVATION_MARKER_ATTR) {
            log::debug!("activation marker not cleared: {}", js_error_message(&err));
        }
        return false;
    }
    // The listener lives as long as the page.
    on_keyup.forget();
    true
}

/// Run both enhancement passes.
pub fn enhance(doc: &Document, config: &UiConfig) {
    let labelled = synthesize_labels(doc, config);
    let wired = wire_keyboard_activation(doc, config);
    log::debug!("accessibility: {labelled} labels synthesized, {wired} elements keyboard-activated");
}
