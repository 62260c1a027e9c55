use crawlview_core::{PreferenceStore, ThemeMode, ThemeSurface, UiConfig, theme};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::dom::js_error_message;
use crate::storage::LocalPreferenceStore;

/// Document body and theme toggle control of a dashboard page.
#[derive(Clone)]
pub struct PageThemeSurface {
    body: HtmlElement,
    toggle: Element,
}

impl PageThemeSurface {
    /// Find both elements; `None` if the page has no body or no toggle control.
    #[must_use]
    pub fn locate(doc: &Document, config: &UiConfig) -> Option<Self> {
        let body = doc.body()?;
        let toggle = doc.get_element_by_id(&config.toggle_id)?;
        Some(Self { body, toggle })
    }

    #[must_use]
    pub const fn toggle_element(&self) -> &Element {
        &self.toggle
    }
}

impl ThemeSurface for PageThemeSurface {
    fn has_body_class(&self, class: &str) -> bool {
        self.body.class_list().contains(class)
    }

    fn add_body_class(&self, class: &str) {
        if let Err(err) = self.body.class_list().add_1(class) {
            log::debug!("could not add body class {class}: {}", js_error_message(&err));
        }
    }

    fn toggle_body_class(&self, class: &str) {
        if let Err(err) = self.body.class_list().toggle(class) {
            log::debug!("could not toggle body class {class}: {}", js_error_message(&err));
        }
    }

    fn set_toggle_icon(&self, markup: &str) {
        self.toggle.set_inner_html(markup);
    }
}

/// Click handler body: flip the theme and persist it.
pub fn on_toggle_click(
    surface: &PageThemeSurface,
    store: &impl PreferenceStore,
    config: &UiConfig,
) -> ThemeMode {
    let mode = theme::toggle(surface, store, config);
    log::debug!("theme switched to {mode:?}");
    mode
}

/// Apply the saved theme and wire the toggle control.
///
/// Pages without the toggle control are left untouched; returns `None` then.
pub fn install(doc: &Document, config: &UiConfig) -> Option<ThemeMode> {
    let Some(surface) = PageThemeSurface::locate(doc, config) else {
        log::debug!("no #{} on this page, theme controller skipped", config.toggle_id);
        return None;
    };
    let store = LocalPreferenceStore::new();
    let mode = theme::initialize(&surface, &store, config);

    let target = surface.toggle_element().clone();
    let config = config.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        on_toggle_click(&surface, &store, &config);
    });
    if let Err(err) =
        target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    {
        log::warn!("theme toggle listener not attached: {}", js_error_message(&err));
    }
    // The listener lives as long as the page.
    on_click.forget();

    Some(mode)
}
