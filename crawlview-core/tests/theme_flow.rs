use std::cell::RefCell;
use std::collections::BTreeSet;

use crawlview_core::{
    MemoryStore, PreferenceStore, ThemeMode, ThemeSurface, UiConfig, initialize, toggle,
};

const MARKUP_ICON: &str = r#"<i class="fas fa-moon"></i>"#;

/// Body class list plus toggle icon, as authored in the dashboard template.
struct FakePage {
    body_classes: RefCell<BTreeSet<String>>,
    icon: RefCell<String>,
}

impl FakePage {
    fn new() -> Self {
        Self {
            body_classes: RefCell::new(BTreeSet::new()),
            icon: RefCell::new(MARKUP_ICON.to_string()),
        }
    }

    fn icon(&self) -> String {
        self.icon.borrow().clone()
    }
}

impl ThemeSurface for FakePage {
    fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.borrow().contains(class)
    }

    fn add_body_class(&self, class: &str) {
        self.body_classes.borrow_mut().insert(class.to_string());
    }

    fn toggle_body_class(&self, class: &str) {
        let mut classes = self.body_classes.borrow_mut();
        if !classes.remove(class) {
            classes.insert(class.to_string());
        }
    }

    fn set_toggle_icon(&self, markup: &str) {
        *self.icon.borrow_mut() = markup.to_string();
    }
}

#[test]
fn saved_dark_preference_is_applied_on_load() {
    let cfg = UiConfig::default();
    let page = FakePage::new();
    let store = MemoryStore::with_entry("darkMode", "true");

    let mode = initialize(&page, &store, &cfg);

    assert_eq!(mode, ThemeMode::Dark);
    assert!(page.has_body_class("dark-mode"));
    assert!(page.icon().contains("fa-sun"), "icon should offer light mode");
}

#[test]
fn absent_or_other_preference_leaves_markup_alone() {
    let cfg = UiConfig::default();
    for store in [
        MemoryStore::new(),
        MemoryStore::with_entry("darkMode", "false"),
        MemoryStore::with_entry("darkMode", "yes"),
    ] {
        let page = FakePage::new();
        assert_eq!(initialize(&page, &store, &cfg), ThemeMode::Light);
        assert!(!page.has_body_class("dark-mode"));
        assert_eq!(page.icon(), MARKUP_ICON);
    }
}

#[test]
fn toggling_twice_restores_page_and_storage() {
    let cfg = UiConfig::default();
    let page = FakePage::new();
    let store = MemoryStore::new();
    initialize(&page, &store, &cfg);

    assert_eq!(toggle(&page, &store, &cfg), ThemeMode::Dark);
    assert!(page.has_body_class("dark-mode"));
    assert!(page.icon().contains("fa-sun"));
    assert_eq!(store.peek("darkMode").as_deref(), Some("true"));

    assert_eq!(toggle(&page, &store, &cfg), ThemeMode::Light);
    assert!(!page.has_body_class("dark-mode"));
    assert!(page.icon().contains("fa-moon"));
    assert_eq!(store.peek("darkMode").as_deref(), Some("false"));
}

#[test]
fn toggle_follows_the_rendered_class() {
    let cfg = UiConfig::default();
    let page = FakePage::new();
    let store = MemoryStore::new();
    // Another script already switched the page to dark behind our back.
    page.add_body_class("dark-mode");

    assert_eq!(toggle(&page, &store, &cfg), ThemeMode::Light);
    assert_eq!(store.peek("darkMode").as_deref(), Some("false"));
}

#[test]
fn unavailable_storage_degrades_to_light_and_still_toggles() {
    let cfg = UiConfig::default();
    let page = FakePage::new();
    let store = MemoryStore::with_entry("darkMode", "true");
    store.set_unavailable(true);

    assert_eq!(initialize(&page, &store, &cfg), ThemeMode::Light);
    assert!(!page.has_body_class("dark-mode"));

    assert_eq!(toggle(&page, &store, &cfg), ThemeMode::Dark);
    assert!(page.has_body_class("dark-mode"), "visual state still updates");
    assert_eq!(store.peek("darkMode").as_deref(), Some("true"), "write was dropped");
}

#[test]
fn configured_storage_key_is_used() {
    let cfg = UiConfig {
        storage_key: "crawler.theme.dark".to_string(),
        ..UiConfig::default()
    };
    let page = FakePage::new();
    let store = MemoryStore::with_entry("darkMode", "true");

    assert_eq!(initialize(&page, &store, &cfg), ThemeMode::Light);
    toggle(&page, &store, &cfg);
    assert_eq!(
        store.get("crawler.theme.dark").unwrap().as_deref(),
        Some("true")
    );
    assert_eq!(store.peek("darkMode").as_deref(), Some("true"));
}
