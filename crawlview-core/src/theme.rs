//! Light/dark theme state.
//!
//! The body's dark class is the single source of truth once the page is up:
//! [`toggle`] flips the class and then reads it back, so the icon and the
//! persisted flag always follow what is actually rendered.

use crate::config::UiConfig;
use crate::storage::PreferenceStore;

const STORED_TRUE: &str = "true";
const STORED_FALSE: &str = "false";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Interpret a persisted value. Only the exact text `"true"` means dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some(STORED_TRUE) {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn as_stored(self) -> &'static str {
        match self {
            Self::Dark => STORED_TRUE,
            Self::Light => STORED_FALSE,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// The two page elements the theme controller touches: the document body
/// (class list) and the toggle control (icon markup).
pub trait ThemeSurface {
    fn has_body_class(&self, class: &str) -> bool;
    fn add_body_class(&self, class: &str);
    fn toggle_body_class(&self, class: &str);
    fn set_toggle_icon(&self, markup: &str);
}

/// Read the persisted preference; unreadable storage counts as "not set".
pub fn stored_mode(store: &impl PreferenceStore, key: &str) -> ThemeMode {
    match store.get(key) {
        Ok(value) => ThemeMode::from_stored(value.as_deref()),
        Err(err) => {
            log::debug!("theme preference unreadable, using light mode: {err}");
            ThemeMode::Light
        }
    }
}

/// Apply the persisted preference at page load.
///
/// Only a dark preference changes the page; the light look and moon icon are
/// what the markup ships with.
pub fn initialize(
    surface: &impl ThemeSurface,
    store: &impl PreferenceStore,
    config: &UiConfig,
) -> ThemeMode {
    let mode = stored_mode(store, &config.storage_key);
    if mode.is_dark() {
        surface.add_body_class(&config.dark_class);
        surface.set_toggle_icon(config.icons.for_mode(mode));
    }
    log::debug!("theme initialized: {mode:?}");
    mode
}

/// Click handler for the toggle control. Returns the mode now rendered.
///
/// Persistence is best effort: a rejected write is logged and the page keeps
/// the new look for the current view.
pub fn toggle(
    surface: &impl ThemeSurface,
    store: &impl PreferenceStore,
    config: &UiConfig,
) -> ThemeMode {
    surface.toggle_body_class(&config.dark_class);
    let mode = ThemeMode::from_dark(surface.has_body_class(&config.dark_class));
    surface.set_toggle_icon(config.icons.for_mode(mode));
    if let Err(err) = store.set(&config.storage_key, mode.as_stored()) {
        log::warn!("theme preference not persisted: {err}");
    }
    mode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_true_is_dark() {
        assert_eq!(ThemeMode::from_stored(Some("true")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("TRUE")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("1")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("false")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
    }

    #[test]
    fn stored_text_round_trips() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_stored(Some(mode.as_stored())), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }
}
