//! Page wiring configuration injected at startup.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::ThemeMode;

pub const DEFAULT_STORAGE_KEY: &str = "darkMode";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle-btn";
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";
pub const DEFAULT_INTERACTIVE_SELECTOR: &str = "a, button, input, select, [tabindex=\"0\"]";
pub const DEFAULT_UNLABELED_BUTTON_SELECTOR: &str = "button:not([aria-label])";

/// Icon markup placed inside the toggle control.
///
/// The icon advertises the mode a click switches *to*: a sun while dark, a
/// moon while light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeIcons {
    pub to_light: String,
    pub to_dark: String,
}

impl Default for ThemeIcons {
    fn default() -> Self {
        Self {
            to_light: r#"<i class="fas fa-sun"></i>"#.to_string(),
            to_dark: r#"<i class="fas fa-moon"></i>"#.to_string(),
        }
    }
}

impl ThemeIcons {
    /// Markup to show while the page is in `mode`.
    #[must_use]
    pub fn for_mode(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Dark => &self.to_light,
            ThemeMode::Light => &self.to_dark,
        }
    }
}

/// Names the DOM contract and storage key the page behaviour relies on.
///
/// Every field has a default matching the dashboard templates, so a page may
/// override any subset through its JSON config block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub storage_key: String,
    pub toggle_id: String,
    pub dark_class: String,
    pub icons: ThemeIcons,
    pub interactive_selector: String,
    pub unlabeled_button_selector: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            icons: ThemeIcons::default(),
            interactive_selector: DEFAULT_INTERACTIVE_SELECTOR.to_string(),
            unlabeled_button_selector: DEFAULT_UNLABELED_BUTTON_SELECTOR.to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] when the text is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
