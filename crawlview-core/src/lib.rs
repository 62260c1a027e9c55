//! Crawlview page behaviour
//!
//! Platform-agnostic logic behind the crawler dashboard pages: theme state,
//! accessibility rules, and the display formatters the pages call into.
//! The browser bindings live in `crawlview-web`; everything here runs and
//! tests without a DOM.

pub mod a11y;
pub mod config;
pub mod error;
pub mod format;
pub mod numbers;
pub mod storage;
pub mod theme;
pub mod tracking;

// Re-export commonly used types
pub use a11y::{
    ACTIVATION_MARKER_ATTR, LabelTarget, apply_synthesized_labels, is_activation_key,
    synthesized_label,
};
pub use config::{ThemeIcons, UiConfig};
pub use error::{ConfigError, StorageError};
pub use format::{format_byte_size, format_duration, format_elapsed, percentage};
pub use storage::{MemoryStore, PreferenceStore};
pub use theme::{ThemeMode, ThemeSurface, initialize, stored_mode, toggle};
pub use tracking::{TrackedEvent, track_event};
