//! `localStorage` behind the core [`PreferenceStore`] seam.

use crawlview_core::{PreferenceStore, StorageError};
use web_sys::Storage;

use crate::dom::{js_error_message, local_storage};

/// Browser-backed preference store.
///
/// The storage handle is resolved once; when the browser refuses access every
/// call reports [`StorageError::Unavailable`] and callers fall back to defaults.
pub struct LocalPreferenceStore {
    storage: Option<Storage>,
}

impl LocalPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        let storage = match local_storage() {
            Ok(storage) => Some(storage),
            Err(err) => {
                log::debug!("localStorage not available: {err}");
                None
            }
        };
        Self { storage }
    }

    fn handle(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl Default for LocalPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.handle()?
            .get_item(key)
            .map_err(|err| StorageError::Read(js_error_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.handle()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(js_error_message(&err)))
    }
}
