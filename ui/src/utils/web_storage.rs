//! localStorage-backed storage for the web build.

use qrstudio_history::{KeyValueStore, StorageError};

/// Browser localStorage behind the history's storage capability.
///
/// localStorage may be absent entirely (private browsing, storage disabled);
/// reads then report absence and writes fail, which the history store
/// swallows by design.
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not available".to_owned()))?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable("localStorage write rejected".to_owned()))
    }
}
