//! Browser side of the preference store.
//!
//! `gloo_storage::LocalStorage::raw()` panics when storage is disabled
//! (private browsing, sandboxed iframes), so every access first checks that
//! `window.localStorage` can actually be obtained.

use gloo_storage::{LocalStorage, Storage};
use log::warn;
use shared::{PreferenceBackend, PreferenceStore, StorageError};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`, read and written as plain strings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn is_available() -> bool {
        matches!(
            web_sys::window().map(|window| window.local_storage()),
            Some(Ok(Some(_)))
        )
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        if Self::is_available() {
            Ok(LocalStorage::raw())
        } else {
            Err(StorageError::NotAvailable("window.localStorage is not accessible".to_string()))
        }
    }
}

impl PreferenceBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Preference store backed by the browser's local storage
pub fn browser_store() -> PreferenceStore<LocalStorageBackend> {
    if !LocalStorageBackend::is_available() {
        warn!("localStorage unavailable, preferences will not persist");
    }
    PreferenceStore::new(LocalStorageBackend)
}

/// Whether the environment asks for a dark color scheme; false when it can't be determined
pub fn prefers_dark_color_scheme() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map_or(false, |query| query.matches())
}
