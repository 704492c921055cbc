use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use log::{debug, error, warn};
use crate::models::filters::FilterSpec;

const FILTERS_KEY: &str = "esports-dashboard-filters";
const THEME_KEY: &str = "esports-dashboard-theme";
const THEME_DARK: &str = "dark";
const THEME_LIGHT: &str = "light";

/// Storage keys for persisted preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Filters,
    Theme,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Filters => FILTERS_KEY,
            StorageKey::Theme => THEME_KEY,
        }
    }
}

/// Storage error types
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StorageError {
    #[error("Storage not available: {0}")]
    NotAvailable(String),

    #[error("Failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// String key/value storage the preferences are kept in
pub trait PreferenceBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads and writes the dashboard's two persisted preferences.
///
/// Nothing here returns an error to the caller: failed reads fall back to
/// defaults and failed writes are logged and dropped.
pub struct PreferenceStore<B: PreferenceBackend> {
    backend: B,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Stored filters merged over the defaults, or the defaults alone when
    /// nothing usable is stored
    pub fn get_filter_spec(&self) -> FilterSpec {
        match self.try_get_filter_spec() {
            Ok(Some(spec)) => spec,
            Ok(None) => FilterSpec::default(),
            Err(e) => {
                error!("Error loading filters: {}", e);
                FilterSpec::default()
            }
        }
    }

    /// Replaces the stored filters with `spec`
    pub fn save_filter_spec(&self, spec: &FilterSpec) {
        let result = serde_json::to_string(spec)
            .map_err(|e| StorageError::Serialization(e.to_string()))
            .and_then(|json| self.backend.set_item(StorageKey::Filters.as_str(), &json));

        match result {
            Ok(()) => debug!("Saved filters: {:?}", spec),
            Err(e) => error!("Error saving filters: {}", e),
        }
    }

    /// Stored theme, or `prefers_dark()` when none is stored, the stored
    /// value is empty, or it can't be read
    pub fn get_theme_flag(&self, prefers_dark: impl FnOnce() -> bool) -> bool {
        match self.backend.get_item(StorageKey::Theme.as_str()) {
            Ok(Some(value)) if !value.is_empty() => value == THEME_DARK,
            Ok(_) => prefers_dark(),
            Err(e) => {
                error!("Error loading theme: {}", e);
                prefers_dark()
            }
        }
    }

    pub fn save_theme_flag(&self, dark_mode: bool) {
        let value = if dark_mode { THEME_DARK } else { THEME_LIGHT };
        if let Err(e) = self.backend.set_item(StorageKey::Theme.as_str(), value) {
            error!("Error saving theme: {}", e);
        }
    }

    fn try_get_filter_spec(&self) -> Result<Option<FilterSpec>, StorageError> {
        let Some(raw) = self.backend.get_item(StorageKey::Filters.as_str())? else {
            return Ok(None);
        };
        if raw.is_empty() {
            warn!("Stored filters are empty, using defaults");
            return Ok(None);
        }
        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| StorageError::Deserialization(e.to_string()))?;
        Ok(Some(FilterSpec::merged_over_defaults(&value)))
    }
}

/// In-memory backend; can be switched off to behave like an unavailable store
#[derive(Debug)]
pub struct MemoryBackend {
    items: RefCell<HashMap<String, String>>,
    available: Cell<bool>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            items: RefCell::new(HashMap::new()),
            available: Cell::new(true),
        }
    }

    pub fn with_item(self, key: StorageKey, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.as_str().to_string(), value.to_string());
        self
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn raw(&self, key: StorageKey) -> Option<String> {
        self.items.borrow().get(key.as_str()).cloned()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.available.get() {
            Ok(())
        } else {
            Err(StorageError::NotAvailable("memory backend disabled".to_string()))
        }
    }
}

impl PreferenceBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
