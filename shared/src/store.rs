//! Persistent UI State
//!
//! A small key-value interface for client-local UI state (collapsed groups,
//! expanded panels). The browser implementation lives in the UI crate; the
//! in-memory one here backs tests and environments without `localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Key of the persisted "saved searches panel expanded" toggle
pub const SEARCH_PANEL_EXPANDED_KEY: &str = "isSearchExpanded";

/// Key of the persisted "dashboards panel expanded" toggle
pub const DASHBOARDS_PANEL_EXPANDED_KEY: &str = "isDashboardsExpanded";

/// Errors raised when writing UI state
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize value for {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// JSON key-value store
///
/// Each key is independent; there is no schema versioning. Implementations
/// use interior mutability since the UI runs on a single thread.
pub trait KeyValueStore {
    /// Read a value, `None` if the key was never written or is unreadable
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a value
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Shared handle to a store, injected into every stateful component
pub type SharedStore = Rc<dyn KeyValueStore>;

/// Read a typed value; malformed stored values read as absent
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let value = store.get(key)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!(key, error = %e, "Ignoring malformed stored value");
            None
        }
    }
}

/// Write a typed value
pub fn save<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let value = serde_json::to_value(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, value)
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a shared handle
    pub fn shared() -> SharedStore {
        Rc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

/// A persisted boolean toggle such as "search panel expanded"
pub struct PersistedFlag {
    store: SharedStore,
    key: String,
    value: bool,
}

impl PersistedFlag {
    /// Load the flag, falling back to `default` when absent
    pub fn load(store: SharedStore, key: impl Into<String>, default: bool) -> Self {
        let key = key.into();
        let value = load::<bool>(store.as_ref(), &key).unwrap_or(default);
        Self { store, key, value }
    }

    pub fn get(&self) -> bool {
        self.value
    }

    /// Flip the flag and persist it, returning the new value
    ///
    /// The in-memory value changes even when the write fails.
    pub fn toggle(&mut self) -> Result<bool, StoreError> {
        self.value = !self.value;
        save(self.store.as_ref(), &self.key, &self.value)?;
        Ok(self.value)
    }
}
