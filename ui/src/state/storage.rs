//! Browser-backed key-value store
//!
//! Persisted UI state (panel and group collapse flags) lives in
//! `localStorage`. Private browsing modes can refuse storage entirely; the
//! app then keeps state in memory for the session.

use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use serde_json::Value;

use beacon_shared::{KeyValueStore, MemoryStore, SharedStore, StoreError};

/// `localStorage` as a [`KeyValueStore`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<Value> {
        LocalStorage::get::<Value>(key).ok()
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        LocalStorage::set(key, value).map_err(|e| StoreError::Backend(e.to_string()))
    }
}

/// Whether this window exposes a usable `localStorage`
fn local_storage_available() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .is_some()
}

/// Store for the running page
pub fn browser_store() -> SharedStore {
    if local_storage_available() {
        Rc::new(LocalStore)
    } else {
        tracing::warn!("localStorage unavailable, UI state will not survive a reload");
        MemoryStore::shared()
    }
}
