//! # Browser `localStorage` store: web-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used by the web build. Values
//! live in `window.localStorage` under their plain keys, so the cached token
//! and user survive page reloads the same way a plain browser client keeps them.
//!
//! ## Error handling
//!
//! Reads swallow errors and return `None`: a browser with storage disabled
//! behaves like a signed-out visitor. Writes surface
//! [`StoreError::Unavailable`] so the caller can log it.

use web_sys::Storage;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok()?
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
