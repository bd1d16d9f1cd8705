//! # Key/value store: the persistence seam of the client
//!
//! The browser client caches a handful of small string values between visits
//! (the bearer token and a JSON copy of the signed-in user). Every backend
//! implements [`KeyValueStore`], so the session logic in the `api` crate runs
//! unchanged against:
//!
//! | Backend | Where | Used by |
//! |---------|-------|---------|
//! | [`crate::MemoryStore`] | process memory | tests, native fallback |
//! | `FileStore` | one file per key under a base directory | native builds |
//! | `LocalStorageStore` | `window.localStorage` | the web build |
//!
//! Reads return `None` for a missing or unreadable key. Writes report failures
//! so callers can decide whether a cache miss matters; the server stays the
//! source of truth either way.

use crate::error::StoreError;

/// Async trait for storing small string values by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
