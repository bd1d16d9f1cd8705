//! Cached copy of the signed-in session.
//!
//! The bearer token and the user record are kept under the well-known keys
//! [`TOKEN_KEY`] and [`USER_KEY`]. The user is stored as JSON and is generic
//! here so this crate does not depend on the API model types.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Typed accessors for the auth values held in a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionCache<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .await
            .filter(|t| !t.trim().is_empty())
    }

    /// The cached user, or `None` when missing or unparsable.
    pub async fn user<U: DeserializeOwned>(&self) -> Option<U> {
        let raw = self.store.get(USER_KEY).await?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable cached user: {}", e);
                None
            }
        }
    }

    /// Cache a fresh login: both token and user.
    pub async fn store_login<U: Serialize>(&self, token: &str, user: &U) -> Result<(), StoreError> {
        let json = serde_json::to_string(user)?;
        self.store.set(TOKEN_KEY, token).await?;
        self.store.set(USER_KEY, &json).await
    }

    /// Replace the cached user, keeping the token.
    pub async fn store_user<U: Serialize>(&self, user: &U) -> Result<(), StoreError> {
        let json = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &json).await
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(TOKEN_KEY).await?;
        self.store.remove(USER_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
    }

    #[tokio::test]
    async fn test_login_then_clear() {
        let cache = SessionCache::new(MemoryStore::new());
        assert!(cache.token().await.is_none());
        assert!(cache.user::<Person>().await.is_none());

        let person = Person { name: "Ada".to_string() };
        cache.store_login("tok", &person).await.unwrap();

        assert_eq!(cache.token().await.as_deref(), Some("tok"));
        assert_eq!(cache.user::<Person>().await, Some(person));

        cache.clear().await.unwrap();
        assert!(cache.token().await.is_none());
        assert!(cache.user::<Person>().await.is_none());
    }

    #[tokio::test]
    async fn test_store_user_keeps_token() {
        let cache = SessionCache::new(MemoryStore::new());
        cache
            .store_login("tok", &Person { name: "Old".to_string() })
            .await
            .unwrap();

        cache
            .store_user(&Person { name: "New".to_string() })
            .await
            .unwrap();

        assert_eq!(cache.token().await.as_deref(), Some("tok"));
        assert_eq!(cache.user::<Person>().await.unwrap().name, "New");
    }

    #[tokio::test]
    async fn test_corrupt_user_reads_as_none() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "{not json").await.unwrap();

        let cache = SessionCache::new(store);
        assert!(cache.user::<Person>().await.is_none());
    }

    #[tokio::test]
    async fn test_blank_token_reads_as_none() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "  ").await.unwrap();

        let cache = SessionCache::new(store);
        assert!(cache.token().await.is_none());
    }
}
