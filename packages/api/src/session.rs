//! Sign-in state: the auth calls plus the cached token and user.
//!
//! | Operation                | Remote call          | Cache afterwards        |
//! |--------------------------|----------------------|-------------------------|
//! | `login` / `register`     | auth endpoint        | token + user written    |
//! | `logout`                 | none                 | both removed            |
//! | `update_profile`         | `PUT /api/user/update` | user replaced         |
//! | `upload_profile_picture` | multipart upload     | user replaced           |
//! | `change_password`        | `PUT /api/user/password` | untouched           |
//!
//! A failed call never touches the cache. Cache write failures after a
//! successful call are logged; the call still succeeds.

use store::{KeyValueStore, SessionCache};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    Credentials, PasswordChange, ProfilePicture, ProfileUpdate, Registration, UserInfo,
};

/// A restored or freshly established sign-in.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Clone)]
pub struct Session<B: Backend, S: KeyValueStore> {
    backend: B,
    cache: SessionCache<S>,
}

impl<B: Backend, S: KeyValueStore> Session<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            cache: SessionCache::new(store),
        }
    }

    /// The cached sign-in, if both token and user are present.
    pub async fn restore(&self) -> Option<SignedIn> {
        let token = self.cache.token().await?;
        let user = self.cache.user::<UserInfo>().await?;
        Some(SignedIn { token, user })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SignedIn, ApiError> {
        let credentials = Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = self.backend.login(&credentials).await?;
        tracing::info!("Signed in as {}", response.user.email);
        self.remember(&response.token, &response.user).await;
        Ok(SignedIn {
            token: response.token,
            user: response.user,
        })
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignedIn, ApiError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(ApiError::Validation("Please fill in all fields.".to_string()));
        }
        let registration = Registration {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = self.backend.register(&registration).await?;
        tracing::info!("Registered {}", response.user.email);
        self.remember(&response.token, &response.user).await;
        Ok(SignedIn {
            token: response.token,
            user: response.user,
        })
    }

    pub async fn logout(&self) {
        if let Err(e) = self.cache.clear().await {
            tracing::warn!("Failed to clear cached session: {}", e);
        }
        tracing::info!("Signed out");
    }

    pub async fn update_profile(&self, name: &str, email: &str) -> Result<UserInfo, ApiError> {
        let token = self.token().await?;
        let update = ProfileUpdate {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        };
        let user = self.backend.update_profile(&token, &update).await?;
        self.remember_user(&user).await;
        Ok(user)
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let token = self.token().await?;
        let change = PasswordChange {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.backend.change_password(&token, &change).await
    }

    pub async fn upload_profile_picture(
        &self,
        picture: ProfilePicture,
    ) -> Result<UserInfo, ApiError> {
        let token = self.token().await?;
        let user = self.backend.upload_profile_picture(&token, picture).await?;
        self.remember_user(&user).await;
        Ok(user)
    }

    async fn token(&self) -> Result<String, ApiError> {
        self.cache.token().await.ok_or(ApiError::Unauthenticated)
    }

    async fn remember(&self, token: &str, user: &UserInfo) {
        if let Err(e) = self.cache.store_login(token, user).await {
            tracing::warn!("Failed to cache session: {}", e);
        }
    }

    async fn remember_user(&self, user: &UserInfo) {
        if let Err(e) = self.cache.store_user(user).await {
            tracing::warn!("Failed to cache user: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBackend, TOKEN};
    use store::MemoryStore;

    fn session() -> (Session<FakeBackend, MemoryStore>, FakeBackend) {
        let backend = FakeBackend::new();
        (Session::new(backend.clone(), MemoryStore::new()), backend)
    }

    #[tokio::test]
    async fn test_login_caches_token_and_user() {
        let (session, _) = session();
        assert!(session.restore().await.is_none());

        let signed_in = session.login(" jane@law.example ", "secret").await.unwrap();
        assert_eq!(signed_in.token, TOKEN);

        let restored = session.restore().await.unwrap();
        assert_eq!(restored, signed_in);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_cache_empty() {
        let (session, backend) = session();
        backend.fail("login");

        let err = session.login("jane@law.example", "wrong").await.unwrap_err();
        assert_eq!(err.user_message("Login failed"), "login exploded");
        assert!(session.restore().await.is_none());
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        let (session, backend) = session();

        let err = session.register("", "a@b.c", "pw").await.unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields.");
        assert!(backend.calls().is_empty());

        let signed_in = session.register("Ada", "ada@law.example", "pw").await.unwrap();
        assert_eq!(signed_in.user.name, "Ada");
        assert_eq!(session.restore().await.unwrap().user.name, "Ada");
    }

    #[tokio::test]
    async fn test_logout_clears_cache() {
        let (session, _) = session();
        session.login("jane@law.example", "secret").await.unwrap();

        session.logout().await;
        assert!(session.restore().await.is_none());
    }

    #[tokio::test]
    async fn test_profile_calls_need_a_token() {
        let (session, backend) = session();

        let err = session.update_profile("Jane", "jane@law.example").await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_profile_replaces_cached_user() {
        let (session, backend) = session();
        session.login("jane@law.example", "secret").await.unwrap();

        let user = session.update_profile("Jane Q", "jq@law.example").await.unwrap();
        assert_eq!(user.name, "Jane Q");

        let restored = session.restore().await.unwrap();
        assert_eq!(restored.user.email, "jq@law.example");
        assert_eq!(restored.token, TOKEN);
        assert_eq!(backend.tokens_seen(), vec![TOKEN.to_string()]);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_cached_user() {
        let (session, backend) = session();
        session.login("jane@law.example", "secret").await.unwrap();
        backend.fail("update_profile");

        assert!(session.update_profile("X", "x@law.example").await.is_err());
        assert_eq!(session.restore().await.unwrap().user.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_upload_picture_updates_cached_user() {
        let (session, _) = session();
        session.login("jane@law.example", "secret").await.unwrap();

        let picture = ProfilePicture::from_file("me.png", vec![1, 2, 3]);
        let user = session.upload_profile_picture(picture).await.unwrap();
        assert_eq!(user.profile_pic.as_deref(), Some("/uploads/me.png"));
        assert_eq!(
            session.restore().await.unwrap().user.profile_pic.as_deref(),
            Some("/uploads/me.png")
        );
    }

    #[tokio::test]
    async fn test_change_password_leaves_cache_alone() {
        let (session, backend) = session();
        let before = session.login("jane@law.example", "secret").await.unwrap();

        session.change_password("secret", "new-secret").await.unwrap();
        assert_eq!(session.restore().await.unwrap(), before);
        assert_eq!(backend.call_count("change_password"), 1);
    }
}
