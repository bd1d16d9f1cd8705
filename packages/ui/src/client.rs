//! Shared handles for the API client, session and document calls.
//!
//! The session cache lives in the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Native**: one file per key via [`store::FileStore`]
//!
//! The app builds one [`AppServices`] at startup and provides it as context;
//! components reach it with [`use_services`].

use api::{DocumentService, LawPalClient, Session};
use dioxus::prelude::*;
use store::LawPalConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

pub type AppSession = Session<LawPalClient, PlatformStore>;
pub type AppDocuments = DocumentService<LawPalClient, PlatformStore>;

pub fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::default_location()
    }
}

/// Client configuration for this build.
pub fn app_config() -> LawPalConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = std::path::Path::new(LawPalConfig::filename());
        if path.exists() {
            return LawPalConfig::load_from(path);
        }
    }
    LawPalConfig::resolve()
}

/// Config plus the session and document handles, all sharing one HTTP client
/// and one store.
#[derive(Clone)]
pub struct AppServices {
    pub config: LawPalConfig,
    pub session: AppSession,
    pub documents: AppDocuments,
}

impl AppServices {
    pub fn new() -> Self {
        let config = app_config();
        let client = LawPalClient::from_config(&config);
        let store = platform_store();
        tracing::info!("Using LawPal API at {}", config.backend.url);
        Self {
            session: Session::new(client.clone(), store.clone()),
            documents: DocumentService::new(client, store),
            config,
        }
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}
