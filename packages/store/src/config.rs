//! # Client configuration: `lawpal.toml`
//!
//! Where the client finds the LawPal API and how long notifications stay on
//! screen. The web build compiles the defaults in and lets
//! `LAWPAL_BACKEND_URL` (read at build time) override the API location;
//! native builds may also read a `lawpal.toml` file.
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! url = "https://lawpal-backend.onrender.com"
//!
//! [notifications]
//! duration_ms = 3000
//! ```
//!
//! All structs derive `Default` so a missing or empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "https://lawpal-backend.onrender.com";

/// Top-level configuration stored in `lawpal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LawPalConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL without a trailing slash.
    #[serde(default = "default_backend_url")]
    pub url: String,
}

/// Toast notification settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_duration_ms() -> u32 {
    3000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl LawPalConfig {
    /// The defaults with the build-time `LAWPAL_BACKEND_URL` applied.
    pub fn resolve() -> Self {
        Self::default().with_backend_url_override(option_env!("LAWPAL_BACKEND_URL"))
    }

    /// Builder method to point at another API; blank values are ignored.
    pub fn with_backend_url_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.backend.url = url.trim_end_matches('/').to_string();
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "lawpal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.backend.url = config.backend.url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read a config file, falling back to [`LawPalConfig::resolve`] when it
    /// is missing or invalid.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match Self::from_toml(&raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                    Self::resolve()
                }
            },
            Err(_) => Self::resolve(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = LawPalConfig::from_toml("").unwrap();
        assert_eq!(config, LawPalConfig::default());
        assert_eq!(config.backend.url, DEFAULT_BACKEND_URL);
        assert_eq!(config.notifications.duration_ms, 3000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = LawPalConfig::from_toml(
            r#"
            [backend]
            url = "http://localhost:5000/"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.url, "http://localhost:5000");
        assert_eq!(config.notifications.duration_ms, 3000);
    }

    #[test]
    fn test_override_ignores_blank() {
        let config = LawPalConfig::default().with_backend_url_override(Some("  "));
        assert_eq!(config.backend.url, DEFAULT_BACKEND_URL);

        let config = LawPalConfig::default().with_backend_url_override(Some("http://api.test/"));
        assert_eq!(config.backend.url, "http://api.test");
    }

    #[test]
    fn test_toml_output_parses_back() {
        let mut config = LawPalConfig::default();
        config.notifications.duration_ms = 5000;
        let text = config.to_toml().unwrap();
        assert!(text.contains("duration_ms = 5000"));
        assert_eq!(LawPalConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("lawpal_no_such_config.toml");
        let config = LawPalConfig::load_from(&path);
        assert_eq!(config.notifications.duration_ms, 3000);
    }
}
