//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each value in
//! its own file. Native builds use it so a signed-in session survives restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token        # bearer token
//! └── user         # cached user JSON
//! ```
//!
//! ## Platform data directories
//!
//! [`FileStore::default_location`] resolves `<data_dir>/lawpal` via [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/lawpal/` |
//! | Linux | `~/.local/share/lawpal/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\lawpal\` |

use std::path::PathBuf;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// A store rooted at the platform data directory.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lawpal");
        Self::new(base)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(file)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
