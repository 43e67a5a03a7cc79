//! JSON-file settings store.
//!
//! The production [`SettingsStore`] adapter.  The settings document lives in
//! a single `settings.json` (by default next to the host's `config.toml`),
//! is read once when the store opens, and is rewritten on every update.
//! Reads are served from memory; the document mutex serializes this store's
//! own mutations, but no cross-process locking is attempted, so concurrent
//! hosts follow last-write-wins.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use toggle_core::SettingScope;
use tracing::debug;

use super::document::SettingsDocument;
use crate::application::store::SettingsStore;
use crate::infrastructure::host_config;

/// Error type for settings-file operations.
#[derive(Debug, Error)]
pub enum SettingsFileError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings JSON could not be parsed or serialized.
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A [`SettingsStore`] backed by one JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    document: Mutex<SettingsDocument>,
}

impl JsonFileStore {
    /// Opens the store at `path`, reading the existing document.
    ///
    /// A missing file is not an error; it yields an empty document that is
    /// created on the first update.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsFileError::Io`] for file-system errors other than
    /// "not found", and [`SettingsFileError::Json`] if the file is malformed.
    pub fn open(path: PathBuf) -> Result<Self, SettingsFileError> {
        let document = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SettingsDocument::new(),
            Err(e) => {
                return Err(SettingsFileError::Io {
                    path,
                    source: e,
                })
            }
        };
        debug!(path = %path.display(), "settings document opened");
        Ok(Self {
            path,
            document: Mutex::new(document),
        })
    }

    /// Opens the store at the platform default location.
    ///
    /// # Errors
    ///
    /// Everything [`open`](Self::open) returns, plus
    /// [`SettingsFileError::NoPlatformConfigDir`].
    pub fn open_default() -> Result<Self, SettingsFileError> {
        Self::open(Self::default_settings_path()?)
    }

    /// The platform default settings-file path.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsFileError::NoPlatformConfigDir`] when the base
    /// directory cannot be determined.
    pub fn default_settings_path() -> Result<PathBuf, SettingsFileError> {
        host_config::config_dir()
            .map(|dir| dir.join("settings.json"))
            .map_err(|_| SettingsFileError::NoPlatformConfigDir)
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes the current document, applying `mutate` first.
    fn render_with<F>(&self, mutate: F) -> Result<String, SettingsFileError>
    where
        F: FnOnce(&mut SettingsDocument),
    {
        let mut doc = self.document.lock().expect("lock poisoned");
        mutate(&mut doc);
        Ok(serde_json::to_string_pretty(&*doc)?)
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    fn get(&self, scope: &SettingScope, key: &str) -> Option<Value> {
        self.document
            .lock()
            .expect("lock poisoned")
            .get(scope, key)
            .cloned()
    }

    async fn update(
        &self,
        scope: &SettingScope,
        key: &str,
        value: Value,
        _global: bool,
    ) -> Result<(), String> {
        // Mutate and render under the lock, write without it.
        let content = self
            .render_with(|doc| doc.set(scope, key, value))
            .map_err(|e| e.to_string())?;

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(|source| {
                SettingsFileError::Io {
                    path: dir.to_path_buf(),
                    source,
                }
                .to_string()
            })?;
        }
        tokio::fs::write(&self.path, content).await.map_err(|source| {
            SettingsFileError::Io {
                path: self.path.clone(),
                source,
            }
            .to_string()
        })?;

        debug!(path = %self.path.display(), key, "settings document persisted");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
