//! TOML-based configuration for the host application itself.
//!
//! Reads and writes [`HostConfig`] to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\SettingToggle\config.toml`
//! - Linux:    `~/.config/setting-toggle/config.toml`
//! - macOS:    `~/Library/Application Support/SettingToggle/config.toml`
//!
//! This is the host's own configuration (log level, settings-file location,
//! status glyphs), not the settings document the toggles operate on; that
//! lives in `settings_store`.
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return
//! value of `some_fn()` when the field is absent from the TOML file, so the
//! host works on first run (before a config file exists) and when upgrading
//! from an older config file missing newer fields.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::status::StatusGlyphs;

/// Error type for host configuration file operations.
#[derive(Debug, Error)]
pub enum HostConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level host configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HostConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// General host behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Overrides the settings-document location.  Absent means the default
    /// `settings.json` next to this config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_path: Option<PathBuf>,
}

/// Status-line rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Glyph appended to the label when a boolean setting is on.
    #[serde(default = "default_glyph_on")]
    pub glyph_on: String,
    /// Glyph appended to the label when a boolean setting is off.
    #[serde(default = "default_glyph_off")]
    pub glyph_off: String,
}

impl DisplayConfig {
    /// The glyph pair in the form the status presenter consumes.
    pub fn glyphs(&self) -> StatusGlyphs {
        StatusGlyphs {
            on: self.glyph_on.clone(),
            off: self.glyph_off.clone(),
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_glyph_on() -> String {
    "on".to_string()
}
fn default_glyph_off() -> String {
    "off".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            settings_path: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            glyph_on: default_glyph_on(),
            glyph_off: default_glyph_off(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`HostConfigError::NoPlatformConfigDir`] when the platform config
/// base directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, HostConfigError> {
    platform_config_dir().ok_or(HostConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`HostConfigError::NoPlatformConfigDir`] if the base directory
/// cannot be determined.
pub fn config_file_path() -> Result<PathBuf, HostConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `HostConfig` from disk, returning `HostConfig::default()` if the
/// file does not yet exist.
///
/// # Errors
///
/// Returns [`HostConfigError::Io`] for file-system errors other than "not
/// found", and [`HostConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<HostConfig, HostConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: HostConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HostConfig::default()),
        Err(e) => Err(HostConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk.
///
/// Creates the config directory and file if they do not exist.
///
/// # Errors
///
/// Returns [`HostConfigError::Io`] for file-system failures or
/// [`HostConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &HostConfig) -> Result<(), HostConfigError> {
    let path = config_file_path()?;

    // Ensure directory exists before writing.
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| HostConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| HostConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory for this application.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("SettingToggle"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("setting-toggle"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/SettingToggle
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("SettingToggle")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        // Fallback for unsupported platforms.
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
