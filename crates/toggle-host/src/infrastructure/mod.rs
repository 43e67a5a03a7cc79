//! Infrastructure adapters for the Setting Toggle host.
//!
//! Everything that touches the outside world lives here:
//!
//! - **`settings_store`** – Implementations of the `SettingsStore` port:
//!   the JSON-file store used in production and the in-memory store used
//!   by tests.
//! - **`host_config`** – The host's own TOML configuration file (log level,
//!   settings-file location, status glyphs).

pub mod host_config;
pub mod settings_store;
