//! The settings-store port.
//!
//! The toggle engine never touches the real configuration store directly;
//! it reads and persists through this trait, passed in explicitly at
//! construction time.  Production uses the JSON-file adapter in
//! `infrastructure::settings_store`; tests use the in-memory adapter.
//!
//! Reads are synchronous (the store holds its document in memory); the
//! write-back is the one asynchronous operation in a toggle invocation.

use async_trait::async_trait;
use serde_json::Value;
use toggle_core::SettingScope;

/// Trait abstracting the external configuration store.
///
/// Infrastructure implementations persist to disk; test implementations
/// record calls.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns the current value for `key` in `scope`, or `None` when the
    /// key is undefined there.
    ///
    /// A language scope falls back to the global value when its override
    /// section lacks the key, matching the scoped-view semantics of the
    /// original host environment.
    fn get(&self, scope: &SettingScope, key: &str) -> Option<Value>;

    /// Persists a full value for `key` in `scope`.
    ///
    /// `global` selects user-level persistence; the toggle use case always
    /// passes `true`.  Errors are stringly-typed at this boundary and
    /// wrapped into the caller's error type.
    async fn update(
        &self,
        scope: &SettingScope,
        key: &str,
        value: Value,
        global: bool,
    ) -> Result<(), String>;
}
