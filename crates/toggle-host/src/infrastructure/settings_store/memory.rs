//! In-memory settings store for unit and integration testing.
//!
//! Holds a [`SettingsDocument`] behind a mutex and records every update it
//! receives, so tests can assert both the resulting document state and the
//! exact write traffic.  `failing()` builds a store whose updates are
//! rejected, for exercising the persistence-failure path.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use toggle_core::SettingScope;

use super::document::SettingsDocument;
use crate::application::store::SettingsStore;

/// One recorded `update` call.
#[derive(Debug, Clone)]
pub struct RecordedUpdate {
    pub scope: SettingScope,
    pub key: String,
    pub value: Value,
    pub global: bool,
}

/// An in-memory [`SettingsStore`] that records update calls.
pub struct MemoryStore {
    document: Mutex<SettingsDocument>,
    updates: Mutex<Vec<RecordedUpdate>>,
    fail_updates: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_document(SettingsDocument::new())
    }

    /// Creates a store seeded with an existing document.
    pub fn with_document(document: SettingsDocument) -> Self {
        Self {
            document: Mutex::new(document),
            updates: Mutex::new(Vec::new()),
            fail_updates: false,
        }
    }

    /// Creates a store whose `update` calls fail.
    pub fn failing() -> Self {
        Self {
            fail_updates: true,
            ..Self::new()
        }
    }

    /// Seeds a value directly into the document, bypassing update recording.
    pub fn seed(&self, scope: &SettingScope, key: &str, value: Value) {
        self.document
            .lock()
            .expect("lock poisoned")
            .set(scope, key, value);
    }

    /// Returns all recorded update calls in order.
    pub fn updates(&self) -> Vec<RecordedUpdate> {
        self.updates.lock().expect("lock poisoned").clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
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
        global: bool,
    ) -> Result<(), String> {
        if self.fail_updates {
            return Err("injected failure".to_string());
        }
        self.document
            .lock()
            .expect("lock poisoned")
            .set(scope, key, value.clone());
        self.updates.lock().expect("lock poisoned").push(RecordedUpdate {
            scope: scope.clone(),
            key: key.to_string(),
            value,
            global,
        });
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_mutates_the_document_and_records_the_call() {
        // Arrange
        let store = MemoryStore::new();
        let global = SettingScope::Global;

        // Act
        store
            .update(&global, "mySetting", json!("state2"), true)
            .await
            .expect("update should succeed");

        // Assert
        assert_eq!(store.get(&global, "mySetting"), Some(json!("state2")));
        let updates = store.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].key, "mySetting");
        assert!(updates[0].global);
    }

    #[tokio::test]
    async fn test_failing_store_rejects_updates_without_mutating() {
        // Arrange
        let store = MemoryStore::failing();
        let global = SettingScope::Global;

        // Act
        let result = store.update(&global, "mySetting", json!("x"), true).await;

        // Assert
        assert!(result.is_err());
        assert_eq!(store.get(&global, "mySetting"), None);
        assert!(store.updates().is_empty());
    }

    #[test]
    fn test_seed_does_not_record_an_update() {
        let store = MemoryStore::new();
        store.seed(&SettingScope::Global, "mySetting", json!("state1"));

        assert_eq!(
            store.get(&SettingScope::Global, "mySetting"),
            Some(json!("state1"))
        );
        assert!(store.updates().is_empty());
    }
}
