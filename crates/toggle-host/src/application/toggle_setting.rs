//! ToggleSettingUseCase: toggles a setting between its two candidate states.
//!
//! This use case is the heart of the host application.  It resolves a
//! setting reference, reads the current value from the [`SettingsStore`],
//! consults the toggle table from `toggle-core`, splices the next value
//! into the full setting value, and delegates persistence back to the
//! store.
//!
//! # Architecture
//!
//! The use case depends only on the `SettingsStore` trait and on domain
//! types from `toggle-core`.  The store is injected at construction time,
//! making the use case fully unit-testable; nothing here reads ambient
//! global state.
//!
//! Candidate states are read from the store at the start of every
//! invocation, never cached, so edits to them take effect on the next
//! toggle.  The only suspension point is the final `update` await; if the
//! host issues toggles concurrently and the store does not serialize
//! writes, the last write wins.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use toggle_core::{
    extract, splice, SettingReference, SettingScope, ToggleCandidates, ToggleValue,
};

use crate::application::commands::ToggleCommand;
use crate::application::keys;
use crate::application::store::SettingsStore;

/// Error type for the toggle use case.
///
/// Every variant is a recoverable, user-reportable outcome; none of them
/// aborts the host.
#[derive(Debug, Error)]
pub enum ToggleError {
    /// The command's title entry does not name a setting to toggle.
    #[error("\"{0}\" does not name a setting to toggle")]
    NotConfigured(&'static str),

    /// The resolved key has no value in the effective scope.  Malformed
    /// references (e.g. an empty key after scope-stripping) degrade to this
    /// outcome rather than failing the resolver.
    #[error("\"{key}\" is not a valid setting")]
    KeyNotFound { key: String },

    /// The current sub-value matches neither candidate state; no write is
    /// attempted.
    #[error("state does not match either toggle state; \"{setting}\" cannot be toggled")]
    StateMismatch { setting: String },

    /// The store failed to persist the updated value.
    #[error("failed to persist setting update: {0}")]
    Persist(String),
}

/// Successful toggle outcome, returned for caller-side display.
///
/// `new_full_value` has already been persisted through the store by the
/// time the caller sees this.
#[derive(Debug, Clone)]
pub struct Toggled {
    /// The resolved reference that was toggled.
    pub reference: SettingReference,
    /// The sub-value found before the toggle.
    pub previous: ToggleValue,
    /// The sub-value written by the toggle.
    pub applied: ToggleValue,
    /// The full setting value after splicing in `applied`.
    pub new_full_value: Value,
}

/// The Toggle Setting use case.
pub struct ToggleSettingUseCase {
    store: Arc<dyn SettingsStore>,
}

impl ToggleSettingUseCase {
    /// Creates a new use case instance backed by `store`.
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Toggles the setting a command's title entry points at.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::NotConfigured`] when the title entry is
    /// missing, empty, or not a string, plus everything
    /// [`toggle_reference`](Self::toggle_reference) can return.
    pub async fn toggle_command(&self, command: &ToggleCommand) -> Result<Toggled, ToggleError> {
        let reference = match self.store.get(&SettingScope::Global, command.title_key) {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Err(ToggleError::NotConfigured(command.title_key)),
        };
        debug!(command = command.id, reference, "resolved command title");
        self.toggle_reference(&reference).await
    }

    /// Toggles the setting named by an explicit reference string.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::KeyNotFound`] when the resolved key has no
    /// value in the effective scope, [`ToggleError::StateMismatch`] when
    /// the current sub-value matches neither candidate, and
    /// [`ToggleError::Persist`] when the store rejects the write.
    pub async fn toggle_reference(&self, reference: &str) -> Result<Toggled, ToggleError> {
        let resolved = SettingReference::parse(reference);

        // An empty key (e.g. from a bare "[python]") is indistinguishable
        // from an unknown setting for the user; report it the same way.
        let current_full = if resolved.key.is_empty() {
            None
        } else {
            self.store.get(&resolved.scope, &resolved.key)
        };
        let Some(current_full) = current_full else {
            return Err(ToggleError::KeyNotFound {
                key: resolved.key.clone(),
            });
        };

        let candidates = self.read_candidates();

        let current_sub = match &resolved.sub_path {
            Some(path) => extract(&current_full, path),
            None => Some(&current_full),
        };
        let current = current_sub.and_then(ToggleValue::from_json).ok_or_else(|| {
            ToggleError::StateMismatch {
                setting: resolved.display_key(),
            }
        })?;

        debug!(kind = current.kind(), current = %current, "classifying current value");

        let next = candidates
            .next(&current)
            .cloned()
            .ok_or_else(|| ToggleError::StateMismatch {
                setting: resolved.display_key(),
            })?;

        debug!(next = %next, "toggle table produced next value");

        let new_full_value = match &resolved.sub_path {
            Some(path) => splice(current_full, path, next.to_json()),
            None => next.to_json(),
        };

        // Persistence is the store's job; the engine only hands the value over.
        self.store
            .update(&resolved.scope, &resolved.key, new_full_value.clone(), true)
            .await
            .map_err(ToggleError::Persist)?;

        Ok(Toggled {
            reference: resolved,
            previous: current,
            applied: next,
            new_full_value,
        })
    }

    /// Reads the candidate pair for this invocation.
    ///
    /// Missing or non-primitive entries fall back to the packaged defaults,
    /// so a fresh install toggles between `"state1"` and `"state2"`.
    fn read_candidates(&self) -> ToggleCandidates {
        let read = |key: &str, default: &str| {
            self.store
                .get(&SettingScope::Global, key)
                .as_ref()
                .and_then(ToggleValue::from_json)
                .unwrap_or_else(|| ToggleValue::String(default.to_string()))
        };
        ToggleCandidates::new(
            read(keys::SETTING_STATE_1, keys::STATE_1_DEFAULT),
            read(keys::SETTING_STATE_2, keys::STATE_2_DEFAULT),
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands;
    use crate::infrastructure::settings_store::memory::MemoryStore;
    use serde_json::json;

    fn make_use_case(store: MemoryStore) -> (ToggleSettingUseCase, Arc<MemoryStore>) {
        let store = Arc::new(store);
        let uc = ToggleSettingUseCase::new(Arc::clone(&store) as Arc<dyn SettingsStore>);
        (uc, store)
    }

    // ── Plain toggles ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_toggle_flips_first_candidate_to_second() {
        // Arrange
        let store = MemoryStore::new();
        store.seed(&SettingScope::Global, "mySetting", json!("state1"));
        let (uc, store) = make_use_case(store);

        // Act
        let outcome = uc.toggle_reference("mySetting").await.unwrap();

        // Assert
        assert_eq!(outcome.applied, ToggleValue::String("state2".to_string()));
        assert_eq!(outcome.new_full_value, json!("state2"));
        assert_eq!(store.updates().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_flips_second_candidate_back_to_first() {
        let store = MemoryStore::new();
        store.seed(&SettingScope::Global, "mySetting", json!("state2"));
        let (uc, _) = make_use_case(store);

        let outcome = uc.toggle_reference("mySetting").await.unwrap();

        assert_eq!(outcome.new_full_value, json!("state1"));
    }

    #[tokio::test]
    async fn test_toggle_twice_returns_to_the_original_value() {
        let store = MemoryStore::new();
        store.seed(&SettingScope::Global, "mySetting", json!("state1"));
        let (uc, store) = make_use_case(store);

        uc.toggle_reference("mySetting").await.unwrap();
        uc.toggle_reference("mySetting").await.unwrap();

        assert_eq!(
            store.get(&SettingScope::Global, "mySetting"),
            Some(json!("state1"))
        );
    }

    #[tokio::test]
    async fn test_toggle_boolean_candidates() {
        // Arrange - candidates configured as booleans
        let store = MemoryStore::new();
        store.seed(&SettingScope::Global, keys::SETTING_STATE_1, json!(true));
        store.seed(&SettingScope::Global, keys::SETTING_STATE_2, json!(false));
        store.seed(&SettingScope::Global, "editor.minimap.enabled", json!(true));
        let (uc, _) = make_use_case(store);

        // Act
        let outcome = uc.toggle_reference("editor.minimap.enabled").await.unwrap();

        // Assert
        assert_eq!(outcome.new_full_value, json!(false));
    }

    // ── Abort outcomes ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_unknown_key_aborts_with_key_not_found_and_no_write() {
        let store = MemoryStore::new();
        let (uc, store) = make_use_case(store);

        let err = uc.toggle_reference("missing.setting").await.unwrap_err();

        assert!(matches!(err, ToggleError::KeyNotFound { key } if key == "missing.setting"));
        assert!(store.updates().is_empty(), "no write may occur on abort");
    }

    #[tokio::test]
    async fn test_unrecognized_state_aborts_with_state_mismatch_and_no_write() {
        let store = MemoryStore::new();
        store.seed(&SettingScope::Global, "mySetting", json!("state3"));
        let (uc, store) = make_use_case(store);

        let err = uc.toggle_reference("mySetting").await.unwrap_err();

        assert!(matches!(err, ToggleError::StateMismatch { .. }));
        assert!(store.updates().is_empty());
    }

    #[tokio::test]
    async fn test_container_valued_setting_without_sub_path_is_a_state_mismatch() {
        // The full value is an object; without a sub-path there is nothing
        // primitive to compare
        let store = MemoryStore::new();
        store.seed(&SettingScope::Global, "myObjSetting", json!({"a": 1}));
        let (uc, _) = make_use_case(store);

        let err = uc.toggle_reference("myObjSetting").await.unwrap_err();

        assert!(matches!(err, ToggleError::StateMismatch { .. }));
    }

    #[tokio::test]
    async fn test_scope_with_empty_remainder_degrades_to_key_not_found() {
        let store = MemoryStore::new();
        let (uc, _) = make_use_case(store);

        let err = uc.toggle_reference("[python]").await.unwrap_err();

        assert!(matches!(err, ToggleError::KeyNotFound { key } if key.is_empty()));
    }

    #[tokio::test]
    async fn test_persistence_failure_surfaces_as_persist_error() {
        let store = MemoryStore::failing();
        store.seed(&SettingScope::Global, "mySetting", json!("state1"));
        let (uc, _) = make_use_case(store);

        let err = uc.toggle_reference("mySetting").await.unwrap_err();

        assert!(matches!(err, ToggleError::Persist(_)));
    }

    // ── Scoped references ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_language_scoped_toggle_reads_and_writes_that_scope_only() {
        // Arrange
        let store = MemoryStore::new();
        let python = SettingScope::Language("python".to_string());
        store.seed(&python, "editor.tabSize", json!("state1"));
        store.seed(&SettingScope::Global, "editor.tabSize", json!("state2"));
        let (uc, store) = make_use_case(store);

        // Act
        let outcome = uc.toggle_reference("[python]editor.tabSize").await.unwrap();

        // Assert - the python override toggled, the global value is untouched
        assert_eq!(outcome.new_full_value, json!("state2"));
        assert_eq!(store.get(&python, "editor.tabSize"), Some(json!("state2")));
        let updates = store.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].scope, python);
    }

    // ── Sub-path references ───────────────────────────────────────────────────

    #[tokio::test]
    async fn test_sub_path_toggle_splices_into_the_full_value() {
        // Arrange
        let store = MemoryStore::new();
        store.seed(
            &SettingScope::Global,
            "myObjSetting",
            json!({"flags": {"enabled": "state1"}}),
        );
        let (uc, store) = make_use_case(store);

        // Act
        let outcome = uc
            .toggle_reference("myObjSetting[flags.enabled]")
            .await
            .unwrap();

        // Assert
        assert_eq!(outcome.previous, ToggleValue::String("state1".to_string()));
        assert_eq!(
            outcome.new_full_value,
            json!({"flags": {"enabled": "state2"}})
        );
        assert_eq!(
            store.get(&SettingScope::Global, "myObjSetting"),
            Some(json!({"flags": {"enabled": "state2"}}))
        );
    }

    #[tokio::test]
    async fn test_missing_sub_path_leaf_is_a_state_mismatch() {
        let store = MemoryStore::new();
        store.seed(&SettingScope::Global, "myObjSetting", json!({"flags": {}}));
        let (uc, store) = make_use_case(store);

        let err = uc
            .toggle_reference("myObjSetting[flags.enabled]")
            .await
            .unwrap_err();

        assert!(matches!(err, ToggleError::StateMismatch { .. }));
        assert!(store.updates().is_empty());
    }

    // ── Candidate handling ────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_candidates_are_read_fresh_on_every_invocation() {
        // Arrange - default candidates for the first toggle
        let store = MemoryStore::new();
        store.seed(&SettingScope::Global, "mySetting", json!("state1"));
        let (uc, store) = make_use_case(store);

        uc.toggle_reference("mySetting").await.unwrap();

        // Act - repoint the candidate pair, then toggle again
        store.seed(&SettingScope::Global, keys::SETTING_STATE_1, json!("state2"));
        store.seed(&SettingScope::Global, keys::SETTING_STATE_2, json!("stateX"));
        let outcome = uc.toggle_reference("mySetting").await.unwrap();

        // Assert - the second toggle used the new pair
        assert_eq!(outcome.new_full_value, json!("stateX"));
    }

    #[tokio::test]
    async fn test_zero_does_not_toggle_boolean_candidates() {
        // Kind-aware equality: numeric 0 must not match candidate false
        let store = MemoryStore::new();
        store.seed(&SettingScope::Global, keys::SETTING_STATE_1, json!(true));
        store.seed(&SettingScope::Global, keys::SETTING_STATE_2, json!(false));
        store.seed(&SettingScope::Global, "mySetting", json!(0));
        let (uc, _) = make_use_case(store);

        let err = uc.toggle_reference("mySetting").await.unwrap_err();

        assert!(matches!(err, ToggleError::StateMismatch { .. }));
    }

    // ── Command indirection ───────────────────────────────────────────────────

    #[tokio::test]
    async fn test_toggle_command_follows_the_title_entry() {
        // Arrange
        let store = MemoryStore::new();
        store.seed(
            &SettingScope::Global,
            keys::SETTING_TITLE,
            json!("mySetting"),
        );
        store.seed(&SettingScope::Global, "mySetting", json!("state1"));
        let (uc, _) = make_use_case(store);
        let primary = commands::find("primary").unwrap();

        // Act
        let outcome = uc.toggle_command(primary).await.unwrap();

        // Assert
        assert_eq!(outcome.reference.key, "mySetting");
        assert_eq!(outcome.new_full_value, json!("state2"));
    }

    #[tokio::test]
    async fn test_toggle_command_without_title_entry_is_not_configured() {
        let store = MemoryStore::new();
        let (uc, _) = make_use_case(store);
        let primary = commands::find("primary").unwrap();

        let err = uc.toggle_command(primary).await.unwrap_err();

        assert!(matches!(err, ToggleError::NotConfigured(key) if key == keys::SETTING_TITLE));
    }
}
