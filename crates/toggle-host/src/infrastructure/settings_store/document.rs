//! The settings document model.
//!
//! A settings document is one JSON object.  Global values live at the top
//! level under dotted keys; per-language overrides live inside sections
//! whose names carry the bracket form of the scope prefix:
//!
//! ```json
//! {
//!   "editor.tabSize": 4,
//!   "toggle.settingState1": "state1",
//!   "[python]": { "editor.tabSize": 2 }
//! }
//! ```
//!
//! Scoped reads fall back to the global value when the language section
//! lacks the key; scoped writes always land inside the language section.
//! Both adapters (file-backed and in-memory) share this model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use toggle_core::SettingScope;

/// One settings document: top-level entries plus language sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDocument {
    entries: serde_json::Map<String, Value>,
}

impl SettingsDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The section name a language scope is stored under, e.g. `"[python]"`.
    fn section_name(language: &str) -> String {
        format!("[{language}]")
    }

    /// Reads the value for `key` in `scope`.
    ///
    /// Language scopes consult their section first and fall back to the
    /// global entry, so an override shadows without having to duplicate
    /// every setting.
    pub fn get(&self, scope: &SettingScope, key: &str) -> Option<&Value> {
        match scope {
            SettingScope::Global => self.entries.get(key),
            SettingScope::Language(language) => self
                .entries
                .get(&Self::section_name(language))
                .and_then(Value::as_object)
                .and_then(|section| section.get(key))
                .or_else(|| self.entries.get(key)),
        }
    }

    /// Writes `value` for `key` in `scope`.
    ///
    /// A language-scoped write creates the section as needed and never
    /// touches the global entry.
    pub fn set(&mut self, scope: &SettingScope, key: &str, value: Value) {
        match scope {
            SettingScope::Global => {
                self.entries.insert(key.to_string(), value);
            }
            SettingScope::Language(language) => {
                let section = self
                    .entries
                    .entry(Self::section_name(language))
                    .or_insert_with(|| Value::Object(serde_json::Map::new()));
                if !section.is_object() {
                    *section = Value::Object(serde_json::Map::new());
                }
                if let Value::Object(map) = section {
                    map.insert(key.to_string(), value);
                }
            }
        }
    }

    /// `true` when the document holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
