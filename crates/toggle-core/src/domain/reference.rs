//! Setting-reference parsing.
//!
//! A *setting reference* is the string a toggle command is pointed at.  Three
//! shapes are recognized:
//!
//! ```text
//! editor.minimap.enabled            plain key
//! [python]editor.tabSize            language-scoped key
//! myObjSetting[flags.enabled]       key + sub-path into an object value
//! ```
//!
//! The scope prefix and the sub-path compose, so
//! `[rust]myObjSetting[flags.enabled]` is also valid.  At most one scope
//! prefix is recognized per reference; a string that does not match the
//! bracket pattern exactly is treated as an unscoped key.
//!
//! Parsing only computes *where* a value lives.  Reading the current value is
//! a store lookup performed by the host, not by this module.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::path::SubPath;

/// Matches a scoped reference: scope identifier in group 1, the remaining
/// reference in group 2.
static SCOPE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.+)\](.*)$").expect("scope pattern is valid"));

/// The configuration scope a reference targets.
///
/// `Global` is the default scope.  `Language` selects the per-language
/// override section identified by a language id such as `python`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingScope {
    Global,
    Language(String),
}

impl SettingScope {
    /// Returns the language id for a language scope, `None` for the global scope.
    pub fn language(&self) -> Option<&str> {
        match self {
            SettingScope::Global => None,
            SettingScope::Language(id) => Some(id),
        }
    }
}

impl std::fmt::Display for SettingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingScope::Global => write!(f, "global"),
            SettingScope::Language(id) => write!(f, "[{id}]"),
        }
    }
}

/// A parsed setting reference: scope, base key, optional sub-path.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingReference {
    /// The configuration scope the key is read from and written to.
    pub scope: SettingScope,
    /// The base configuration key.  May be empty for degenerate input such
    /// as `[python]`; callers treat an empty key as "setting not found".
    pub key: String,
    /// Accessor into the key's value, when the reference points inside an
    /// object- or array-valued setting.
    pub sub_path: Option<SubPath>,
}

impl SettingReference {
    /// Parses a reference string.
    ///
    /// Never fails: malformed input degrades to an unscoped reference whose
    /// key is the whole string, and `[lang]` with an empty remainder yields
    /// an empty key for the caller to reject as not-found.
    pub fn parse(reference: &str) -> Self {
        let (scope, remainder) = match SCOPE_PATTERN.captures(reference) {
            Some(caps) => (
                SettingScope::Language(caps[1].to_string()),
                caps[2].to_string(),
            ),
            None => (SettingScope::Global, reference.to_string()),
        };

        // Everything before the first '[' is the key, everything from the
        // bracket onward addresses a field inside the key's value.
        match remainder.find('[') {
            Some(idx) => {
                let (key, sub) = remainder.split_at(idx);
                SettingReference {
                    scope,
                    key: key.to_string(),
                    sub_path: Some(SubPath::parse(sub)),
                }
            }
            None => SettingReference {
                scope,
                key: remainder,
                sub_path: None,
            },
        }
    }

    /// The key plus sub-path as the user wrote them, without the scope
    /// prefix.  Used in user-facing messages.
    pub fn display_key(&self) -> String {
        match &self.sub_path {
            Some(sub) => format!("{}{}", self.key, sub.raw()),
            None => self.key.clone(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::path::PathSegment;

    // ── Plain references ──────────────────────────────────────────────────────

    #[test]
    fn test_parse_plain_key_is_global_with_no_sub_path() {
        let r = SettingReference::parse("editor.minimap.enabled");
        assert_eq!(r.scope, SettingScope::Global);
        assert_eq!(r.key, "editor.minimap.enabled");
        assert_eq!(r.sub_path, None);
    }

    #[test]
    fn test_parse_keeps_dots_inside_the_key() {
        // Dots separate path segments only inside a sub-path, never in the key
        let r = SettingReference::parse("workbench.colorTheme");
        assert_eq!(r.key, "workbench.colorTheme");
    }

    // ── Scoped references ─────────────────────────────────────────────────────

    #[test]
    fn test_parse_scope_prefix_extracts_language_and_remainder() {
        let r = SettingReference::parse("[python]editor.tabSize");
        assert_eq!(r.scope, SettingScope::Language("python".to_string()));
        assert_eq!(r.key, "editor.tabSize");
        assert_eq!(r.sub_path, None);
    }

    #[test]
    fn test_parse_recognizes_at_most_one_scope_prefix() {
        // The greedy group swallows the inner bracket pair, matching the
        // original host's regex behavior
        let r = SettingReference::parse("[a][b]key");
        assert_eq!(r.scope, SettingScope::Language("a][b".to_string()));
        assert_eq!(r.key, "key");
    }

    #[test]
    fn test_parse_scope_with_empty_remainder_yields_empty_key() {
        let r = SettingReference::parse("[python]");
        assert_eq!(r.scope, SettingScope::Language("python".to_string()));
        assert_eq!(r.key, "");
        assert_eq!(r.sub_path, None);
    }

    #[test]
    fn test_parse_empty_brackets_are_not_a_scope() {
        // "[]" has an empty group 1, which the pattern rejects; the whole
        // string becomes an unscoped key with a sub-path at position 0
        let r = SettingReference::parse("[]key");
        assert_eq!(r.scope, SettingScope::Global);
        assert_eq!(r.key, "");
        assert!(r.sub_path.is_some());
    }

    // ── Sub-paths ─────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_sub_path_splits_at_first_bracket() {
        let r = SettingReference::parse("myObjSetting[flags.enabled]");
        assert_eq!(r.scope, SettingScope::Global);
        assert_eq!(r.key, "myObjSetting");
        let sub = r.sub_path.expect("sub-path must be present");
        assert_eq!(sub.raw(), "[flags.enabled]");
        assert_eq!(
            sub.segments(),
            &[
                PathSegment::Key("flags".to_string()),
                PathSegment::Key("enabled".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_scope_and_sub_path_compose() {
        let r = SettingReference::parse("[rust]myObjSetting[flags.enabled]");
        assert_eq!(r.scope, SettingScope::Language("rust".to_string()));
        assert_eq!(r.key, "myObjSetting");
        assert!(r.sub_path.is_some());
    }

    #[test]
    fn test_parse_numeric_sub_path_yields_index_segment() {
        let r = SettingReference::parse("myListSetting[0]");
        assert_eq!(r.key, "myListSetting");
        let sub = r.sub_path.expect("sub-path must be present");
        assert_eq!(sub.segments(), &[PathSegment::Index(0)]);
    }

    // ── display_key ───────────────────────────────────────────────────────────

    #[test]
    fn test_display_key_includes_sub_path_verbatim() {
        let r = SettingReference::parse("myObjSetting[flags.enabled]");
        assert_eq!(r.display_key(), "myObjSetting[flags.enabled]");
    }

    #[test]
    fn test_display_key_omits_scope_prefix() {
        let r = SettingReference::parse("[python]editor.tabSize");
        assert_eq!(r.display_key(), "editor.tabSize");
    }
}
