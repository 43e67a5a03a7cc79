//! The tagged primitive value type compared by the toggle table.
//!
//! Configuration values arrive as dynamic JSON.  The toggle table only ever
//! compares primitives (strings, numbers, booleans), and it must compare
//! them *kind-aware*: the original host used dynamic equality where a
//! numeric `0` and a boolean `false` could coincide, and this rendition
//! deliberately does not.  [`ToggleValue`] narrows a JSON value to one of
//! the three comparable kinds; objects, arrays, and null do not narrow.
//!
//! Numbers keep their original [`serde_json::Number`] representation so a
//! matched candidate is written back exactly as it was configured (an
//! integer `2` stays `2`, never `2.0`), while equality compares numerically.

use serde_json::Value;

/// A primitive setting value the toggle table can compare.
#[derive(Debug, Clone)]
pub enum ToggleValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl ToggleValue {
    /// Narrows a JSON value to a comparable primitive.
    ///
    /// Returns `None` for objects, arrays, and null; those can hold a toggle
    /// target but can never *be* one.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(ToggleValue::Bool(*b)),
            Value::Number(n) => Some(ToggleValue::Number(n.clone())),
            Value::String(s) => Some(ToggleValue::String(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Converts back to a JSON value for splicing into the full setting value.
    pub fn to_json(&self) -> Value {
        match self {
            ToggleValue::Bool(b) => Value::Bool(*b),
            ToggleValue::Number(n) => Value::Number(n.clone()),
            ToggleValue::String(s) => Value::String(s.clone()),
        }
    }

    /// The kind name used in log lines and mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ToggleValue::Bool(_) => "boolean",
            ToggleValue::Number(_) => "number",
            ToggleValue::String(_) => "string",
        }
    }
}

impl PartialEq for ToggleValue {
    /// Kind-aware equality: values of different kinds never match; numbers
    /// compare numerically so `2` and `2.0` are the same state.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ToggleValue::Bool(a), ToggleValue::Bool(b)) => a == b,
            (ToggleValue::String(a), ToggleValue::String(b)) => a == b,
            (ToggleValue::Number(a), ToggleValue::Number(b)) => {
                match (a.as_f64(), b.as_f64()) {
                    (Some(x), Some(y)) => x == y,
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for ToggleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleValue::Bool(b) => write!(f, "{b}"),
            ToggleValue::Number(n) => write!(f, "{n}"),
            ToggleValue::String(s) => write!(f, "{s}"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
