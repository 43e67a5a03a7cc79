//! Nested value paths: parsing, safe reads, sibling-preserving writes.
//!
//! A sub-path is the accessor tail of a setting reference, e.g. the
//! `[flags.enabled]` in `myObjSetting[flags.enabled]` or the `[0]` in
//! `myListSetting[0]`.  The accessor string is tokenized into an ordered
//! sequence of [`PathSegment`]s; reads and writes then operate generically
//! over that sequence.  This replaces the general-purpose dynamic-object
//! helpers the original host borrowed from a utility library with an
//! explicit, dependency-free parser.
//!
//! # Tokenization rules
//!
//! `.`, `[`, and `]` all delimit segments, so `flags.enabled`,
//! `[flags.enabled]`, and `[flags][enabled]` address the same leaf.  A
//! segment that is a canonical unsigned integer (`0`, or digits without a
//! leading zero) is an array index; everything else is an object key.
//!
//! # Read/write semantics
//!
//! Reads are total: a missing segment or a non-container along the way
//! yields `None`, never a panic.  Writes create intermediate containers as
//! needed (objects for key segments, arrays for index segments, padded with
//! nulls), preserve all sibling data, and follow the original host's
//! behavior of overwriting a non-container intermediate that stands in the
//! way.  An index segment applied to an existing object falls back to the
//! numeric string key, on both the read and the write path, so the two
//! stay symmetric.

use serde_json::Value;
use tracing::trace;

/// One step of a sub-path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member access by key.
    Key(String),
    /// Array element access by position.
    Index(usize),
}

/// A parsed sub-path: the raw accessor string plus its segment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubPath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl SubPath {
    /// Tokenizes an accessor string into segments.
    ///
    /// Parsing never fails; empty segments (e.g. from `..` or `[]`) are
    /// skipped, and an input with no usable segments produces an empty
    /// sequence, which reads and writes treat as "the value itself".
    pub fn parse(raw: &str) -> Self {
        let mut segments = Vec::new();
        let mut token = String::new();

        for ch in raw.chars() {
            match ch {
                '.' | '[' | ']' => flush(&mut token, &mut segments),
                _ => token.push(ch),
            }
        }
        flush(&mut token, &mut segments);

        SubPath {
            raw: raw.to_string(),
            segments,
        }
    }

    /// The accessor string as the user wrote it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The ordered segment sequence.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// `true` when no usable segment was parsed.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Flushes the accumulated token into the segment list.
fn flush(token: &mut String, segments: &mut Vec<PathSegment>) {
    if token.is_empty() {
        return;
    }
    let segment = match parse_index(token) {
        Some(i) => PathSegment::Index(i),
        None => PathSegment::Key(std::mem::take(token)),
    };
    token.clear();
    segments.push(segment);
}

/// Parses a canonical unsigned integer: `0`, or digits without a leading zero.
fn parse_index(token: &str) -> Option<usize> {
    if token != "0" && (token.starts_with('0') || !token.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    token.parse().ok()
}

/// Reads the value at `path` inside `full`.
///
/// An empty path returns `full` itself.  Returns `None` when any segment is
/// missing or when the value along the way is not a container.
pub fn extract<'a>(full: &'a Value, path: &SubPath) -> Option<&'a Value> {
    let mut current = full;
    for segment in path.segments() {
        current = match (segment, current) {
            (PathSegment::Key(k), Value::Object(map)) => map.get(k)?,
            (PathSegment::Index(i), Value::Array(arr)) => arr.get(*i)?,
            // Numeric access into an object falls back to the string key
            (PathSegment::Index(i), Value::Object(map)) => map.get(&i.to_string())?,
            _ => return None,
        };
    }
    Some(current)
}

/// Writes `new_sub` at `path` inside `full` and returns the updated value.
///
/// An empty path replaces the full value.  All data not on the path is
/// preserved unchanged; missing intermediate containers are created.
pub fn splice(full: Value, path: &SubPath, new_sub: Value) -> Value {
    let mut updated = full;
    set_at(&mut updated, path.segments(), new_sub);
    updated
}

/// Recursive write over a segment sequence.
fn set_at(slot: &mut Value, segments: &[PathSegment], new_sub: Value) {
    let Some((first, rest)) = segments.split_first() else {
        *slot = new_sub;
        return;
    };

    match first {
        PathSegment::Key(key) => {
            if !slot.is_object() {
                if !slot.is_null() {
                    trace!(segment = %key, "replacing non-object intermediate on write path");
                }
                *slot = Value::Object(serde_json::Map::new());
            }
            if let Value::Object(map) = slot {
                let child = map.entry(key.clone()).or_insert(Value::Null);
                set_at(child, rest, new_sub);
            }
        }
        PathSegment::Index(index) => {
            // An existing object wins over array creation, mirroring extract()
            if let Value::Object(map) = slot {
                let child = map.entry(index.to_string()).or_insert(Value::Null);
                set_at(child, rest, new_sub);
                return;
            }
            if !slot.is_array() {
                if !slot.is_null() {
                    trace!(segment = index, "replacing non-array intermediate on write path");
                }
                *slot = Value::Array(Vec::new());
            }
            if let Value::Array(arr) = slot {
                while arr.len() <= *index {
                    arr.push(Value::Null);
                }
                set_at(&mut arr[*index], rest, new_sub);
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
