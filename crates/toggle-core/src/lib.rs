//! # toggle-core
//!
//! Shared library for Setting Toggle containing the setting-reference
//! resolver, the nested value-path reader/writer, and the two-state toggle
//! table.
//!
//! This crate is used by the host application (`toggle-host`) and by anything
//! else that needs to decide "what does this setting toggle to next".
//! It has zero dependencies on the configuration store, the file system, or
//! any UI surface.
//!
//! # Architecture overview
//!
//! A toggle invocation is a short pipeline, and this crate supplies its pure
//! stages:
//!
//! - **`domain::reference`** – Parses a setting-reference string such as
//!   `[python]editor.tabSize` or `myObjSetting[flags.enabled]` into a scope,
//!   a base key, and an optional sub-path.  This only computes *where* to
//!   read and write; no value is touched.
//!
//! - **`domain::path`** – Safe nested reads and sibling-preserving writes
//!   into JSON values, driven by an explicit segment sequence instead of a
//!   general-purpose dynamic-object library.
//!
//! - **`domain::value`** – The tagged primitive value type compared by the
//!   toggle table.  Equality is kind-aware: a numeric `0` never matches a
//!   boolean `false`.
//!
//! - **`domain::transition`** – The toggle table itself: two candidate
//!   states, current value in, next value out (or "unrecognized").
//!
//! The host application owns everything impure: reading candidates and
//! current values from the configuration store, and persisting the spliced
//! result back.

// Rust will look for the module in a subdirectory with the same name
// (src/domain/mod.rs).
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `toggle_core::SettingReference` instead of the full module path.
pub use domain::path::{extract, splice, PathSegment, SubPath};
pub use domain::reference::{SettingReference, SettingScope};
pub use domain::transition::{ToggleCandidates, ToggleState};
pub use domain::value::ToggleValue;
