//! Settings-store adapters.
//!
//! The settings document is a single JSON object: dotted keys at the top
//! level hold global values, and `"[lang]"`-named sections hold per-language
//! overrides, the same shape the scope prefix of a setting reference uses.
//!
//! # Adapters
//!
//! - **`document`** – The in-memory document model shared by all adapters:
//!   scoped get with global fallback, scoped set.
//! - **`json_file`** – Production adapter persisting the document to a JSON
//!   file at a platform-appropriate path.
//! - **`memory`** – In-memory adapter for unit and integration tests;
//!   records every update it receives.

pub mod document;
pub mod json_file;
pub mod memory;
