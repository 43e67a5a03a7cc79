//! Pure domain logic for Setting Toggle.
//!
//! Everything in this module is synchronous, allocation-light, and free of
//! I/O.  The submodules correspond to the stages of a toggle invocation:
//!
//! - **`reference`** – Where is the setting?  (scope + key + sub-path)
//! - **`path`**      – How do we read/write inside an object-valued setting?
//! - **`value`**     – What kinds of values can the toggle table compare?
//! - **`transition`** – Given the current value, what comes next?

pub mod path;
pub mod reference;
pub mod transition;
pub mod value;
