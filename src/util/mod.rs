//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, location, file
//! inputs) and pure rules (route guard, validation) from page logic to keep
//! them testable.

pub mod auth;
#[cfg(feature = "csr")]
pub mod file;
pub mod location;
pub mod storage;
pub mod validation;
