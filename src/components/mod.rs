//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and forms while reading shared state from
//! Leptos context providers.

pub mod field_message;
pub mod navbar;
pub mod post_form;
pub mod protected_route;
pub mod toaster;
