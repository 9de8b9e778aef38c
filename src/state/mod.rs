//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `draft`, `intent`, `toast`) so
//! components can depend on small focused models. Reactive wrappers
//! (`RwSignal`) are added where the state is provided, not here.

pub mod auth;
pub mod draft;
pub mod intent;
pub mod toast;
