//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the contract the rest of the app depends on, `supabase`
//! implements it over HTTP, and `types` defines the shared schema.

pub mod backend;
pub mod supabase;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
