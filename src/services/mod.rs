//! Application services between pages and the backend.
//!
//! ARCHITECTURE
//! ============
//! `session` owns `AuthState` updates; `auth`, `posts`, `profile` and
//! `uploads` run backend operations for the pages and report what should
//! happen next.

pub mod auth;
pub mod posts;
pub mod profile;
pub mod session;
pub mod uploads;
