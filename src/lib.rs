//! # skilllink
//!
//! Leptos + WASM client for SkillLink, a community site where people post
//! skills they can teach. A hosted backend (Supabase) provides
//! authentication and storage.
//!
//! This crate contains the session store that mirrors backend auth state,
//! the route guard for member-only pages, the locally persisted post draft,
//! and the pages and components built on them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod util;
