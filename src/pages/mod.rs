//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! and backend calls to `components` and `services`.

pub mod auth_callback;
pub mod create_post;
pub mod edit_profile;
pub mod explore;
pub mod home;
pub mod post_detail;
pub mod profile;
pub mod sign_in;
pub mod sign_up;
