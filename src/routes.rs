//! Application paths.

pub const HOME: &str = "/";
pub const SIGN_IN: &str = "/login";
pub const SIGN_UP: &str = "/register";
pub const AUTH_CALLBACK: &str = "/auth/callback";
pub const EXPLORE: &str = "/explore";
pub const PROFILE: &str = "/profile";
pub const EDIT_PROFILE: &str = "/profile/edit";
pub const CREATE_POST: &str = "/create-post";

/// Public profile page of `user_id`.
pub fn user_profile(user_id: &str) -> String {
    format!("/profile/{user_id}")
}

/// Path of a single post page.
pub fn post(post_id: &str) -> String {
    format!("/post/{post_id}")
}
