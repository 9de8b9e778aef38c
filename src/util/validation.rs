//! Form validation rules for the auth, profile and post forms.
//!
//! Messages are shown inline next to the offending field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::state::draft::PostDraft;

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_TITLE_CHARS: usize = 3;
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Categories offered by the create-post form.
pub const POST_CATEGORIES: [&str; 8] =
    ["Art", "Music", "Writing", "Coding", "Design", "Photography", "Cooking", "Other"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Message for `field`, if it failed.
pub fn message_for(errors: &[FieldError], field: &str) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

/// Loose address check: `local@domain.tld`, no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if !is_plausible_email(email) {
        errors.push(FieldError::new("email", "Invalid email"));
    }
}

fn check_password(password: &str, errors: &mut Vec<FieldError>) {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.push(FieldError::new("password", "Minimum 6 characters"));
    }
}

fn check_name(name: &str, errors: &mut Vec<FieldError>) {
    if name.chars().count() < MIN_NAME_CHARS {
        errors.push(FieldError::new("name", "Name is too short"));
    }
}

fn finish<T>(value: T, errors: Vec<FieldError>) -> Result<T, Vec<FieldError>> {
    if errors.is_empty() { Ok(value) } else { Err(errors) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileInput {
    pub name: String,
    pub location: Option<String>,
    pub bio: Option<String>,
}

/// Validate the sign-in form. Email is trimmed, the password is not.
///
/// # Errors
///
/// Returns every failing field.
pub fn validate_sign_in(email: &str, password: &str) -> Result<SignInInput, Vec<FieldError>> {
    let email = email.trim();
    let mut errors = Vec::new();
    check_email(email, &mut errors);
    check_password(password, &mut errors);
    finish(SignInInput { email: email.to_owned(), password: password.to_owned() }, errors)
}

/// Validate the sign-up form.
///
/// # Errors
///
/// Returns every failing field.
pub fn validate_sign_up(name: &str, email: &str, password: &str) -> Result<SignUpInput, Vec<FieldError>> {
    let name = name.trim();
    let email = email.trim();
    let mut errors = Vec::new();
    check_name(name, &mut errors);
    check_email(email, &mut errors);
    check_password(password, &mut errors);
    finish(
        SignUpInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() },
        errors,
    )
}

/// Validate the edit-profile form. Blank optional fields become `None`.
///
/// # Errors
///
/// Returns the name error when the name is too short.
pub fn validate_profile(name: &str, location: &str, bio: &str) -> Result<ProfileInput, Vec<FieldError>> {
    let name = name.trim();
    let optional = |v: &str| Some(v.trim().to_owned()).filter(|v| !v.is_empty());
    let mut errors = Vec::new();
    check_name(name, &mut errors);
    finish(ProfileInput { name: name.to_owned(), location: optional(location), bio: optional(bio) }, errors)
}

/// Validate a post draft before submission. `image_url` is optional.
///
/// # Errors
///
/// Returns every failing field.
pub fn validate_post(draft: &PostDraft) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if draft.title.trim().chars().count() < MIN_TITLE_CHARS {
        errors.push(FieldError::new("title", "Title is too short"));
    }
    if draft.description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        errors.push(FieldError::new("description", "Description is too short"));
    }
    if draft.category.trim().is_empty() {
        errors.push(FieldError::new("category", "Category is required"));
    }
    finish((), errors)
}
