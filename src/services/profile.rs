//! Profile viewing and editing.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::backend::{Backend, BackendError};
use crate::net::types::{Profile, ProfileUpsert, UserIdentity};
use crate::util::validation::ProfileInput;

pub const PROFILE_SAVED_NOTICE: &str = "Profile updated successfully!";

/// Which profile a profile page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileTarget {
    pub user_id: String,
    /// The signed-in user is looking at their own profile.
    pub is_own: bool,
}

/// Resolve the `:user_id` route parameter against the signed-in user's id.
/// Without a parameter the signed-in user's own profile is meant.
pub fn profile_target(requested: Option<&str>, my_id: Option<&str>) -> Option<ProfileTarget> {
    match requested.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => Some(ProfileTarget { user_id: id.to_owned(), is_own: my_id == Some(id) }),
        None => my_id.map(|id| ProfileTarget { user_id: id.to_owned(), is_own: true }),
    }
}

pub fn profile_heading(profile: &Profile, is_own: bool) -> String {
    if is_own { "Your Profile".to_owned() } else { format!("{}'s Profile", profile.name) }
}

/// # Errors
///
/// Returns the backend error. A missing row is `Ok(None)`.
pub async fn load_profile(backend: &dyn Backend, user_id: &str) -> Result<Option<Profile>, BackendError> {
    backend.fetch_profile(user_id).await
}

/// Starting values of the profile editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: String,
    pub location: String,
    pub bio: String,
    pub avatar_url: Option<String>,
}

impl ProfileFields {
    /// The stored row, else the identity's display name and blanks.
    pub fn prefill(row: Option<&Profile>, user: &UserIdentity) -> Self {
        let Some(row) = row else {
            return Self { name: user.display_name(), ..Self::default() };
        };
        let name = if row.name.trim().is_empty() { user.display_name() } else { row.name.clone() };
        Self {
            name,
            location: row.location.clone().unwrap_or_default(),
            bio: row.bio.clone().unwrap_or_default(),
            avatar_url: row.avatar_url.clone().filter(|url| !url.is_empty()),
        }
    }
}

/// Upsert the signed-in user's profile row. Empty optional fields are
/// written as nulls, clearing earlier values.
///
/// # Errors
///
/// [`BackendError::NotAuthenticated`] without a user, otherwise the backend
/// error.
pub async fn save_profile(
    backend: &dyn Backend,
    user: Option<&UserIdentity>,
    input: ProfileInput,
    avatar_url: Option<String>,
) -> Result<(), BackendError> {
    let user = user.ok_or(BackendError::NotAuthenticated)?;
    let profile = ProfileUpsert {
        id: user.id.clone(),
        name: input.name,
        location: input.location,
        bio: input.bio,
        avatar_url,
    };
    backend.upsert_profile(&profile).await
}
