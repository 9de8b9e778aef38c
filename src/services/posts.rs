//! Skill post submission and listing.
//!
//! Submission needs a signed-in identity. Authors without a profile row get
//! a minimal one first, named after their email.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::net::backend::{Backend, BackendError};
use crate::net::types::{NewSkillPost, ProfileUpsert, SkillPost, UserIdentity, email_local_part};
use crate::state::draft::PostDraft;

/// Posts shown on the explore page.
pub const EXPLORE_PAGE_SIZE: usize = 50;

pub const POST_CREATED_NOTICE: &str = "Post created successfully!";

/// Make sure `user` has a profile row, creating a minimal one if not.
///
/// # Errors
///
/// Returns the lookup or write error.
pub async fn ensure_profile(backend: &dyn Backend, user: &UserIdentity) -> Result<(), BackendError> {
    if backend.profile_exists(&user.id).await? {
        return Ok(());
    }
    let name = email_local_part(&user.email).unwrap_or("New User").to_owned();
    log::info!("creating missing profile for {}", user.id);
    backend
        .upsert_profile(&ProfileUpsert { id: user.id.clone(), name, location: None, bio: None, avatar_url: None })
        .await
}

/// Publish `draft` as `user`'s post. Text fields are trimmed.
///
/// The caller clears the local draft only after this succeeds.
///
/// # Errors
///
/// [`BackendError::NotAuthenticated`] without a user, otherwise the backend
/// error.
pub async fn submit_post(
    backend: &dyn Backend,
    user: Option<&UserIdentity>,
    draft: &PostDraft,
) -> Result<(), BackendError> {
    let user = user.ok_or(BackendError::NotAuthenticated)?;
    ensure_profile(backend, user).await?;

    let post = NewSkillPost {
        user_id: user.id.clone(),
        title: draft.title.trim().to_owned(),
        description: draft.description.trim().to_owned(),
        category: draft.category.clone(),
        image_url: draft.image_url.trim().to_owned(),
    };
    backend.insert_post(&post).await
}

/// Newest posts for the explore page.
///
/// # Errors
///
/// Returns the backend error.
pub async fn explore(backend: &dyn Backend) -> Result<Vec<SkillPost>, BackendError> {
    backend.list_posts(EXPLORE_PAGE_SIZE).await
}
