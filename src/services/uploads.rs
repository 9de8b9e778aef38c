//! Image uploads to backend storage.
//!
//! Post images land in a flat bucket (`{user}-{stamp}.{ext}`, never
//! overwritten); avatars in a per-user folder (`{user}/{stamp}.{ext}`,
//! upserted). The caller supplies the millisecond stamp.

#[cfg(test)]
#[path = "uploads_test.rs"]
mod uploads_test;

use crate::net::backend::{Backend, BackendError};
use crate::net::types::UserIdentity;

pub const POST_IMAGES_BUCKET: &str = "post-images";
pub const AVATARS_BUCKET: &str = "avatars";

/// Largest accepted image.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub const IMAGE_UPLOADED_NOTICE: &str = "Image uploaded successfully!";

/// A file picked in the browser, read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Lowercased extension of `file_name`, `bin` when it has none.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.trim())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map_or_else(|| "bin".to_owned(), str::to_ascii_lowercase)
}

pub fn post_image_path(user_id: &str, file_name: &str, stamp_millis: u64) -> String {
    format!("{user_id}-{stamp_millis}.{}", file_extension(file_name))
}

pub fn avatar_path(user_id: &str, file_name: &str, stamp_millis: u64) -> String {
    format!("{user_id}/{stamp_millis}.{}", file_extension(file_name))
}

/// Reject files that are not images or exceed [`MAX_IMAGE_BYTES`].
///
/// # Errors
///
/// [`BackendError::Rejected`] with a message fit for a toast.
pub fn check_image(file: &ImageFile) -> Result<(), BackendError> {
    if !file.content_type.starts_with("image/") {
        return Err(BackendError::Rejected { status: 415, message: "Please choose an image file".to_owned() });
    }
    if file.bytes.len() > MAX_IMAGE_BYTES {
        return Err(BackendError::Rejected { status: 413, message: "File size must be less than 5MB".to_owned() });
    }
    Ok(())
}

/// Upload a post image and return its public URL.
///
/// # Errors
///
/// [`BackendError::NotAuthenticated`] without a user, the [`check_image`]
/// refusal, or the storage error.
pub async fn upload_post_image(
    backend: &dyn Backend,
    user: Option<&UserIdentity>,
    file: ImageFile,
    stamp_millis: u64,
) -> Result<String, BackendError> {
    let user = user.ok_or(BackendError::NotAuthenticated)?;
    check_image(&file)?;
    let path = post_image_path(&user.id, &file.name, stamp_millis);
    log::debug!("uploading post image {path} ({} bytes)", file.bytes.len());
    backend
        .upload_object(POST_IMAGES_BUCKET, &path, &file.content_type, file.bytes, false)
        .await
}

/// Upload an avatar and return its public URL.
///
/// # Errors
///
/// Same as [`upload_post_image`].
pub async fn upload_avatar(
    backend: &dyn Backend,
    user: Option<&UserIdentity>,
    file: ImageFile,
    stamp_millis: u64,
) -> Result<String, BackendError> {
    let user = user.ok_or(BackendError::NotAuthenticated)?;
    check_image(&file)?;
    let path = avatar_path(&user.id, &file.name, stamp_millis);
    log::debug!("uploading avatar {path} ({} bytes)", file.bytes.len());
    backend
        .upload_object(AVATARS_BUCKET, &path, &file.content_type, file.bytes, true)
        .await
}

/// Toast text for a failed upload.
pub fn upload_failure_message(err: &BackendError) -> String {
    format!("Upload failed: {}", err.user_message("unknown error"))
}
