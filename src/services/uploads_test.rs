use futures::executor::block_on;

use super::*;
use crate::net::testing::{FakeBackend, StoredObject, identity};

fn png(name: &str, size: usize) -> ImageFile {
    ImageFile { name: name.to_owned(), content_type: "image/png".to_owned(), bytes: vec![0; size] }
}

// =============================================================================
// Paths
// =============================================================================

#[test]
fn extension_is_lowercased() {
    assert_eq!(file_extension("Holiday.JPG"), "jpg");
    assert_eq!(file_extension("archive.tar.gz"), "gz");
}

#[test]
fn missing_or_odd_extension_becomes_bin() {
    assert_eq!(file_extension("README"), "bin");
    assert_eq!(file_extension("trailing."), "bin");
    assert_eq!(file_extension("weird.p/ng"), "bin");
}

#[test]
fn post_image_path_is_flat() {
    assert_eq!(post_image_path("u-1", "loaf.png", 1_700_000_000_000), "u-1-1700000000000.png");
}

#[test]
fn avatar_path_uses_user_folder() {
    assert_eq!(avatar_path("u-1", "me.jpeg", 42), "u-1/42.jpeg");
}

// =============================================================================
// check_image
// =============================================================================

#[test]
fn non_image_is_refused() {
    let file = ImageFile { name: "notes.txt".to_owned(), content_type: "text/plain".to_owned(), bytes: vec![1] };
    assert_eq!(check_image(&file).unwrap_err().to_string(), "Please choose an image file");
}

#[test]
fn size_limit_is_inclusive() {
    assert!(check_image(&png("a.png", MAX_IMAGE_BYTES)).is_ok());
    assert_eq!(
        check_image(&png("a.png", MAX_IMAGE_BYTES + 1)).unwrap_err().to_string(),
        "File size must be less than 5MB"
    );
}

// =============================================================================
// Uploads
// =============================================================================

#[test]
fn post_image_upload_returns_public_url() {
    let backend = FakeBackend::new();
    let user = identity("u-1", "baker@example.com");
    let url = block_on(upload_post_image(&backend, Some(&user), png("loaf.PNG", 3), 7)).unwrap();

    assert_eq!(url, "https://storage.test/post-images/u-1-7.png");
    assert_eq!(
        backend.objects(),
        vec![StoredObject {
            bucket: POST_IMAGES_BUCKET.to_owned(),
            path: "u-1-7.png".to_owned(),
            content_type: "image/png".to_owned(),
            size: 3,
        }]
    );
}

#[test]
fn post_image_is_never_overwritten() {
    let backend = FakeBackend::new();
    let user = identity("u-1", "baker@example.com");
    block_on(upload_post_image(&backend, Some(&user), png("a.png", 1), 7)).unwrap();
    let err = block_on(upload_post_image(&backend, Some(&user), png("a.png", 1), 7)).unwrap_err();
    assert!(matches!(err, BackendError::Rejected { status: 409, .. }));
}

#[test]
fn avatar_upload_replaces_same_path() {
    let backend = FakeBackend::new();
    let user = identity("u-1", "ada@example.com");
    block_on(upload_avatar(&backend, Some(&user), png("me.png", 1), 7)).unwrap();
    let url = block_on(upload_avatar(&backend, Some(&user), png("me.png", 2), 7)).unwrap();

    assert_eq!(url, "https://storage.test/avatars/u-1/7.png");
    let objects = backend.objects();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].size, 2);
}

#[test]
fn upload_without_user_is_not_authenticated() {
    let backend = FakeBackend::new();
    let err = block_on(upload_post_image(&backend, None, png("a.png", 1), 7)).unwrap_err();
    assert_eq!(err, BackendError::NotAuthenticated);
    assert!(backend.objects().is_empty());
}

#[test]
fn refused_file_never_reaches_storage() {
    let backend = FakeBackend::new();
    let user = identity("u-1", "ada@example.com");
    let file = ImageFile { name: "a.pdf".to_owned(), content_type: "application/pdf".to_owned(), bytes: vec![1] };
    assert!(block_on(upload_avatar(&backend, Some(&user), file, 7)).is_err());
    assert!(backend.objects().is_empty());
}

#[test]
fn storage_failure_is_reported_for_toast() {
    let backend = FakeBackend::new();
    backend.fail_upload(BackendError::Rejected { status: 400, message: "Bucket not found".to_owned() });
    let user = identity("u-1", "ada@example.com");
    let err = block_on(upload_post_image(&backend, Some(&user), png("a.png", 1), 7)).unwrap_err();
    assert_eq!(upload_failure_message(&err), "Upload failed: Bucket not found");
}
