use super::*;

#[test]
fn new_intent_is_empty() {
    assert_eq!(NavigationIntent::new().peek(), None);
}

#[test]
fn take_is_read_once() {
    let intent = NavigationIntent::new();
    intent.capture("/create-post");
    assert_eq!(intent.take().as_deref(), Some("/create-post"));
    assert_eq!(intent.take(), None);
}

#[test]
fn later_capture_overwrites_earlier() {
    let intent = NavigationIntent::new();
    intent.capture("/explore");
    intent.capture("/profile/edit");
    assert_eq!(intent.take().as_deref(), Some("/profile/edit"));
}

#[test]
fn clones_share_the_slot() {
    let intent = NavigationIntent::new();
    let guard_side = intent.clone();
    guard_side.capture("/profile");
    assert_eq!(intent.peek().as_deref(), Some("/profile"));
    intent.discard();
    assert_eq!(guard_side.peek(), None);
}
