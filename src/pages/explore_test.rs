use super::*;

#[test]
fn excerpt_keeps_short_text() {
    assert_eq!(excerpt("  Knife skills  ", 20), "Knife skills");
}

#[test]
fn excerpt_cuts_on_word_boundary() {
    assert_eq!(excerpt("Learn to sharpen and hone kitchen knives", 18), "Learn to sharpen…");
}

#[test]
fn excerpt_counts_characters_not_bytes() {
    assert_eq!(excerpt("crème brûlée", 12), "crème brûlée");
}

#[test]
fn posted_on_extracts_date() {
    assert_eq!(posted_on(Some("2024-05-01T10:00:00+00:00")).as_deref(), Some("2024-05-01"));
}

#[test]
fn posted_on_rejects_missing_or_odd_values() {
    assert_eq!(posted_on(None), None);
    assert_eq!(posted_on(Some("yesterday")), None);
}

fn post_by(author: serde_json::Value) -> SkillPost {
    serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "user_id": "u-1",
        "title": "Knife skills",
        "description": "Sharpening",
        "category": "Cooking",
        "profiles": author
    }))
    .unwrap()
}

#[test]
fn byline_names_embedded_author() {
    let post = post_by(serde_json::json!({ "name": "Grace", "avatar_url": null }));
    assert_eq!(byline(&post).as_deref(), Some("By Grace"));
}

#[test]
fn byline_absent_without_author() {
    assert_eq!(byline(&post_by(serde_json::Value::Null)), None);
    assert_eq!(byline(&post_by(serde_json::json!({ "name": "  " }))), None);
}
