use super::*;
use crate::util::storage::MemoryStorage;

fn sample() -> PostDraft {
    PostDraft {
        title: "A".to_owned(),
        description: "B".to_owned(),
        category: "C".to_owned(),
        image_url: String::new(),
    }
}

// =============================================================
// PostDraft
// =============================================================

#[test]
fn empty_draft_has_no_content() {
    assert!(!PostDraft::default().has_content());
}

#[test]
fn whitespace_only_fields_do_not_count_as_content() {
    let draft = PostDraft { title: "   ".to_owned(), description: "\n\t".to_owned(), ..PostDraft::default() };
    assert!(!draft.has_content());
}

#[test]
fn any_non_blank_field_counts_as_content() {
    let mut draft = PostDraft::default();
    draft.set(DraftField::ImageUrl, "https://cdn.example/p.png".to_owned());
    assert!(draft.has_content());
}

#[test]
fn set_and_get_address_the_same_field() {
    let mut draft = PostDraft::default();
    for field in [DraftField::Title, DraftField::Description, DraftField::Category, DraftField::ImageUrl] {
        draft.set(field, format!("{field:?}"));
        assert_eq!(draft.get(field), format!("{field:?}"));
    }
}

// =============================================================
// DraftSlot
// =============================================================

#[test]
fn stored_draft_repopulates_all_four_fields_on_mount() {
    let storage = MemoryStorage::new();
    DraftSlot::new(&storage).save(&sample());

    let mounted = DraftSlot::new(&storage).load();
    assert_eq!(mounted, sample());
}

#[test]
fn draft_is_stored_as_plain_field_map() {
    let storage = MemoryStorage::new();
    DraftSlot::new(&storage).save(&sample());
    let raw: serde_json::Value =
        serde_json::from_str(&storage.get_item(POST_DRAFT_STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!({ "title": "A", "description": "B", "category": "C", "image_url": "" })
    );
}

#[test]
fn absent_slot_mounts_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(DraftSlot::new(&storage).load(), PostDraft::default());
}

#[test]
fn corrupted_slot_mounts_empty() {
    let storage = MemoryStorage::new();
    storage.set_item(POST_DRAFT_STORAGE_KEY, "{\"title\": \"unterminated");
    assert_eq!(DraftSlot::new(&storage).load(), PostDraft::default());
}

#[test]
fn non_object_slot_mounts_empty() {
    let storage = MemoryStorage::new();
    storage.set_item(POST_DRAFT_STORAGE_KEY, "[1,2,3]");
    assert_eq!(DraftSlot::new(&storage).load(), PostDraft::default());
}

#[test]
fn older_or_newer_field_sets_load_partially() {
    let storage = MemoryStorage::new();
    storage.set_item(POST_DRAFT_STORAGE_KEY, r#"{"title":"Kept","tags":["x"]}"#);
    let draft = DraftSlot::new(&storage).load();
    assert_eq!(draft.title, "Kept");
    assert_eq!(draft.description, "");
}

#[test]
fn every_save_overwrites_the_single_slot() {
    let storage = MemoryStorage::new();
    let slot = DraftSlot::new(&storage);
    let mut draft = PostDraft::default();
    draft.set(DraftField::Title, "G".to_owned());
    slot.save(&draft);
    draft.set(DraftField::Title, "Gu".to_owned());
    slot.save(&draft);
    assert_eq!(slot.load().title, "Gu");
}

#[test]
fn clearing_twice_leaves_slot_absent_and_fields_empty() {
    let storage = MemoryStorage::new();
    let slot = DraftSlot::new(&storage);
    slot.save(&sample());

    let first = slot.clear();
    assert!(!slot.is_stored());
    assert_eq!(first, PostDraft::default());

    let second = slot.clear();
    assert!(!slot.is_stored());
    assert_eq!(second, PostDraft::default());
}
