//! Locally staged post draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! The create-post form mirrors every edit into a single `localStorage` slot
//! so an accidental reload does not lose work. One slot per browser profile:
//! not per user, not per post. The backend never sees drafts.
//!
//! The stored format is the bare field map with no version tag. Unknown keys
//! are ignored and missing keys default to empty, so adding or removing a
//! field degrades to a partially filled form instead of a lost draft.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStorage, load_json, save_json};

pub const POST_DRAFT_STORAGE_KEY: &str = "skilllink_post_draft";

/// Editable fields of the create-post form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Category,
    ImageUrl,
}

/// In-progress post form values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
}

impl PostDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Category => &self.category,
            DraftField::ImageUrl => &self.image_url,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Category => self.category = value,
            DraftField::ImageUrl => self.image_url = value,
        }
    }

    /// True when any field holds non-whitespace text ("Draft saved").
    pub fn has_content(&self) -> bool {
        [&self.title, &self.description, &self.category, &self.image_url]
            .iter()
            .any(|value| !value.trim().is_empty())
    }
}

/// The single draft slot in a key-value store.
pub struct DraftSlot<S> {
    storage: S,
}

impl<S: KeyValueStorage> DraftSlot<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the slot for form mount. Absent or unreadable drafts yield an
    /// empty draft.
    pub fn load(&self) -> PostDraft {
        match load_json::<PostDraft>(&self.storage, POST_DRAFT_STORAGE_KEY) {
            Ok(draft) => draft.unwrap_or_default(),
            Err(e) => {
                log::debug!("ignoring unreadable post draft: {e}");
                PostDraft::default()
            }
        }
    }

    /// Overwrite the slot with the full draft.
    pub fn save(&self, draft: &PostDraft) {
        save_json(&self.storage, POST_DRAFT_STORAGE_KEY, draft);
    }

    /// Delete the slot and return the empty draft to reset the form with.
    pub fn clear(&self) -> PostDraft {
        self.storage.remove_item(POST_DRAFT_STORAGE_KEY);
        PostDraft::default()
    }

    pub fn is_stored(&self) -> bool {
        self.storage.get_item(POST_DRAFT_STORAGE_KEY).is_some()
    }
}
