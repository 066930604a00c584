//! Shopping-list item models.
//!
//! The remote store owns every item; the in-memory list is a projection that
//! is replaced wholesale on each fetch.

use serde::{Deserialize, Serialize};

use crate::document::{Document, FieldValue, Fields};
use crate::ids::DocumentId;

/// Collection holding shopping-list items unless configured otherwise.
pub const DEFAULT_ITEMS_COLLECTION: &str = "items";

pub const TITLE_FIELD: &str = "title";
pub const IS_CHECKED_FIELD: &str = "isChecked";

/// A shopping-list record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DocumentId,
    pub title: String,
    pub is_checked: bool,
}

impl Item {
    pub fn new(id: impl Into<DocumentId>, title: impl Into<String>, is_checked: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_checked,
        }
    }

    /// Project a stored document onto an item.
    ///
    /// Documents are schemaless: a missing or mistyped `title` reads as an
    /// empty string and a missing `isChecked` reads as `false`.
    pub fn from_document(document: &Document) -> Self {
        let title = document
            .get(TITLE_FIELD)
            .and_then(FieldValue::as_str)
            .unwrap_or_default()
            .to_string();
        let is_checked = document
            .get(IS_CHECKED_FIELD)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false);

        Self {
            id: document.id.clone(),
            title,
            is_checked,
        }
    }
}

/// Fields written when an item is created. New items always start unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
}

impl NewItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(TITLE_FIELD.to_string(), FieldValue::String(self.title));
        fields.insert(IS_CHECKED_FIELD.to_string(), FieldValue::Bool(false));
        fields
    }
}

/// What the list screen should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Nothing loaded yet; render a loading indicator.
    Loading,
    Loaded(Vec<Item>),
}

impl ListView {
    pub fn from_items(items: &[Item]) -> Self {
        if items.is_empty() {
            ListView::Loading
        } else {
            ListView::Loaded(items.to_vec())
        }
    }
}
