//! Document model: placed markers and the in-memory store that owns them.
//!
//! This module defines what sits on the pages (`PlacedItem`, `ItemKind`,
//! `ItemStatus`) and the runtime store that owns all live markers
//! (`PlacementStore`). Positions are stored in document space, relative to the
//! top-left corner of the marker's page.
//!
//! Mutations arrive from the interaction engine only. The renderer reads from
//! the store via `items_on_page`, whose insertion order is the draw order:
//! markers created later paint on top.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::geometry::Size;

/// Unique identifier for a placed marker.
pub type ItemId = u64;

/// What a marker asks the signer to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A handwritten or typed signature.
    Signature,
    /// A company or notary stamp.
    Stamp,
}

impl ItemKind {
    /// Human-readable name used in marker labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Signature => "Signature",
            Self::Stamp => "Stamp",
        }
    }
}

/// Whether the signer has fulfilled a marker yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Pending,
    Completed,
}

/// A marker placed on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    /// Store-assigned identifier; never reused.
    pub id: ItemId,
    /// 1-based page the marker renders on.
    pub page: u32,
    /// Left edge relative to the page, in document space.
    pub x: f64,
    /// Top edge relative to the page, in document space.
    pub y: f64,
    /// Width in document space; fixed at creation.
    pub width: f64,
    /// Height in document space; fixed at creation.
    pub height: f64,
    /// Marker kind; fixed at creation.
    #[serde(rename = "fieldType")]
    pub kind: ItemKind,
    /// Fulfilment state.
    #[serde(rename = "fieldStatus")]
    pub status: ItemStatus,
}

impl PlacedItem {
    /// Marker size in document space.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// In-memory store of placed markers.
#[derive(Debug, Clone)]
pub struct PlacementStore {
    items: Vec<PlacedItem>,
    next_id: ItemId,
    item_size: Size,
}

impl PlacementStore {
    /// Create an empty store that sizes new markers at the default 100 x 30.
    #[must_use]
    pub fn new() -> Self {
        Self::with_item_size(Size::new(FIELD_WIDTH, FIELD_HEIGHT))
    }

    /// Create an empty store with a custom marker size.
    #[must_use]
    pub fn with_item_size(item_size: Size) -> Self {
        Self { items: Vec::new(), next_id: 0, item_size }
    }

    /// Size given to every newly created marker.
    #[must_use]
    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// Append a new pending marker and return a copy of it.
    ///
    /// The position is stored as given; callers resolve it through the
    /// coordinate engine first.
    pub fn create_item(&mut self, kind: ItemKind, page: u32, x: f64, y: f64) -> PlacedItem {
        let item = PlacedItem {
            id: self.next_id,
            page,
            x,
            y,
            width: self.item_size.width,
            height: self.item_size.height,
            kind,
            status: ItemStatus::Pending,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Move an existing marker. Returns false if no marker has this id.
    pub fn relocate_item(&mut self, id: ItemId, page: u32, x: f64, y: f64) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.page = page;
        item.x = x;
        item.y = y;
        true
    }

    /// Remove a marker by id, returning it if it was present.
    pub fn delete_item(&mut self, id: ItemId) -> Option<PlacedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Update a marker's fulfilment state. Returns false if no marker has this id.
    pub fn set_status(&mut self, id: ItemId, status: ItemStatus) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.status = status;
        true
    }

    /// Remove every marker. The id counter keeps its value so ids are never
    /// reused.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Markers on `page`, in draw order.
    #[must_use]
    pub fn items_on_page(&self, page: u32) -> Vec<&PlacedItem> {
        self.items.iter().filter(|item| item.page == page).collect()
    }

    /// Look up a marker by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All markers in insertion order.
    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Owned copy of every marker, for handing to a persistence sink.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PlacedItem> {
        self.items.clone()
    }

    /// Number of markers currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for PlacementStore {
    fn default() -> Self {
        Self::new()
    }
}
