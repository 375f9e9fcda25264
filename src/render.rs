//! Rendering projection: turns stored markers into on-screen rectangles.
//!
//! This module never paints. It receives a read-only view of the store and the
//! current zoom and produces pixel rectangles relative to each page's top-left
//! corner, in draw order. The host's rendering layer positions one element per
//! rectangle; it does not mutate any application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::doc::{ItemId, ItemKind, ItemStatus, PlacedItem, PlacementStore};
use crate::geometry::document_to_screen;

/// One marker as the rendering layer should draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerRect {
    pub id: ItemId,
    pub kind: ItemKind,
    pub status: ItemStatus,
    /// Left offset from the page's left edge, in pixels.
    pub left: f64,
    /// Top offset from the page's top edge, in pixels.
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Caption shown inside the marker, e.g. `Stamp #3`.
    pub label: String,
}

impl MarkerRect {
    #[must_use]
    pub fn from_item(item: &PlacedItem, zoom: f64) -> Self {
        Self {
            id: item.id,
            kind: item.kind,
            status: item.status,
            left: document_to_screen(item.x, zoom),
            top: document_to_screen(item.y, zoom),
            width: document_to_screen(item.width, zoom),
            height: document_to_screen(item.height, zoom),
            label: label(item),
        }
    }
}

/// Markers on `page` scaled to `zoom`, bottom first.
#[must_use]
pub fn page_markers(store: &PlacementStore, page: u32, zoom: f64) -> Vec<MarkerRect> {
    store
        .items_on_page(page)
        .into_iter()
        .map(|item| MarkerRect::from_item(item, zoom))
        .collect()
}

/// Caption for a marker.
#[must_use]
pub fn label(item: &PlacedItem) -> String {
    format!("{} #{}", item.kind.label(), item.id)
}
