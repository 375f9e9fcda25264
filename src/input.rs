//! Input model: pointer events and the drag gesture state machine.
//!
//! A gesture is either idle or dragging exactly one thing: an existing marker
//! being moved, or a palette entry that becomes a new marker on drop. The
//! state carries nothing else; drag-over events never update it.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::{ItemId, ItemKind};
use crate::geometry::Point;

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DraggedItem {
    /// A marker already in the store.
    Existing { id: ItemId },
    /// A palette entry that will be created on drop.
    Palette { kind: ItemKind },
}

/// State of the current drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A drag started and has not been dropped yet.
    Dragging(DraggedItem),
}

impl InputState {
    /// The item being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<DraggedItem> {
        match self {
            Self::Idle => None,
            Self::Dragging(item) => Some(*item),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// A pointer position in client (window) coordinates, as reported by the host.
pub type PointerPos = Point;
