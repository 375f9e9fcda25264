//! Coordinate engine: page lookup, vertical rollover, and bounds clamping.
//!
//! Everything here is a pure function over plain values. Pointer positions go
//! in as on-screen pixels only in [`locate_page`]; every other function works
//! in document space (zoom = 1.0), so callers divide pointer-derived offsets by
//! the zoom factor before calling and multiply stored positions by it before
//! drawing.
//!
//! A drop is resolved in one pass: locate the page under the pointer, compute
//! the offset within it, roll over to an adjacent page if the marker crosses
//! the top or bottom edge, then clamp horizontally. Rollover is evaluated once,
//! so a single drop never moves a marker more than one page away from the
//! page it was located on.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// On-screen rectangle of one rendered page inside the scroll container.
///
/// Offsets are relative to the scroll content origin, in pixels at the current
/// zoom. Layouts are supplied in ascending page order, page 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Distance from the top of the scroll content to the page's top edge.
    pub top: f64,
    /// Distance from the container's left edge to the page's left edge.
    #[serde(default)]
    pub left: f64,
    /// Rendered page height.
    pub height: f64,
}

/// The page a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageHit {
    /// 1-based page number.
    pub page: u32,
    /// On-screen top offset of that page within the scroll content.
    pub top: f64,
    /// On-screen left offset of that page within the container.
    pub left: f64,
}

/// A vertical placement after rollover / clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rollover {
    pub page: u32,
    pub y: f64,
}

/// Find the page under `pointer_y`.
///
/// The pointer is translated into scroll-content space as
/// `pointer_y - container_top + scroll_offset` and matched against each
/// layout's half-open `[top, top + height)` interval. The first match in
/// layout order wins, even when layouts overlap. Returns `None` when the
/// pointer is over a gap or past the last page.
#[must_use]
pub fn locate_page(pointer_y: f64, container_top: f64, scroll_offset: f64, layouts: &[PageLayout]) -> Option<PageHit> {
    let document_y = pointer_y - container_top + scroll_offset;
    layouts
        .iter()
        .zip(1u32..)
        .find(|(layout, _)| document_y >= layout.top && document_y < layout.top + layout.height)
        .map(|(layout, page)| PageHit { page, top: layout.top, left: layout.left })
}

/// Reassign `y` to an adjacent page when the marker crosses a vertical edge.
///
/// - Bottom overflow (`y + item_height > page_height`) moves to the top of the
///   next page, or clamps to the bottom on the last page.
/// - Top overflow (`y < 0`) moves to the bottom of the previous page, or clamps
///   to the top on the first page.
/// - Anything else is returned unchanged.
///
/// `page_height` and `item_height` are document-space. The backward rollover
/// lands at `page_height - item_height`, measured with the height passed in;
/// callers with mixed page sizes re-clamp against the destination page.
#[must_use]
pub fn resolve_overflow(y: f64, page: u32, page_height: f64, item_height: f64, total_pages: u32) -> Rollover {
    if y + item_height > page_height {
        if page < total_pages {
            Rollover { page: page + 1, y: 0.0 }
        } else {
            Rollover { page, y: page_height - item_height }
        }
    } else if y < 0.0 {
        if page > 1 {
            Rollover { page: page - 1, y: page_height - item_height }
        } else {
            Rollover { page, y: 0.0 }
        }
    } else {
        Rollover { page, y }
    }
}

/// Clamp a horizontal offset to `[0, page_width - item_width]`.
///
/// Pages never tile horizontally, so there is no rollover on this axis. A
/// marker wider than its page pins to the left edge.
#[must_use]
pub fn clamp_x(x: f64, page_width: f64, item_width: f64) -> f64 {
    x.min(page_width - item_width).max(0.0)
}

/// Clamp a vertical offset to `[0, page_height - item_height]`.
#[must_use]
pub fn clamp_y(y: f64, page_height: f64, item_height: f64) -> f64 {
    y.min(page_height - item_height).max(0.0)
}

/// Top-left corner that centers `item` on `page`.
#[must_use]
pub fn centered(page: Size, item: Size) -> Point {
    Point::new((page.width - item.width) / 2.0, (page.height - item.height) / 2.0)
}
