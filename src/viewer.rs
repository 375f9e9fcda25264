//! Viewer state: zoom level, the page currently in view, and thumbnail
//! visibility.
//!
//! The current page drives palette clicks (new markers land centered on it)
//! and follows the scroll position. Zoom changes only affect how stored
//! document-space positions are scaled for drawing; nothing in the store is
//! rewritten when the zoom moves.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::config::ZoomLimits;
use crate::coords::PageLayout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    zoom: f64,
    current_page: u32,
    show_thumbnails: bool,
    limits: ZoomLimits,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ViewerState {
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self { zoom: limits.clamp(limits.default), current_page: 1, show_thumbnails: true, limits }
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// 1-based page currently in view.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub fn show_thumbnails(&self) -> bool {
        self.show_thumbnails
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.zoom = (self.zoom + self.limits.step).min(self.limits.max);
        self.zoom
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.zoom = (self.zoom - self.limits.step).max(self.limits.min);
        self.zoom
    }

    /// Set the zoom directly, clamped to the configured limits. Non-finite
    /// values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        if zoom.is_finite() {
            self.zoom = self.limits.clamp(zoom);
        }
        self.zoom
    }

    /// Jump to `page` (e.g. from a thumbnail click). Pages outside
    /// `1..=page_count` are ignored. Returns true if the page was accepted.
    pub fn go_to_page(&mut self, page: u32, page_count: u32) -> bool {
        if page == 0 || page > page_count {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn toggle_thumbnails(&mut self) -> bool {
        self.show_thumbnails = !self.show_thumbnails;
        self.show_thumbnails
    }

    /// Update the current page from a scroll position.
    ///
    /// A page counts as current once its top edge has scrolled within half a
    /// container height of the top, until its bottom edge does the same.
    /// Returns the new page if it changed.
    pub fn track_scroll(&mut self, scroll_top: f64, container_height: f64, layouts: &[PageLayout]) -> Option<u32> {
        let half = container_height / 2.0;
        let (_, page) = layouts
            .iter()
            .zip(1u32..)
            .find(|(layout, _)| scroll_top >= layout.top - half && scroll_top < layout.top + layout.height - half)?;
        if page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(page)
    }
}

/// Scroll offset that brings `page` to the top of the container.
#[must_use]
pub fn scroll_offset_for(page: u32, layouts: &[PageLayout]) -> Option<f64> {
    let index = usize::try_from(page.checked_sub(1)?).unwrap_or(usize::MAX);
    layouts.get(index).map(|layout| layout.top)
}
