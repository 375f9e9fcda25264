#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or document space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in either screen or document space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale a document-space size to screen pixels.
    #[must_use]
    pub fn to_screen(self, zoom: f64) -> Self {
        Self { width: self.width * zoom, height: self.height * zoom }
    }

    /// Normalize a screen-space size back to document space.
    #[must_use]
    pub fn to_document(self, zoom: f64) -> Self {
        Self { width: self.width / zoom, height: self.height / zoom }
    }
}

/// Convert a screen-space distance (pixels) to document-space units.
#[must_use]
pub fn screen_to_document(screen_dist: f64, zoom: f64) -> f64 {
    screen_dist / zoom
}

/// Convert a document-space distance to screen pixels.
#[must_use]
pub fn document_to_screen(doc_dist: f64, zoom: f64) -> f64 {
    doc_dist * zoom
}
