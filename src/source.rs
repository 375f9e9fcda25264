//! Collaborator contracts: the document being annotated and the viewport
//! showing it.
//!
//! The engine never rasterizes or measures anything itself. A host hands it a
//! [`DocumentSource`] (page count plus per-page dimensions) and keeps a
//! [`Viewport`] snapshot current (container offsets, scroll position, and one
//! [`PageLayout`] per rendered page). Both are validated here, at the boundary,
//! so the coordinate engine's math never sees negative or non-finite sizes.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use serde::{Deserialize, Serialize};

use crate::coords::PageLayout;
use crate::geometry::Size;

/// Error returned when collaborator-supplied geometry is unusable.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LayoutError {
    /// A page dimension was zero, negative, NaN, or infinite.
    #[error("invalid size for page {page}: {width}x{height}")]
    InvalidPageSize { page: u32, width: f64, height: f64 },
    /// A page layout rectangle had a negative or non-finite height or offset.
    #[error("invalid layout for page {page}: top={top} height={height}")]
    InvalidLayout { page: u32, top: f64, height: f64 },
    /// The zoom factor was zero, negative, NaN, or infinite.
    #[error("invalid zoom factor: {0}")]
    InvalidZoom(f64),
    /// A document with no pages was supplied.
    #[error("document has no pages")]
    Empty,
}

/// Source of page count and per-page dimensions.
///
/// Implemented by whatever owns the parsed document. `page_dimensions` returns
/// on-screen pixels at the requested zoom; `None` means the dimensions are not
/// available synchronously, and the caller discards the interaction.
pub trait DocumentSource {
    /// Total number of pages.
    fn page_count(&self) -> u32;

    /// Rendered size of `page` (1-based) at `zoom`, in pixels.
    fn page_dimensions(&self, page: u32, zoom: f64) -> Option<Size>;
}

/// Check one page's reported size.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidPageSize`] unless both dimensions are finite
/// and positive.
pub fn validate_page_size(page: u32, size: Size) -> Result<Size, LayoutError> {
    if is_positive(size.width) && is_positive(size.height) {
        Ok(size)
    } else {
        Err(LayoutError::InvalidPageSize { page, width: size.width, height: size.height })
    }
}

/// A document described by its page sizes at zoom 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSizes {
    pages: Vec<Size>,
}

impl PageSizes {
    /// Validate and wrap a list of document-space page sizes, page 1 first.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Empty`] for an empty list and
    /// [`LayoutError::InvalidPageSize`] for any non-positive or non-finite
    /// dimension.
    pub fn new(pages: Vec<Size>) -> Result<Self, LayoutError> {
        if pages.is_empty() {
            return Err(LayoutError::Empty);
        }
        for (size, page) in pages.iter().zip(1u32..) {
            validate_page_size(page, *size)?;
        }
        Ok(Self { pages })
    }

    /// A document of `count` identically sized pages.
    ///
    /// # Errors
    ///
    /// Same as [`PageSizes::new`].
    pub fn uniform(count: u32, size: Size) -> Result<Self, LayoutError> {
        Self::new((0..count).map(|_| size).collect())
    }

    /// Stacked on-screen layouts for these pages at `zoom`, separated by `gap`
    /// pixels. Useful for hosts that lay pages out in a single column.
    #[must_use]
    pub fn stacked_layouts(&self, zoom: f64, gap: f64) -> Vec<PageLayout> {
        let mut top = 0.0;
        self.pages
            .iter()
            .map(|size| {
                let layout = PageLayout { top, left: 0.0, height: size.height * zoom };
                top += layout.height + gap;
                layout
            })
            .collect()
    }
}

impl DocumentSource for PageSizes {
    fn page_count(&self) -> u32 {
        u32::try_from(self.pages.len()).unwrap_or(u32::MAX)
    }

    fn page_dimensions(&self, page: u32, zoom: f64) -> Option<Size> {
        let index = usize::try_from(page.checked_sub(1)?).unwrap_or(usize::MAX);
        self.pages.get(index).map(|size| size.to_screen(zoom))
    }
}

/// Snapshot of the scroll container and the pages rendered inside it.
///
/// All values are on-screen pixels at the current zoom.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Left edge of the scroll container in client coordinates.
    #[serde(default)]
    pub container_left: f64,
    /// Top edge of the scroll container in client coordinates.
    #[serde(default)]
    pub container_top: f64,
    /// Visible height of the scroll container.
    #[serde(default)]
    pub container_height: f64,
    /// Current vertical scroll offset.
    #[serde(default)]
    pub scroll_top: f64,
    /// One rectangle per rendered page, page 1 first.
    #[serde(default)]
    pub pages: Vec<PageLayout>,
}

impl Viewport {
    /// Check every page layout for usable geometry.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidLayout`] for the first page whose height is
    /// negative or whose offsets are not finite.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (layout, page) in self.pages.iter().zip(1u32..) {
            let ok = layout.top.is_finite() && layout.left.is_finite() && layout.height.is_finite() && layout.height >= 0.0;
            if !ok {
                return Err(LayoutError::InvalidLayout { page, top: layout.top, height: layout.height });
            }
        }
        Ok(())
    }
}

/// Reject zoom factors the engine cannot divide by.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidZoom`] unless `zoom` is finite and positive.
pub fn validate_zoom(zoom: f64) -> Result<f64, LayoutError> {
    if is_positive(zoom) { Ok(zoom) } else { Err(LayoutError::InvalidZoom(zoom)) }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
