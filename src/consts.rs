//! Shared numeric constants for the placement crate.

// ── Markers ─────────────────────────────────────────────────────

/// Default marker width in document-space units.
pub const FIELD_WIDTH: f64 = 100.0;

/// Default marker height in document-space units.
pub const FIELD_HEIGHT: f64 = 30.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor reachable through the zoom controls.
pub const ZOOM_MIN: f64 = 0.25;

/// Largest zoom factor reachable through the zoom controls.
pub const ZOOM_MAX: f64 = 2.0;

/// Increment applied by a single zoom-in / zoom-out.
pub const ZOOM_STEP: f64 = 0.25;

/// Zoom factor a freshly opened document starts at.
pub const ZOOM_DEFAULT: f64 = 1.0;
