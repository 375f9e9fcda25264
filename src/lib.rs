//! Placement engine for signature and stamp markers on paged documents.
//!
//! The crate owns the part of a document-signing viewer that has to be exact:
//! turning pointer and viewport events into document-space positions, keeping
//! markers inside their page, and rolling a marker onto the neighbouring page
//! when a drop pushes it past the top or bottom edge. Everything it stores is
//! zoom-independent; the host scales by the current zoom only when drawing.
//!
//! The host (a UI toolkit, a WASM bridge, or the `placement` replay binary) is
//! responsible for rasterizing pages, reporting page sizes and layout, and
//! forwarding raw drag/click events to [`engine::Engine`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`coords`] | Page lookup, vertical rollover, and bounds clamping (pure functions) |
//! | [`doc`] | Placed markers and the [`doc::PlacementStore`] |
//! | [`engine`] | Interaction controller: drag/drop/click handlers returning [`engine::Action`]s |
//! | [`input`] | Drag gesture state machine |
//! | [`source`] | Document and viewport collaborator contracts, boundary validation |
//! | [`viewer`] | Zoom controls and current-page tracking |
//! | [`render`] | Zoom-scaled marker rectangles for the rendering layer |
//! | [`persist`] | Save record for the persistence layer |
//! | [`config`] | Environment-driven configuration |
//! | [`replay`] | Scripted event replay |
//! | [`geometry`] | Points, sizes, and zoom conversions |
//! | [`consts`] | Shared numeric constants (marker size, zoom limits) |

pub mod config;
pub mod consts;
pub mod coords;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod persist;
pub mod render;
pub mod replay;
pub mod source;
pub mod viewer;
