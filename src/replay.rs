//! Scripted replay of host events.
//!
//! A script describes a document (page sizes at zoom 1.0), an optional
//! viewport, and a list of UI events. Replaying it drives an [`Engine`] exactly
//! the way a host would and returns the final save record. When the script has
//! no viewport, pages are stacked in a single column and re-laid-out after every
//! zoom change, the way a scrolling page view behaves.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use serde::Deserialize;

use crate::config::PlacementConfig;
use crate::doc::{ItemId, ItemKind, ItemStatus};
use crate::engine::{Action, Engine};
use crate::geometry::{Point, Size};
use crate::persist::SaveRecord;
use crate::source::{LayoutError, PageSizes, Viewport, validate_zoom};

/// Gap between stacked pages, in pixels.
const DEFAULT_PAGE_GAP: f64 = 32.0;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("invalid script: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid document: {0}")]
    Layout(#[from] LayoutError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Page sizes at zoom 1.0, page 1 first.
    pub pages: Vec<Size>,
    /// Initial zoom; the configured default when absent.
    #[serde(default)]
    pub zoom: Option<f64>,
    /// Fixed viewport. When absent, pages are stacked automatically.
    #[serde(default)]
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One host event.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Step {
    PaletteClick { kind: ItemKind },
    PaletteDragStart { kind: ItemKind },
    ItemDragStart { id: ItemId },
    DragOver,
    /// Drop at a client-space pointer position.
    Drop { x: f64, y: f64 },
    /// Drop at a document-space position on a known page.
    DropAt { page: u32, x: f64, y: f64 },
    Delete { id: ItemId },
    Complete { id: ItemId },
    Scroll { top: f64 },
    ZoomIn,
    ZoomOut,
    SetZoom { zoom: f64 },
    GoToPage { page: u32 },
}

/// Parse a JSON script.
///
/// # Errors
///
/// Returns [`ReplayError::Json`] for malformed input.
pub fn parse(input: &str) -> Result<Script, ReplayError> {
    Ok(serde_json::from_str(input)?)
}

/// Replay `script` on a fresh engine and return the final save record.
///
/// # Errors
///
/// Returns [`ReplayError::Layout`] when the page sizes, zoom, or viewport are
/// unusable. Individual steps never fail.
pub fn run(config: PlacementConfig, script: Script) -> Result<SaveRecord, ReplayError> {
    let document = PageSizes::new(script.pages)?;
    let mut engine = Engine::new(config);
    if let Some(zoom) = script.zoom {
        engine.set_zoom(validate_zoom(zoom)?);
    }

    let auto_layout = script.viewport.is_none();
    let viewport = script.viewport.unwrap_or_else(|| Viewport {
        pages: document.stacked_layouts(engine.viewer().zoom(), DEFAULT_PAGE_GAP),
        ..Default::default()
    });
    engine.load_document(document.clone())?;
    engine.set_viewport(viewport)?;

    for step in script.steps {
        let actions = apply(&mut engine, step);
        if auto_layout && actions.contains(&Action::RenderNeeded) {
            relayout(&mut engine, &document)?;
        }
    }

    Ok(engine.save())
}

fn apply(engine: &mut Engine, step: Step) -> Vec<Action> {
    tracing::trace!(?step, "replay step");
    match step {
        Step::PaletteClick { kind } => engine.on_palette_click(kind),
        Step::PaletteDragStart { kind } => {
            engine.on_palette_drag_start(kind);
            Vec::new()
        }
        Step::ItemDragStart { id } => {
            engine.on_item_drag_start(id);
            Vec::new()
        }
        Step::DragOver => {
            tracing::trace!(accepted = engine.on_drag_over(), "drag over");
            Vec::new()
        }
        Step::Drop { x, y } => engine.on_drop(Point::new(x, y)),
        Step::DropAt { page, x, y } => engine.on_drop_at(page, Point::new(x, y)),
        Step::Delete { id } => engine.on_delete(id),
        Step::Complete { id } => engine.set_status(id, ItemStatus::Completed),
        Step::Scroll { top } => engine.on_scroll(top),
        Step::ZoomIn => engine.zoom_in(),
        Step::ZoomOut => engine.zoom_out(),
        Step::SetZoom { zoom } => engine.set_zoom(zoom),
        Step::GoToPage { page } => {
            let mut actions = engine.go_to_page(page);
            let offset = actions.iter().find_map(|action| match action {
                Action::ScrollTo { offset } => Some(*offset),
                _ => None,
            });
            if let Some(offset) = offset {
                actions.extend(engine.on_scroll(offset));
            }
            actions
        }
    }
}

/// Re-stack pages at the current zoom, keeping the scroll offset.
fn relayout(engine: &mut Engine, document: &PageSizes) -> Result<(), LayoutError> {
    let viewport = Viewport {
        pages: document.stacked_layouts(engine.viewer().zoom(), DEFAULT_PAGE_GAP),
        ..engine.viewport().clone()
    };
    engine.set_viewport(viewport)?;
    Ok(())
}
