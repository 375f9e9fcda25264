use crate::config::PlacementConfig;
use crate::coords::{centered, clamp_x, clamp_y, locate_page, resolve_overflow};
use crate::doc::{ItemId, ItemKind, ItemStatus, PlacedItem, PlacementStore};
use crate::geometry::{Point, Size, screen_to_document};
use crate::input::{DraggedItem, InputState, PointerPos};
use crate::persist::SaveRecord;
use crate::render::{MarkerRect, page_markers};
use crate::source::{DocumentSource, LayoutError, Viewport, validate_page_size};
use crate::viewer::{ViewerState, scroll_offset_for};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ItemCreated(PlacedItem),
    ItemMoved { id: ItemId, page: u32, x: f64, y: f64 },
    ItemDeleted { id: ItemId },
    StatusChanged { id: ItemId, status: ItemStatus },
    PageChanged(u32),
    ScrollTo { offset: f64 },
    RenderNeeded,
}

/// A resolved target for a dropped or clicked marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub page: u32,
    pub x: f64,
    pub y: f64,
}

/// Interaction controller: owns the placement store and routes host events
/// through the coordinate engine into it.
///
/// Every handler is a synchronous `&mut self` call that fully applies its
/// mutation before returning, so the store is always a consistent snapshot
/// between events. Handlers never fail: drops outside any page, missing ids,
/// and events before a document is loaded all come back as an empty action
/// list.
pub struct Engine {
    store: PlacementStore,
    viewer: ViewerState,
    input: InputState,
    viewport: Viewport,
    document: Option<Box<dyn DocumentSource>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(PlacementConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new(config: PlacementConfig) -> Self {
        Self {
            store: PlacementStore::with_item_size(config.item_size),
            viewer: ViewerState::new(config.zoom),
            input: InputState::default(),
            viewport: Viewport::default(),
            document: None,
        }
    }

    // --- Data inputs ---

    /// Attach a document and return to page 1.
    ///
    /// Unlike a viewer that carries fields across documents, every marker from
    /// the previous document is dropped: their pages and bounds belong to a
    /// different file. Ids keep counting and the gesture resets.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Empty`] and keeps the current document if the
    /// new one reports no pages.
    pub fn load_document<D>(&mut self, document: D) -> Result<Vec<Action>, LayoutError>
    where
        D: DocumentSource + 'static,
    {
        let pages = document.page_count();
        if pages == 0 {
            tracing::warn!("rejected document with no pages");
            return Err(LayoutError::Empty);
        }
        tracing::debug!(pages, "document loaded");
        self.store.clear();
        self.input = InputState::Idle;
        self.viewer.go_to_page(1, pages);
        self.document = Some(Box::new(document));
        Ok(vec![Action::RenderNeeded])
    }

    /// Detach the current document. Later interactions become no-ops.
    pub fn unload_document(&mut self) {
        self.document = None;
        self.input = InputState::Idle;
    }

    /// Replace the viewport snapshot after the host lays pages out or scrolls.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] and keeps the previous snapshot if any page
    /// layout is unusable.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<Vec<Action>, LayoutError> {
        if let Err(e) = viewport.validate() {
            tracing::warn!(error = %e, "rejected viewport");
            return Err(e);
        }
        self.viewport = viewport;
        Ok(self.sync_current_page())
    }

    /// Record a new scroll offset and follow the page in view.
    pub fn on_scroll(&mut self, scroll_top: f64) -> Vec<Action> {
        if !scroll_top.is_finite() {
            return Vec::new();
        }
        self.viewport.scroll_top = scroll_top;
        self.sync_current_page()
    }

    fn sync_current_page(&mut self) -> Vec<Action> {
        if self.document.is_none() {
            return Vec::new();
        }
        self.viewer
            .track_scroll(self.viewport.scroll_top, self.viewport.container_height, &self.viewport.pages)
            .map(|page| vec![Action::PageChanged(page)])
            .unwrap_or_default()
    }

    // --- Viewer controls ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        let before = self.viewer.zoom();
        self.viewer.zoom_in();
        self.zoom_changed(before)
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        let before = self.viewer.zoom();
        self.viewer.zoom_out();
        self.zoom_changed(before)
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Vec<Action> {
        let before = self.viewer.zoom();
        self.viewer.set_zoom(zoom);
        self.zoom_changed(before)
    }

    #[allow(clippy::float_cmp)]
    fn zoom_changed(&self, before: f64) -> Vec<Action> {
        if self.viewer.zoom() == before {
            return Vec::new();
        }
        tracing::debug!(zoom = self.viewer.zoom(), "zoom changed");
        vec![Action::RenderNeeded]
    }

    /// Thumbnail click: make `page` current and scroll to it.
    pub fn go_to_page(&mut self, page: u32) -> Vec<Action> {
        let Some(count) = self.document.as_ref().map(|d| d.page_count()) else {
            return Vec::new();
        };
        if !self.viewer.go_to_page(page, count) {
            return Vec::new();
        }
        let mut actions = vec![Action::PageChanged(page)];
        actions.extend(self.scroll_to(page));
        actions
    }

    pub fn toggle_thumbnails(&mut self) -> bool {
        self.viewer.toggle_thumbnails()
    }

    fn scroll_to(&self, page: u32) -> Option<Action> {
        scroll_offset_for(page, &self.viewport.pages).map(|offset| Action::ScrollTo { offset })
    }

    // --- Palette ---

    /// Palette click: place a new marker centered on the current page.
    pub fn on_palette_click(&mut self, kind: ItemKind) -> Vec<Action> {
        let Some(document) = self.document.as_deref() else {
            tracing::debug!("palette click ignored: no document");
            return Vec::new();
        };
        let page = self.viewer.current_page();
        let Some(page_size) = document_page_size(document, page, self.viewer.zoom()) else {
            tracing::debug!(page, "palette click ignored: page size unavailable");
            return Vec::new();
        };
        let at = centered(page_size, self.store.item_size());
        let item = self.store.create_item(kind, page, at.x, at.y);
        tracing::debug!(id = item.id, page, "item placed from palette click");

        let mut actions = vec![Action::ItemCreated(item)];
        actions.extend(self.scroll_to(page));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Palette drag-start: begin dragging a not-yet-created marker.
    pub fn on_palette_drag_start(&mut self, kind: ItemKind) {
        self.begin_drag(DraggedItem::Palette { kind });
    }

    // --- Existing markers ---

    /// Marker drag-start: begin moving an existing marker. The store is not
    /// touched until the drop.
    pub fn on_item_drag_start(&mut self, id: ItemId) {
        self.begin_drag(DraggedItem::Existing { id });
    }

    fn begin_drag(&mut self, dragged: DraggedItem) {
        if self.document.is_none() {
            tracing::debug!(?dragged, "drag ignored: no document");
            return;
        }
        if let InputState::Dragging(previous) = self.input {
            tracing::debug!(?previous, ?dragged, "drag restarted before drop");
        }
        self.input = InputState::Dragging(dragged);
    }

    /// Drag-over on any target. Always returns `true`: the host should
    /// suppress the platform's default "no drop" handling. No state changes.
    #[must_use]
    pub fn on_drag_over(&self) -> bool {
        true
    }

    /// Delete click on a marker. Independent of any gesture in progress.
    pub fn on_delete(&mut self, id: ItemId) -> Vec<Action> {
        if self.document.is_none() {
            return Vec::new();
        }
        match self.store.delete_item(id) {
            Some(_) => {
                tracing::debug!(id, "item deleted");
                vec![Action::ItemDeleted { id }, Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    /// Workflow hook: mark a marker as fulfilled (or pending again).
    pub fn set_status(&mut self, id: ItemId, status: ItemStatus) -> Vec<Action> {
        if self.store.set_status(id, status) {
            vec![Action::StatusChanged { id, status }, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Drop ---

    /// Drop at a client-space pointer position.
    ///
    /// The pointer marks the marker's center. The page under it is found from
    /// the viewport snapshot, the offset within the page is normalized by the
    /// zoom, and the result goes through rollover and clamping. A drop outside
    /// every page is discarded. The gesture always ends.
    pub fn on_drop(&mut self, pointer: PointerPos) -> Vec<Action> {
        let input = std::mem::take(&mut self.input);
        let Some(dragged) = input.dragged() else {
            return Vec::new();
        };
        if self.document.is_none() {
            return Vec::new();
        }
        let vp = &self.viewport;
        let Some(hit) = locate_page(pointer.y, vp.container_top, vp.scroll_top, &vp.pages) else {
            tracing::debug!(?dragged, x = pointer.x, y = pointer.y, "drop outside pages discarded");
            return Vec::new();
        };
        let Some(size) = self.dragged_size(dragged) else {
            tracing::debug!(?dragged, "drop discarded: item no longer exists");
            return Vec::new();
        };

        let zoom = self.viewer.zoom();
        let doc_x = screen_to_document(pointer.x - vp.container_left - hit.left, zoom) - size.width / 2.0;
        let doc_y = screen_to_document(pointer.y - vp.container_top + vp.scroll_top - hit.top, zoom) - size.height / 2.0;
        self.place(dragged, size, hit.page, Point::new(doc_x, doc_y))
    }

    /// Drop with the page and document-space top-left corner already known,
    /// e.g. when the host handles drops on each page element itself. The
    /// position still goes through rollover and clamping. The gesture always
    /// ends.
    pub fn on_drop_at(&mut self, page: u32, at: Point) -> Vec<Action> {
        let input = std::mem::take(&mut self.input);
        let Some(dragged) = input.dragged() else {
            return Vec::new();
        };
        if self.document.is_none() {
            return Vec::new();
        }
        let Some(size) = self.dragged_size(dragged) else {
            return Vec::new();
        };
        self.place(dragged, size, page, at)
    }

    fn dragged_size(&self, dragged: DraggedItem) -> Option<Size> {
        match dragged {
            DraggedItem::Existing { id } => self.store.get(id).map(PlacedItem::size),
            DraggedItem::Palette { .. } => Some(self.store.item_size()),
        }
    }

    fn place(&mut self, dragged: DraggedItem, size: Size, page: u32, at: Point) -> Vec<Action> {
        let Some(target) = self.resolve(page, at, size) else {
            tracing::debug!(?dragged, page, "drop discarded: page size unavailable");
            return Vec::new();
        };
        match dragged {
            DraggedItem::Existing { id } => {
                if !self.store.relocate_item(id, target.page, target.x, target.y) {
                    return Vec::new();
                }
                tracing::debug!(id, page = target.page, x = target.x, y = target.y, "item moved");
                vec![Action::ItemMoved { id, page: target.page, x: target.x, y: target.y }, Action::RenderNeeded]
            }
            DraggedItem::Palette { kind } => {
                let item = self.store.create_item(kind, target.page, target.x, target.y);
                tracing::debug!(id = item.id, page = item.page, "item placed from drop");
                vec![Action::ItemCreated(item), Action::RenderNeeded]
            }
        }
    }

    /// Run a candidate document-space position on `page` through rollover and
    /// clamping. `None` when the document cannot report the page's size.
    ///
    /// After a rollover the position is clamped again against the destination
    /// page, which only matters when neighbouring pages differ in size.
    #[must_use]
    pub fn resolve(&self, page: u32, at: Point, size: Size) -> Option<Placement> {
        let document = self.document.as_deref()?;
        let zoom = self.viewer.zoom();
        let page_size = document_page_size(document, page, zoom)?;

        let rolled = resolve_overflow(at.y, page, page_size.height, size.height, document.page_count());
        let dest = if rolled.page == page { page_size } else { document_page_size(document, rolled.page, zoom)? };

        Some(Placement {
            page: rolled.page,
            x: clamp_x(at.x, dest.width, size.width),
            y: clamp_y(rolled.y, dest.height, size.height),
        })
    }

    // --- Persistence ---

    /// Snapshot every marker for the persistence sink.
    #[must_use]
    pub fn save(&self) -> SaveRecord {
        let record = SaveRecord::from_store(&self.store);
        tracing::info!(fields = record.signature_fields.len(), "placement snapshot taken");
        record
    }

    // --- Queries ---

    #[must_use]
    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Page count of the loaded document, or 0 without one.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.document.as_ref().map_or(0, |d| d.page_count())
    }

    /// Markers on `page` scaled to the current zoom, for the rendering layer.
    #[must_use]
    pub fn markers_on_page(&self, page: u32) -> Vec<MarkerRect> {
        page_markers(&self.store, page, self.viewer.zoom())
    }
}

/// Document-space size of `page`, normalized from the rendered size at `zoom`.
/// Unusable sizes are logged and treated as unavailable.
fn document_page_size(document: &dyn DocumentSource, page: u32, zoom: f64) -> Option<Size> {
    let size = document.page_dimensions(page, zoom)?.to_document(zoom);
    match validate_page_size(page, size) {
        Ok(size) => Some(size),
        Err(e) => {
            tracing::warn!(error = %e, "rejected page size from document");
            None
        }
    }
}
