#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn markers_scale_with_zoom() {
    let mut store = PlacementStore::new();
    store.create_item(ItemKind::Stamp, 2, 256.0, 385.0);

    let rects = page_markers(&store, 2, 1.5);
    assert_eq!(rects.len(), 1);
    let r = &rects[0];
    assert_eq!((r.left, r.top), (384.0, 577.5));
    assert_eq!((r.width, r.height), (150.0, 45.0));
    assert_eq!(r.status, ItemStatus::Pending);
}

#[test]
fn markers_at_identity_zoom_match_store() {
    let mut store = PlacementStore::new();
    let item = store.create_item(ItemKind::Signature, 1, 12.0, 34.0);
    let r = MarkerRect::from_item(&item, 1.0);
    assert_eq!((r.left, r.top, r.width, r.height), (12.0, 34.0, 100.0, 30.0));
}

#[test]
fn markers_only_for_requested_page_in_draw_order() {
    let mut store = PlacementStore::new();
    store.create_item(ItemKind::Stamp, 1, 0.0, 0.0);
    store.create_item(ItemKind::Signature, 2, 0.0, 0.0);
    store.create_item(ItemKind::Signature, 1, 0.0, 0.0);

    let ids: Vec<ItemId> = page_markers(&store, 1, 1.0).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 2]);
    assert!(page_markers(&store, 3, 1.0).is_empty());
}

#[test]
fn label_names_kind_and_id() {
    let mut store = PlacementStore::new();
    store.create_item(ItemKind::Signature, 1, 0.0, 0.0);
    let stamp = store.create_item(ItemKind::Stamp, 1, 0.0, 0.0);
    assert_eq!(label(&stamp), "Stamp #1");
    assert_eq!(page_markers(&store, 1, 1.0)[0].label, "Signature #0");
}
