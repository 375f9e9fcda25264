#![allow(clippy::float_cmp)]

use super::*;

fn run_json(json: &str) -> Result<SaveRecord, ReplayError> {
    run(PlacementConfig::default(), parse(json)?)
}

#[test]
fn click_then_drag_past_bottom_rolls_to_next_page() {
    let record = run_json(
        r#"{
            "pages": [
                {"width": 612, "height": 800},
                {"width": 612, "height": 800},
                {"width": 612, "height": 800}
            ],
            "zoom": 1.5,
            "steps": [
                {"event": "go_to_page", "page": 2},
                {"event": "palette_click", "kind": "stamp"},
                {"event": "item_drag_start", "id": 0},
                {"event": "drag_over"},
                {"event": "drop_at", "page": 2, "x": 256, "y": 810}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(record.signature_fields.len(), 1);
    let field = &record.signature_fields[0];
    assert_eq!(field.kind, ItemKind::Stamp);
    assert_eq!((field.page, field.y), (3, 0.0));
}

#[test]
fn pointer_drop_on_stacked_pages() {
    let record = run_json(
        r#"{
            "pages": [{"width": 612, "height": 800}, {"width": 612, "height": 800}],
            "steps": [
                {"event": "palette_drag_start", "kind": "signature"},
                {"event": "drop", "x": 300, "y": 100}
            ]
        }"#,
    )
    .unwrap();

    let field = &record.signature_fields[0];
    assert_eq!(field.page, 1);
    assert_eq!((field.x, field.y), (250.0, 85.0));
}

#[test]
fn pointer_drop_in_page_gap_is_discarded() {
    let record = run_json(
        r#"{
            "pages": [{"width": 612, "height": 800}, {"width": 612, "height": 800}],
            "steps": [
                {"event": "palette_drag_start", "kind": "signature"},
                {"event": "drop", "x": 300, "y": 810},
                {"event": "drop", "x": 300, "y": 100}
            ]
        }"#,
    )
    .unwrap();

    // The second drop has no gesture left to finish.
    assert!(record.signature_fields.is_empty());
}

#[test]
fn zoom_change_relayouts_pages() {
    let record = run_json(
        r#"{
            "pages": [{"width": 612, "height": 800}, {"width": 612, "height": 800}],
            "steps": [
                {"event": "zoom_in"},
                {"event": "palette_drag_start", "kind": "stamp"},
                {"event": "drop", "x": 125, "y": 1100}
            ]
        }"#,
    )
    .unwrap();

    // At zoom 1.25 page 2 starts at 800 * 1.25 + 32 = 1032.
    let field = &record.signature_fields[0];
    assert_eq!(field.page, 2);
    assert!((field.x - 50.0).abs() < 1e-9);
    assert!((field.y - 39.4).abs() < 1e-9);
}

#[test]
fn complete_and_delete_steps() {
    let record = run_json(
        r#"{
            "pages": [{"width": 612, "height": 800}],
            "steps": [
                {"event": "palette_click", "kind": "signature"},
                {"event": "palette_click", "kind": "stamp"},
                {"event": "complete", "id": 1},
                {"event": "delete", "id": 0},
                {"event": "delete", "id": 0}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(record.signature_fields.len(), 1);
    assert_eq!(record.signature_fields[0].id, 1);
    assert_eq!(record.signature_fields[0].status, ItemStatus::Completed);
}

#[test]
fn fixed_viewport_is_used_as_given() {
    let record = run_json(
        r#"{
            "pages": [{"width": 612, "height": 800}, {"width": 612, "height": 800}],
            "viewport": {
                "container_top": 50,
                "scroll_top": 200,
                "pages": [{"top": 0, "height": 800}, {"top": 900, "height": 800}]
            },
            "steps": [
                {"event": "palette_drag_start", "kind": "stamp"},
                {"event": "drop", "x": 300, "y": 765}
            ]
        }"#,
    )
    .unwrap();

    // 765 - 50 + 200 = 915 → 15 into page 2, marker top at 0.
    let field = &record.signature_fields[0];
    assert_eq!((field.page, field.y), (2, 0.0));
}

#[test]
fn empty_document_is_rejected() {
    let err = run_json(r#"{"pages": []}"#).unwrap_err();
    assert!(matches!(err, ReplayError::Layout(LayoutError::Empty)));
}

#[test]
fn negative_page_height_is_rejected() {
    let err = run_json(r#"{"pages": [{"width": 612, "height": -800}]}"#).unwrap_err();
    assert!(err.to_string().contains("invalid document"));
}

#[test]
fn zero_zoom_is_rejected() {
    let err = run_json(r#"{"pages": [{"width": 612, "height": 800}], "zoom": 0}"#).unwrap_err();
    assert!(matches!(err, ReplayError::Layout(LayoutError::InvalidZoom(_))));
}

#[test]
fn unknown_event_is_rejected() {
    let err = run_json(r#"{"pages": [{"width": 612, "height": 800}], "steps": [{"event": "resize"}]}"#).unwrap_err();
    assert!(matches!(err, ReplayError::Json(_)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(parse("{"), Err(ReplayError::Json(_))));
}
