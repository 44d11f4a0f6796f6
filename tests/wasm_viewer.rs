//! Browser tests for the exported `GridView`
//!
//! Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use gridshift::GridView;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document should exist")
        .create_element("canvas")
        .expect("canvas should be creatable")
        .dyn_into::<HtmlCanvasElement>()
        .expect("element should be a canvas")
}

#[wasm_bindgen_test]
fn wasm_view_starts_empty_and_sizes_picker() {
    let picker = canvas();
    let view = GridView::new(picker.clone(), canvas(), 2.0).expect("view should build");
    assert!(view.row_order().is_empty());
    assert_eq!(view.axis_mode(), "row");
    assert_eq!(view.picker_extent(), vec![0, 0]);
    // 10 picker cells at a 27px pitch, doubled for the device pixel ratio
    assert_eq!(picker.width(), 540);
}

#[wasm_bindgen_test]
fn wasm_choose_dimensions_then_render() {
    let grid = canvas();
    let mut view = GridView::new(canvas(), grid.clone(), 1.0).expect("view should build");
    view.choose_dimensions(3, 4);
    assert_eq!(view.row_order().len(), 3);
    assert_eq!(view.column_order().len(), 4);
    view.render().expect("render should succeed");
    // 26px handle strip, 5px gap, 4 × 96px cells
    assert_eq!(grid.width(), 415);

    let json = view.preview_json().expect("preview should serialize");
    assert!(json.contains("\"accessorKey\""));
}

#[wasm_bindgen_test]
fn wasm_set_config_accepts_partial_object() {
    let mut view = GridView::new(canvas(), canvas(), 1.0).expect("view should build");
    let partial = js_sys::JSON::parse(r#"{"picker_rows": 4}"#).unwrap();
    view.set_config(partial).expect("partial config should apply");
    let invalid = js_sys::JSON::parse(r#"{"cell_width": 0}"#).unwrap();
    assert!(view.set_config(invalid).is_err());
}

#[wasm_bindgen_test]
fn wasm_generate_preview_is_seeded() {
    let a = gridshift::generate_preview(2, 2, 9).unwrap();
    let b = gridshift::generate_preview(2, 2, 9).unwrap();
    assert_eq!(a, b);
    assert!(!gridshift::version().is_empty());
}
