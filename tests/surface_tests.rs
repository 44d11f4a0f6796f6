//! Interactive surface tests
//!
//! The event contract between input and the reordering core: drops, axis
//! enters, cell hover, pointer/touch/keyboard gestures and cancellation.
//!
//! Geometry uses the default config: 26px handle strips, a 5px gap (cells
//! start at 31) and 96 × 26 cells.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridshift::config::GridConfig;
use gridshift::drag::Sensor;
use gridshift::order::Order;
use gridshift::render::PaintOp;
use gridshift::surface::{GridSurface, Key};
use gridshift::types::{AxisMode, Column, GeneratedGrid, HoverPosition, Row, StableId};
use test_case::test_case;

const ORIGIN: f32 = 31.0;
const CELL_W: f32 = 96.0;
const CELL_H: f32 = 26.0;

/// Center of row handle `i`.
fn row_handle(i: usize) -> (f32, f32) {
    (13.0, ORIGIN + CELL_H * i as f32 + CELL_H / 2.0)
}

/// Center of column handle `j`.
fn column_handle(j: usize) -> (f32, f32) {
    (ORIGIN + CELL_W * j as f32 + CELL_W / 2.0, 13.0)
}

/// Center of cell `(r, c)`.
fn cell(r: usize, c: usize) -> (f32, f32) {
    (
        ORIGIN + CELL_W * c as f32 + CELL_W / 2.0,
        ORIGIN + CELL_H * r as f32 + CELL_H / 2.0,
    )
}

fn surface(n_rows: usize, n_cols: usize) -> GridSurface {
    let columns = (0..n_cols)
        .map(|j| Column::new(format!("c{j}"), format!("k{j}")))
        .collect();
    let rows = (0..n_rows)
        .map(|i| {
            (0..n_cols).fold(Row::new(format!("r{i}")), |row, j| {
                row.with_cell(format!("k{j}"), format!("v{i}{j}"))
            })
        })
        .collect();
    let mut surface = GridSurface::new(GridConfig::default());
    surface.load(GeneratedGrid { columns, rows });
    surface
}

fn ids(order: &Order) -> Vec<&str> {
    order.iter().map(StableId::as_str).collect()
}

fn drag(surface: &mut GridSurface, from: (f32, f32), to: (f32, f32)) -> bool {
    surface.pointer_down(from.0, from.1, Sensor::Pointer);
    surface.pointer_move(to.0, to.1);
    surface.pointer_up(to.0, to.1)
}

// ============================================================================
// Core event contract
// ============================================================================

#[test]
fn test_axis_enter_reports_changes_only() {
    let mut s = surface(2, 2);
    assert!(!s.on_axis_enter(AxisMode::Row));
    assert!(s.on_axis_enter(AxisMode::Column));
    assert!(!s.on_axis_enter(AxisMode::Column));
    assert_eq!(s.core().axis_mode(), AxisMode::Column);
}

#[test]
fn test_cell_hover_is_idempotent() {
    let mut s = surface(2, 2);
    assert!(s.on_cell_hover(1, 0));
    assert!(!s.on_cell_hover(1, 0));
    assert_eq!(s.core().hover(), HoverPosition::cell(1, 0));
    assert!(s.on_hover_clear());
    assert!(!s.on_hover_clear());
}

#[test]
fn test_drag_end_uses_axis_mode() {
    let mut s = surface(3, 3);
    assert!(s.on_drag_end(&"r0".into(), &"r2".into()));
    assert_eq!(ids(s.core().row_order()), ["r1", "r2", "r0"]);
    // Column ids are ignored while in row mode
    assert!(!s.on_drag_end(&"c0".into(), &"c2".into()));
    assert_eq!(ids(s.core().column_order()), ["c0", "c1", "c2"]);
}

#[test]
fn test_load_resets_state() {
    let mut s = surface(3, 3);
    s.on_axis_enter(AxisMode::Column);
    s.on_cell_hover(1, 1);
    s.on_drag_end(&"c2".into(), &"c0".into());

    let columns = vec![Column::new("x", "kx")];
    let rows = vec![Row::new("y")];
    s.load(GeneratedGrid { columns, rows });
    assert_eq!(ids(s.core().column_order()), ["x"]);
    assert_eq!(ids(s.core().row_order()), ["y"]);
    assert_eq!(s.core().axis_mode(), AxisMode::Row);
    assert!(s.core().hover().is_none());
    assert_eq!(s.layout().column_count(), 1);
}

// ============================================================================
// Pointer input
// ============================================================================

#[test]
fn test_entering_handles_switches_axis() {
    let mut s = surface(2, 2);
    let (x, y) = column_handle(1);
    assert!(s.pointer_move(x, y));
    assert_eq!(s.core().axis_mode(), AxisMode::Column);
    let (x, y) = row_handle(0);
    assert!(s.pointer_move(x, y));
    assert_eq!(s.core().axis_mode(), AxisMode::Row);
}

#[test]
fn test_entering_cells_sets_hover() {
    let mut s = surface(3, 3);
    let (x, y) = cell(2, 1);
    assert!(s.pointer_move(x, y));
    assert_eq!(s.core().hover(), HoverPosition::cell(2, 1));
    // Same cell again is not an enter
    assert!(!s.pointer_move(x + 1.0, y));
    // Handles and gaps keep the last hover
    let (x, y) = row_handle(0);
    s.pointer_move(x, y);
    assert_eq!(s.core().hover(), HoverPosition::cell(2, 1));
    assert!(s.pointer_leave());
    assert!(s.core().hover().is_none());
}

#[test_case(0, 2, &["r1", "r2", "r0", "r3"] ; "down two")]
#[test_case(3, 1, &["r0", "r3", "r1", "r2"] ; "up two")]
#[test_case(1, 2, &["r0", "r2", "r1", "r3"] ; "down one")]
fn test_row_drag(from: usize, to: usize, expected: &[&str]) {
    let mut s = surface(4, 2);
    assert!(drag(&mut s, row_handle(from), row_handle(to)));
    assert_eq!(ids(s.core().row_order()), expected);
    assert_eq!(ids(s.core().column_order()), ["c0", "c1"]);
    assert!(!s.drag().is_pressed());
}

#[test]
fn test_column_drag_ignores_vertical_travel() {
    let mut s = surface(2, 3);
    let (x0, y0) = column_handle(0);
    let (x2, _) = column_handle(2);
    // Pointer wanders into the cells; only the horizontal delta counts
    assert!(drag(&mut s, (x0, y0), (x2, y0 + 40.0)));
    assert_eq!(ids(s.core().column_order()), ["c1", "c2", "c0"]);
    assert_eq!(ids(s.core().row_order()), ["r0", "r1"]);
}

#[test]
fn test_row_drag_ignores_horizontal_travel() {
    let mut s = surface(3, 3);
    let (x, y) = row_handle(0);
    let (_, y2) = row_handle(2);
    assert!(drag(&mut s, (x, y), (x + 150.0, y2)));
    assert_eq!(ids(s.core().row_order()), ["r1", "r2", "r0"]);
}

#[test]
fn test_click_on_handle_is_not_a_reorder() {
    let mut s = surface(3, 1);
    let (x, y) = row_handle(1);
    s.pointer_down(x, y, Sensor::Pointer);
    s.pointer_move(x + 1.0, y + 2.0);
    assert!(!s.drag().is_dragging());
    assert!(!s.pointer_up(x + 1.0, y + 2.0));
    assert_eq!(ids(s.core().row_order()), ["r0", "r1", "r2"]);
}

#[test]
fn test_drop_on_self_is_noop() {
    let mut s = surface(3, 1);
    let (x, y) = row_handle(1);
    s.pointer_down(x, y, Sensor::Pointer);
    s.pointer_move(x, y + 8.0);
    assert!(s.drag().is_dragging());
    s.pointer_up(x, y + 8.0);
    assert_eq!(ids(s.core().row_order()), ["r0", "r1", "r2"]);
}

#[test]
fn test_press_on_cell_starts_nothing() {
    let mut s = surface(2, 2);
    let (x, y) = cell(0, 0);
    s.pointer_down(x, y, Sensor::Pointer);
    assert!(!s.drag().is_pressed());
}

#[test]
fn test_drag_does_not_switch_axis_midway() {
    let mut s = surface(3, 3);
    let (x, y) = row_handle(2);
    s.pointer_down(x, y, Sensor::Pointer);
    s.pointer_move(x, y - 20.0);
    assert!(s.drag().is_dragging());
    // Cross the column strip while holding a row
    let (cx, cy) = column_handle(1);
    s.pointer_move(cx, cy);
    assert_eq!(s.core().axis_mode(), AxisMode::Row);
    let (_, y0) = row_handle(0);
    s.pointer_up(x, y0);
    assert_eq!(ids(s.core().row_order()), ["r2", "r0", "r1"]);
}

#[test]
fn test_first_move_into_column_strip_keeps_row_axis() {
    let mut s = surface(4, 2);
    let (x, y) = row_handle(3);
    s.pointer_down(x, y, Sensor::Pointer);
    // One move from the pending press straight onto a column handle
    let (cx, cy) = column_handle(0);
    s.pointer_move(cx, cy);
    assert_eq!(s.core().axis_mode(), AxisMode::Row);
    assert_eq!(s.drag().axis(), Some(AxisMode::Row));
    assert!(s.pointer_up(cx, cy));
    assert_eq!(ids(s.core().row_order()), ["r3", "r0", "r1", "r2"]);
    assert_eq!(ids(s.core().column_order()), ["c0", "c1"]);
}

#[test]
fn test_press_syncs_axis_without_prior_move() {
    let mut s = surface(3, 2);
    let (x, y) = row_handle(1);
    s.pointer_move(x, y);
    // Keyboard focus moves the axis while the pointer rests on the row handle
    assert!(s.focus_handle(AxisMode::Column, 0));
    assert_eq!(s.core().axis_mode(), AxisMode::Column);

    s.pointer_down(x, y, Sensor::Pointer);
    assert_eq!(s.core().axis_mode(), AxisMode::Row);
    let (_, y2) = row_handle(2);
    s.pointer_move(x, y2);
    assert!(s.pointer_up(x, y2));
    assert_eq!(ids(s.core().row_order()), ["r0", "r2", "r1"]);
}

#[test]
fn test_drag_survives_leaving_the_grid() {
    let mut s = surface(3, 1);
    let (x, y) = row_handle(0);
    s.pointer_down(x, y, Sensor::Pointer);
    s.pointer_move(x, y + 30.0);
    s.pointer_leave();
    assert!(s.drag().is_dragging());
    let (_, y2) = row_handle(2);
    s.pointer_up(x, y2);
    assert_eq!(ids(s.core().row_order()), ["r1", "r2", "r0"]);
}

#[test]
fn test_release_far_past_the_end_clamps_to_last() {
    let mut s = surface(3, 1);
    let (x, y) = row_handle(0);
    assert!(drag(&mut s, (x, y), (x, y + 1_000.0)));
    assert_eq!(ids(s.core().row_order()), ["r1", "r2", "r0"]);
}

#[test]
fn test_cancel_discards_gesture() {
    let mut s = surface(3, 1);
    let (x, y) = row_handle(0);
    let (_, y2) = row_handle(2);
    s.pointer_down(x, y, Sensor::Pointer);
    s.pointer_move(x, y2);
    assert!(s.key_down(Key::Escape));
    assert!(!s.pointer_up(x, y2));
    assert_eq!(ids(s.core().row_order()), ["r0", "r1", "r2"]);
}

#[test]
fn test_touch_drag() {
    let mut s = surface(3, 2);
    let (x, y) = column_handle(1);
    let (x0, _) = column_handle(0);
    s.pointer_down(x, y, Sensor::Touch);
    s.pointer_move(x0, y);
    assert_eq!(s.drag().sensor(), Some(Sensor::Touch));
    assert!(s.pointer_up(x0, y));
    assert_eq!(ids(s.core().column_order()), ["c1", "c0"]);
}

#[test]
fn test_cursor_feedback() {
    let mut s = surface(2, 2);
    let (x, y) = cell(0, 0);
    s.pointer_move(x, y);
    assert_eq!(s.cursor(), "default");
    let (x, y) = row_handle(0);
    s.pointer_move(x, y);
    assert_eq!(s.cursor(), "grab");
    s.pointer_down(x, y, Sensor::Pointer);
    s.pointer_move(x, y + 10.0);
    assert_eq!(s.cursor(), "grabbing");
}

// ============================================================================
// Keyboard input
// ============================================================================

#[test_case("ArrowUp", Some(Key::Up))]
#[test_case("ArrowRight", Some(Key::Right))]
#[test_case(" ", Some(Key::Activate))]
#[test_case("Enter", Some(Key::Activate))]
#[test_case("Escape", Some(Key::Escape))]
#[test_case("a", None)]
fn test_key_from_dom(name: &str, expected: Option<Key>) {
    assert_eq!(Key::from_dom(name), expected);
}

#[test]
fn test_keyboard_row_move() {
    let mut s = surface(4, 1);
    assert!(s.focus_handle(AxisMode::Row, 0));
    assert!(s.key_down(Key::Activate));
    assert!(s.drag().is_dragging());
    assert!(s.key_down(Key::Down));
    assert!(s.key_down(Key::Down));
    assert_eq!(s.drag().over_id(), Some(&StableId::from("r2")));
    assert!(s.key_down(Key::Activate));
    assert_eq!(ids(s.core().row_order()), ["r1", "r2", "r0", "r3"]);
    // Focus follows the moved row
    assert_eq!(s.focus(), Some((AxisMode::Row, 2)));
}

#[test]
fn test_keyboard_column_move_and_clamp() {
    let mut s = surface(1, 3);
    s.focus_handle(AxisMode::Column, 1);
    assert_eq!(s.core().axis_mode(), AxisMode::Column);
    s.key_down(Key::Activate);
    s.key_down(Key::Left);
    s.key_down(Key::Left);
    s.key_down(Key::Left);
    // Arrows across the axis do nothing
    assert!(!s.key_down(Key::Down));
    s.key_down(Key::Activate);
    assert_eq!(ids(s.core().column_order()), ["c1", "c0", "c2"]);
}

#[test]
fn test_keyboard_escape_cancels() {
    let mut s = surface(3, 1);
    s.focus_handle(AxisMode::Row, 0);
    s.key_down(Key::Activate);
    s.key_down(Key::Down);
    assert!(s.key_down(Key::Escape));
    assert!(!s.drag().is_pressed());
    assert_eq!(ids(s.core().row_order()), ["r0", "r1", "r2"]);
}

#[test]
fn test_arrows_move_focus_when_idle() {
    let mut s = surface(3, 1);
    assert!(!s.key_down(Key::Down));
    s.focus_handle(AxisMode::Row, 0);
    s.key_down(Key::Down);
    s.key_down(Key::Down);
    s.key_down(Key::Down);
    assert_eq!(s.focus(), Some((AxisMode::Row, 2)));
    assert!(!s.focus_handle(AxisMode::Row, 7));
}

// ============================================================================
// Display list and preview
// ============================================================================

#[test]
fn test_display_list_starts_with_clear() {
    let s = surface(2, 2);
    let ops = s.display_list();
    let (w, h) = s.layout().total_size();
    assert_eq!(
        ops[0],
        PaintOp::Clear {
            width: w,
            height: h,
            color: s.config().cell_bg_color.clone(),
        }
    );
    assert_eq!(w, ORIGIN + 2.0 * CELL_W);
    assert_eq!(h, ORIGIN + 2.0 * CELL_H);
}

#[test]
fn test_display_list_follows_row_order() {
    let mut s = surface(2, 1);
    let first_cell_text = |s: &GridSurface| {
        s.display_list()
            .into_iter()
            .find_map(|op| match op {
                PaintOp::Text { text, .. } if text.starts_with('v') => Some(text),
                _ => None,
            })
            .unwrap()
    };
    assert_eq!(first_cell_text(&s), "v00");
    s.on_drag_end(&"r1".into(), &"r0".into());
    assert_eq!(first_cell_text(&s), "v10");
}

#[test]
fn test_preview_json_in_display_order() {
    let mut s = surface(2, 2);
    s.on_axis_enter(AxisMode::Column);
    s.on_drag_end(&"c1".into(), &"c0".into());
    let value: serde_json::Value = serde_json::from_str(&s.preview_json().unwrap()).unwrap();
    assert_eq!(value["columns"][0]["id"], "c1");
    assert_eq!(value["columns"][0]["accessorKey"], "k1");
    assert_eq!(value["data"][0]["uuid"], "r0");
    assert_eq!(value["data"][0]["k1"], "v01");
}

#[test]
fn test_set_config_rejects_invalid() {
    let mut s = surface(2, 2);
    let bad = GridConfig {
        cell_width: 0.0,
        ..GridConfig::default()
    };
    assert!(s.set_config(bad).is_err());
    assert_eq!(s.config(), &GridConfig::default());
}
