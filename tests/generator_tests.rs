//! Data generator and table model tests
//!
//! Grid shape, id uniqueness, seed determinism, degenerate sizes and the
//! preview JSON format.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::collections::HashSet;

use gridshift::data::{generate_grid, make_nested, person_columns, SeededSource, WEEKDAYS};
use gridshift::reorder::ReorderCore;
use gridshift::table::TableModel;
use gridshift::types::{AxisMode, CellValue};
use test_case::test_case;

#[test_case(0, 0 ; "empty")]
#[test_case(0, 5 ; "no rows")]
#[test_case(5, 0 ; "no columns")]
#[test_case(1, 1 ; "single cell")]
#[test_case(10, 10 ; "picker maximum")]
fn test_grid_dimensions(rows: usize, columns: usize) {
    let grid = generate_grid(rows, columns, &mut SeededSource::new(1));
    assert_eq!(grid.rows.len(), rows);
    assert_eq!(grid.columns.len(), columns);
    for row in &grid.rows {
        assert_eq!(row.cells.len(), columns);
        assert!(row.sub_rows.is_none());
    }
}

#[test]
fn test_ids_are_unique() {
    let grid = generate_grid(50, 40, &mut SeededSource::new(11));
    let column_ids: HashSet<_> = grid.columns.iter().map(|c| c.id.clone()).collect();
    let accessors: HashSet<_> = grid.columns.iter().map(|c| c.accessor.clone()).collect();
    let row_ids: HashSet<_> = grid.rows.iter().map(|r| r.id.clone()).collect();
    assert_eq!(column_ids.len(), 40);
    assert_eq!(accessors.len(), 40);
    assert_eq!(row_ids.len(), 50);
}

#[test]
fn test_values_are_weekdays() {
    let grid = generate_grid(20, 3, &mut SeededSource::new(2));
    for row in &grid.rows {
        for column in &grid.columns {
            match row.value(column) {
                Some(CellValue::Text(day)) => assert!(WEEKDAYS.contains(&day.as_str())),
                other => panic!("unexpected cell {other:?}"),
            }
        }
    }
}

#[test]
fn test_same_seed_same_grid() {
    let a = generate_grid(4, 3, &mut SeededSource::new(99));
    let b = generate_grid(4, 3, &mut SeededSource::new(99));
    let c = generate_grid(4, 3, &mut SeededSource::new(100));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_row_uuid_is_full_length() {
    let grid = generate_grid(3, 1, &mut SeededSource::new(3));
    for row in &grid.rows {
        assert_eq!(row.id.as_str().len(), 36);
    }
}

#[test]
fn test_grid_json_shape() {
    let grid = generate_grid(2, 2, &mut SeededSource::new(4));
    let value: serde_json::Value = serde_json::to_value(&grid).unwrap();

    let columns = value["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 2);
    assert!(columns[0]["accessorKey"].is_string());
    assert!(columns[0]["id"].is_string());

    let data = value["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    let first = data[0].as_object().unwrap();
    assert!(first["uuid"].is_string());
    // uuid plus one entry per column
    assert_eq!(first.len(), 3);
    let accessor = columns[1]["accessorKey"].as_str().unwrap();
    assert!(first[accessor].is_string());
    assert!(first.get("subRows").is_none());
}

#[test]
fn test_grid_json_round_trip() {
    let grid = generate_grid(3, 2, &mut SeededSource::new(5));
    let json = serde_json::to_string(&grid).unwrap();
    let back = serde_json::from_str(&json).unwrap();
    assert_eq!(grid, back);
}

#[test]
fn test_preview_follows_current_orders() {
    let grid = generate_grid(3, 2, &mut SeededSource::new(6));
    let mut core = ReorderCore::with_grid(&grid.columns, &grid.rows);
    let last_row = grid.rows[2].id.clone();
    let first_row = grid.rows[0].id.clone();
    core.reorder(&last_row, &first_row);
    core.set_axis_mode(AxisMode::Column);
    core.reorder(&grid.columns[1].id, &grid.columns[0].id);

    let model = TableModel::new(grid.clone());
    let json = model
        .preview_json(core.row_order(), core.column_order())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["data"][0]["uuid"], last_row.as_str());
    assert_eq!(value["columns"][0]["id"], grid.columns[1].id.as_str());
    assert_eq!(value["columns"][1]["id"], grid.columns[0].id.as_str());
}

#[test]
fn test_table_model_lookup() {
    let grid = generate_grid(2, 3, &mut SeededSource::new(7));
    let model = TableModel::new(grid.clone());
    assert_eq!(model.row_count(), 2);
    assert_eq!(model.column_count(), 3);
    assert_eq!(model.row(&grid.rows[1].id), Some(&grid.rows[1]));
    assert_eq!(model.column(&grid.columns[2].id), Some(&grid.columns[2]));
    assert_eq!(model.row(&"nope".into()), None);
}

// ============================================================================
// Nested person records
// ============================================================================

#[test]
fn test_nested_three_levels() {
    let rows = make_nested(&[3, 2, 1], &mut SeededSource::new(8));
    assert_eq!(rows.len(), 3);
    let total: usize = rows.iter().map(|r| r.depth_count()).sum();
    // 3 + 3*2 + 3*2*1
    assert_eq!(total, 15);
    let leaf = &rows[0].sub_rows.as_ref().unwrap()[0].sub_rows.as_ref().unwrap()[0];
    assert!(leaf.sub_rows.is_none());
}

#[test]
fn test_nested_empty_lens() {
    assert!(make_nested(&[], &mut SeededSource::new(8)).is_empty());
    assert!(make_nested(&[0, 4], &mut SeededSource::new(8)).is_empty());
}

#[test]
fn test_person_values_in_range() {
    let rows = make_nested(&[30], &mut SeededSource::new(9));
    for person in &rows {
        for (field, max) in [("age", 40), ("visits", 1000), ("progress", 100)] {
            let Some(CellValue::Int(n)) = person.cells.get(field) else {
                panic!("{field} should be an integer");
            };
            assert!((0..=max).contains(n), "{field} = {n}");
        }
        let status = person.cells.get("status").unwrap().to_string();
        assert!(["relationship", "complicated", "single"].contains(&status.as_str()));
    }
}

#[test]
fn test_person_json_uses_camel_case_keys() {
    let rows = make_nested(&[1, 1], &mut SeededSource::new(10));
    let value = serde_json::to_value(&rows[0]).unwrap();
    for column in person_columns() {
        assert!(value.get(&column.accessor).is_some(), "{}", column.accessor);
    }
    assert!(value["subRows"].is_array());
}
