//! Synthetic grid and record generation.

use std::collections::HashSet;

use tracing::debug;

use super::DataSource;
use crate::types::{CellValue, Column, GeneratedGrid, Row, StableId};

/// Length of the short ids used for columns and accessors.
const SHORT_ID_LEN: usize = 8;

const STATUSES: [&str; 3] = ["relationship", "complicated", "single"];

fn short_id(source: &mut dyn DataSource, taken: &mut HashSet<String>) -> String {
    loop {
        let uuid = source.uuid();
        let id = uuid.get(..SHORT_ID_LEN).unwrap_or(&uuid).to_string();
        if taken.insert(id.clone()) {
            return id;
        }
    }
}

/// Generate `rows × columns` of weekday values.
///
/// Every column gets its own short id and accessor; every row gets a full
/// UUID and one value per column, keyed by the column's accessor. Zero rows
/// or zero columns yield empty sequences.
pub fn generate_grid(rows: usize, columns: usize, source: &mut dyn DataSource) -> GeneratedGrid {
    debug!(rows, columns, "generating grid");

    let mut taken = HashSet::with_capacity(columns * 2);
    let columns: Vec<Column> = (0..columns)
        .map(|_| {
            let accessor = short_id(source, &mut taken);
            let id = short_id(source, &mut taken);
            Column::new(id, accessor)
        })
        .collect();

    let rows: Vec<Row> = (0..rows)
        .map(|_| {
            let mut row = Row::new(source.uuid());
            for column in &columns {
                row.cells
                    .insert(column.accessor.clone(), CellValue::Text(source.weekday()));
            }
            row
        })
        .collect();

    GeneratedGrid { columns, rows }
}

/// Columns matching the records built by [`make_nested`].
pub fn person_columns() -> Vec<Column> {
    [
        "userId",
        "firstName",
        "lastName",
        "age",
        "visits",
        "progress",
        "status",
    ]
    .into_iter()
    .map(|field| Column::new(StableId::from(field), field))
    .collect()
}

fn new_person(source: &mut dyn DataSource) -> Row {
    let status = source.pick(&STATUSES).unwrap_or("single");
    Row::new(source.uuid())
        .with_cell("userId", source.uuid())
        .with_cell("firstName", source.first_name())
        .with_cell("lastName", source.last_name())
        .with_cell("age", source.int(40))
        .with_cell("visits", source.int(1000))
        .with_cell("progress", source.int(100))
        .with_cell("status", status)
}

/// Build nested person records, `lens[0]` at the top level, `lens[1]` under
/// each of those, and so on.
///
/// A level only gets `sub_rows` when the next length is non-zero.
pub fn make_nested(lens: &[usize], source: &mut dyn DataSource) -> Vec<Row> {
    fn level(lens: &[usize], depth: usize, source: &mut dyn DataSource) -> Vec<Row> {
        let len = lens.get(depth).copied().unwrap_or(0);
        let has_children = lens.get(depth + 1).is_some_and(|&n| n > 0);
        (0..len)
            .map(|_| {
                let mut person = new_person(source);
                if has_children {
                    person.sub_rows = Some(level(lens, depth + 1, source));
                }
                person
            })
            .collect()
    }

    debug!(?lens, "generating nested records");
    level(lens, 0, source)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::data::SeededSource;

    /// Source that replays a fixed id list, for collision handling.
    struct Scripted {
        ids: Vec<&'static str>,
        next: usize,
    }

    impl DataSource for Scripted {
        fn uuid(&mut self) -> String {
            let id = self.ids[self.next % self.ids.len()];
            self.next += 1;
            id.to_string()
        }

        fn int(&mut self, _max: i64) -> i64 {
            0
        }

        fn index(&mut self, len: usize) -> Option<usize> {
            (len > 0).then_some(0)
        }
    }

    #[test]
    fn test_grid_shape() {
        let mut source = SeededSource::new(42);
        let grid = generate_grid(3, 4, &mut source);
        assert_eq!(grid.columns.len(), 4);
        assert_eq!(grid.rows.len(), 3);
        for row in &grid.rows {
            assert_eq!(row.cells.len(), 4);
            for column in &grid.columns {
                assert!(row.value(column).is_some());
            }
        }
    }

    #[test]
    fn test_column_ids_are_short() {
        let mut source = SeededSource::new(42);
        let grid = generate_grid(1, 5, &mut source);
        for column in &grid.columns {
            assert_eq!(column.id.as_str().len(), SHORT_ID_LEN);
            assert_eq!(column.accessor.len(), SHORT_ID_LEN);
        }
    }

    #[test]
    fn test_short_id_retries_on_collision() {
        let mut source = Scripted {
            ids: vec!["aaaaaaaa-1", "aaaaaaaa-2", "bbbbbbbb-1", "cccccccc-1"],
            next: 0,
        };
        let grid = generate_grid(0, 1, &mut source);
        assert_eq!(grid.columns[0].accessor, "aaaaaaaa");
        assert_eq!(grid.columns[0].id.as_str(), "bbbbbbbb");
    }

    #[test]
    fn test_nested_levels() {
        let mut source = SeededSource::new(5);
        let rows = make_nested(&[2, 3], &mut source);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            let subs = row.sub_rows.as_ref().unwrap();
            assert_eq!(subs.len(), 3);
            assert!(subs.iter().all(|s| s.sub_rows.is_none()));
        }
        assert_eq!(rows.iter().map(Row::depth_count).sum::<usize>(), 8);
    }

    #[test]
    fn test_nested_zero_child_level_has_no_sub_rows() {
        let mut source = SeededSource::new(5);
        let rows = make_nested(&[2, 0], &mut source);
        assert!(rows.iter().all(|r| r.sub_rows.is_none()));
    }

    #[test]
    fn test_person_record_fields() {
        let mut source = SeededSource::new(9);
        let rows = make_nested(&[1], &mut source);
        let person = &rows[0];
        for column in person_columns() {
            assert!(person.value(&column).is_some(), "missing {}", column.accessor);
        }
        let Some(CellValue::Int(age)) = person.cells.get("age") else {
            panic!("age should be an integer");
        };
        assert!((0..=40).contains(age));
        let user_id = person.cells.get("userId").unwrap().to_string();
        assert_ne!(user_id, person.id.as_str());
    }
}
