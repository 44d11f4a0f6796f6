//! Table model: header groups, visible rows and visible cells by stable id.
//!
//! The model owns the generated entities but not their order. Every query
//! takes the current [`Order`] from the reordering core, so what the model
//! reports is always a direct projection of that order.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::Result;
use crate::order::Order;
use crate::types::{CellValue, Column, GeneratedGrid, Row, StableId};

/// One header cell.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    /// Display position, left to right
    pub index: usize,
    pub column: &'a Column,
}

/// A row of headers. Flat column sets produce exactly one group.
#[derive(Debug, Clone)]
pub struct HeaderGroup<'a> {
    pub id: usize,
    pub headers: Vec<Header<'a>>,
}

/// A row as it is displayed.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    /// Display position, top to bottom
    pub index: usize,
    pub row: &'a Row,
}

impl<'a> RowView<'a> {
    pub fn id(&self) -> &'a StableId {
        &self.row.id
    }
}

/// A cell as it is displayed.
#[derive(Debug, Clone, Copy)]
pub struct CellView<'a> {
    pub column: &'a Column,
    pub value: Option<&'a CellValue>,
}

/// Queryable wrapper around one generated grid.
#[derive(Debug, Clone, Default)]
pub struct TableModel {
    columns: Vec<Column>,
    rows: Vec<Row>,
    column_index: HashMap<StableId, usize>,
    row_index: HashMap<StableId, usize>,
}

#[derive(Serialize)]
struct Preview<'a> {
    columns: Vec<&'a Column>,
    data: Vec<&'a Row>,
}

impl TableModel {
    pub fn new(grid: GeneratedGrid) -> Self {
        let GeneratedGrid { columns, rows } = grid;
        let column_index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        let row_index = rows
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Self {
            columns,
            rows,
            column_index,
            row_index,
        }
    }

    /// Columns in generator order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column(&self, id: &StableId) -> Option<&Column> {
        self.column_index
            .get(id)
            .and_then(|&i| self.columns.get(i))
    }

    pub fn row(&self, id: &StableId) -> Option<&Row> {
        self.row_index.get(id).and_then(|&i| self.rows.get(i))
    }

    /// Header groups with headers in `column_order`.
    pub fn header_groups(&self, column_order: &Order) -> Vec<HeaderGroup<'_>> {
        let headers = column_order
            .iter()
            .filter_map(|id| self.column(id))
            .enumerate()
            .map(|(index, column)| Header { index, column })
            .collect();
        vec![HeaderGroup { id: 0, headers }]
    }

    /// Rows in `row_order`. Ids unknown to the model are skipped.
    pub fn rows(&self, row_order: &Order) -> Vec<RowView<'_>> {
        row_order
            .iter()
            .filter_map(|id| self.row(id))
            .enumerate()
            .map(|(index, row)| RowView { index, row })
            .collect()
    }

    /// Cells of `row` in `column_order`.
    pub fn visible_cells<'a>(&'a self, row: &'a Row, column_order: &Order) -> Vec<CellView<'a>> {
        column_order
            .iter()
            .filter_map(|id| self.column(id))
            .map(|column| CellView {
                column,
                value: row.value(column),
            })
            .collect()
    }

    /// JSON dump of columns and rows in their current display order.
    pub fn preview_json(&self, row_order: &Order, column_order: &Order) -> Result<String> {
        let preview = Preview {
            columns: column_order
                .iter()
                .filter_map(|id| self.column(id))
                .collect(),
            data: row_order.iter().filter_map(|id| self.row(id)).collect(),
        };
        Ok(serde_json::to_string_pretty(&preview)?)
    }
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

    fn model() -> TableModel {
        let columns = vec![Column::new("c1", "a"), Column::new("c2", "b")];
        let rows = vec![
            Row::new("r1").with_cell("a", "Monday").with_cell("b", "Tuesday"),
            Row::new("r2").with_cell("a", "Friday").with_cell("b", "Sunday"),
        ];
        TableModel::new(GeneratedGrid { columns, rows })
    }

    fn order(ids: &[&str]) -> Order {
        Order::from_ids(ids.iter().map(|&s| StableId::from(s)))
    }

    #[test]
    fn test_rows_follow_order() {
        let model = model();
        let rows = model.rows(&order(&["r2", "r1"]));
        let ids: Vec<&str> = rows.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["r2", "r1"]);
        assert_eq!(rows[1].index, 1);
    }

    #[test]
    fn test_visible_cells_follow_column_order() {
        let model = model();
        let row = model.row(&"r1".into()).unwrap();
        let cells = model.visible_cells(row, &order(&["c2", "c1"]));
        let values: Vec<String> = cells
            .iter()
            .map(|c| c.value.unwrap().to_string())
            .collect();
        assert_eq!(values, ["Tuesday", "Monday"]);
    }

    #[test]
    fn test_header_groups_single_flat_group() {
        let model = model();
        let groups = model.header_groups(&order(&["c2", "c1"]));
        assert_eq!(groups.len(), 1);
        let ids: Vec<&str> = groups[0]
            .headers
            .iter()
            .map(|h| h.column.id.as_str())
            .collect();
        assert_eq!(ids, ["c2", "c1"]);
    }

    #[test]
    fn test_unknown_ids_skipped() {
        let model = model();
        assert_eq!(model.rows(&order(&["r1", "stale"])).len(), 1);
        assert!(model.column(&"stale".into()).is_none());
    }

    #[test]
    fn test_preview_json_shape() {
        let model = model();
        let json = model
            .preview_json(&order(&["r2", "r1"]), &order(&["c1", "c2"]))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["columns"][0]["id"], "c1");
        assert_eq!(value["columns"][0]["accessorKey"], "a");
        assert_eq!(value["data"][0]["uuid"], "r2");
        assert_eq!(value["data"][0]["a"], "Friday");
        assert!(value["data"][0].get("subRows").is_none());
    }
}
