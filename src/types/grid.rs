use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::StableId;

/// A single cell value produced by the data generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Int(i64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// Column definition. The column set is fixed for the lifetime of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Field of a row's cell mapping this column reads
    #[serde(rename = "accessorKey")]
    pub accessor: String,
    pub id: StableId,
}

impl Column {
    pub fn new(id: impl Into<StableId>, accessor: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            id: id.into(),
        }
    }
}

/// A data row. Cell content never changes after generation; only the
/// row's position in the row order does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Row key, distinct from any display id stored among the cells
    #[serde(rename = "uuid")]
    pub id: StableId,
    /// Cell values keyed by column accessor
    #[serde(flatten)]
    pub cells: BTreeMap<String, CellValue>,
    #[serde(rename = "subRows", skip_serializing_if = "Option::is_none", default)]
    pub sub_rows: Option<Vec<Row>>,
}

impl Row {
    pub fn new(id: impl Into<StableId>) -> Self {
        Self {
            id: id.into(),
            cells: BTreeMap::new(),
            sub_rows: None,
        }
    }

    /// Builder-style cell insert.
    #[must_use]
    pub fn with_cell(mut self, accessor: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(accessor.into(), value.into());
        self
    }

    /// Value of the cell read by `column`, if the row has one.
    pub fn value(&self, column: &Column) -> Option<&CellValue> {
        self.cells.get(&column.accessor)
    }

    /// Total number of rows in this subtree, including `self`.
    pub fn depth_count(&self) -> usize {
        1 + self
            .sub_rows
            .as_ref()
            .map(|rows| rows.iter().map(Row::depth_count).sum())
            .unwrap_or(0)
    }
}

/// Output of one data generation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedGrid {
    pub columns: Vec<Column>,
    #[serde(rename = "data")]
    pub rows: Vec<Row>,
}

impl GeneratedGrid {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}

/// Row/column counts chosen in the dimension picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }
}
