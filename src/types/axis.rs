use serde::{Deserialize, Serialize};

/// Which order a drag gesture currently affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    /// Drags reorder rows (vertical movement)
    #[default]
    Row,
    /// Drags reorder columns (horizontal movement)
    Column,
}

impl AxisMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

/// Currently moused-over cell, used only for visual highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverPosition {
    pub row: Option<usize>,
    pub column: Option<usize>,
}

impl HoverPosition {
    /// No cell hovered.
    pub const NONE: Self = Self {
        row: None,
        column: None,
    };

    pub const fn new(row: Option<usize>, column: Option<usize>) -> Self {
        Self { row, column }
    }

    pub const fn cell(row: usize, column: usize) -> Self {
        Self {
            row: Some(row),
            column: Some(column),
        }
    }

    pub fn is_none(&self) -> bool {
        self.row.is_none() && self.column.is_none()
    }
}
