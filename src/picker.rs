//! Dimension picker: hover a virtual grid to preview, click to choose.
//!
//! Highlighting is cumulative. Hovering cell `(r, c)` lights every cell in
//! rows `0..=r` and columns `0..=c`, and clicking it chooses `r + 1` rows and
//! `c + 1` columns.

use crate::types::Dimensions;

/// Transient picker state. Only the highlight extent changes over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionPicker {
    rows: usize,
    columns: usize,
    /// 1-based inclusive extent; `(0, 0)` means nothing highlighted
    hover_row: usize,
    hover_col: usize,
}

impl DimensionPicker {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            hover_row: 0,
            hover_col: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Current highlight extent as `(rows, columns)`.
    pub fn extent(&self) -> (usize, usize) {
        (self.hover_row, self.hover_col)
    }

    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Pointer entered cell `(row, col)`. Returns `true` if the extent changed.
    pub fn pointer_enter(&mut self, row: usize, col: usize) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let extent = (row + 1, col + 1);
        let changed = self.extent() != extent;
        (self.hover_row, self.hover_col) = extent;
        changed
    }

    /// Pointer left the whole picker. Returns `true` if the extent changed.
    pub fn pointer_leave(&mut self) -> bool {
        let changed = self.extent() != (0, 0);
        self.hover_row = 0;
        self.hover_col = 0;
        changed
    }

    /// Cell `(row, col)` was clicked.
    pub fn click(&self, row: usize, col: usize) -> Option<Dimensions> {
        self.contains(row, col).then(|| Dimensions::new(row + 1, col + 1))
    }

    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        row < self.hover_row && col < self.hover_col
    }

    /// Resize the picker grid, dropping any highlight.
    pub fn resize(&mut self, rows: usize, columns: usize) {
        self.rows = rows;
        self.columns = columns;
        self.hover_row = 0;
        self.hover_col = 0;
    }
}

impl Default for DimensionPicker {
    fn default() -> Self {
        Self::new(10, 10)
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

    #[test]
    fn test_hover_highlights_cumulative_extent() {
        let mut picker = DimensionPicker::new(10, 10);
        assert!(picker.pointer_enter(2, 3));
        assert_eq!(picker.extent(), (3, 4));
        assert!(picker.is_highlighted(0, 0));
        assert!(picker.is_highlighted(2, 3));
        assert!(picker.is_highlighted(1, 2));
        assert!(!picker.is_highlighted(3, 3));
        assert!(!picker.is_highlighted(2, 4));
    }

    #[test]
    fn test_repeated_enter_reports_no_change() {
        let mut picker = DimensionPicker::new(4, 4);
        assert!(picker.pointer_enter(1, 1));
        assert!(!picker.pointer_enter(1, 1));
    }

    #[test]
    fn test_leave_resets() {
        let mut picker = DimensionPicker::new(4, 4);
        picker.pointer_enter(3, 3);
        assert!(picker.pointer_leave());
        assert_eq!(picker.extent(), (0, 0));
        assert!(!picker.is_highlighted(0, 0));
        assert!(!picker.pointer_leave());
    }

    #[test]
    fn test_click_is_one_based() {
        let picker = DimensionPicker::new(10, 10);
        assert_eq!(picker.click(0, 0), Some(Dimensions::new(1, 1)));
        assert_eq!(picker.click(2, 3), Some(Dimensions::new(3, 4)));
        assert_eq!(picker.click(9, 9), Some(Dimensions::new(10, 10)));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut picker = DimensionPicker::new(3, 3);
        assert_eq!(picker.click(3, 0), None);
        assert!(!picker.pointer_enter(0, 3));
        assert_eq!(picker.extent(), (0, 0));
    }

    #[test]
    fn test_click_does_not_touch_highlight() {
        let mut picker = DimensionPicker::new(5, 5);
        picker.pointer_enter(1, 1);
        let _ = picker.click(4, 4);
        assert_eq!(picker.extent(), (2, 2));
    }
}
