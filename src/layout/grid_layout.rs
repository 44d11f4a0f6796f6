//! Pre-computed geometry for the reorderable grid.
//!
//! Screen layout, in logical pixels:
//!
//! ```text
//!             gap
//!  +--------+-+-------------+-------------+
//!  |        | | col handle  | col handle  |  handle_size high
//!  +--------+-+-------------+-------------+
//!  |  gap                                  |
//!  +--------+-+-------------+-------------+
//!  | row    | |  cell       |  cell       |
//!  | handle | |             |             |
//!  +--------+-+-------------+-------------+
//! ```
//!
//! Row and column positions are cumulative so hit testing is a binary search.

use crate::config::GridConfig;
use crate::types::AxisMode;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[must_use]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

/// What lies under a point of the grid surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    None,
    /// Drag handle of the row at this display index
    RowHandle(usize),
    /// Drag handle of the column at this display index
    ColumnHandle(usize),
    /// Data cell at `(row, column)` display indices
    Cell(usize, usize),
}

/// Geometry of a grid with a given number of rows and columns.
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Cumulative column positions relative to the cell origin (`len = cols + 1`)
    pub col_positions: Vec<f32>,
    /// Cumulative row positions relative to the cell origin (`len = rows + 1`)
    pub row_positions: Vec<f32>,
    pub handle_size: f32,
    pub handle_gap: f32,
}

fn cumulative(count: usize, size: f32) -> Vec<f32> {
    let mut positions = Vec::with_capacity(count + 1);
    let mut at = 0.0_f32;
    positions.push(at);
    for _ in 0..count {
        at += size;
        positions.push(at);
    }
    positions
}

/// Index of the band containing `v`, or `None` outside `[first, last)`.
fn band_at(positions: &[f32], v: f32) -> Option<usize> {
    let last = positions.last().copied()?;
    if v < 0.0 || v >= last {
        return None;
    }
    match positions.binary_search_by(|pos| pos.partial_cmp(&v).unwrap_or(std::cmp::Ordering::Equal))
    {
        Ok(i) => Some(i),
        Err(i) => Some(i.saturating_sub(1)),
    }
}

impl GridLayout {
    pub fn new(rows: usize, columns: usize, config: &GridConfig) -> Self {
        Self {
            col_positions: cumulative(columns, config.cell_width),
            row_positions: cumulative(rows, config.cell_height),
            handle_size: config.handle_size,
            handle_gap: config.handle_gap,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_positions.len().saturating_sub(1)
    }

    pub fn column_count(&self) -> usize {
        self.col_positions.len().saturating_sub(1)
    }

    /// Top-left corner of cell `(0, 0)`.
    pub fn cell_origin(&self) -> (f32, f32) {
        let offset = self.handle_size + self.handle_gap;
        (offset, offset)
    }

    pub fn cells_width(&self) -> f32 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    pub fn cells_height(&self) -> f32 {
        self.row_positions.last().copied().unwrap_or(0.0)
    }

    /// Full surface size including handle strips.
    pub fn total_size(&self) -> (f32, f32) {
        let (ox, oy) = self.cell_origin();
        (ox + self.cells_width(), oy + self.cells_height())
    }

    /// Row band at surface `y`, ignoring x.
    pub fn row_at_y(&self, y: f32) -> Option<usize> {
        band_at(&self.row_positions, y - self.cell_origin().1)
    }

    /// Column band at surface `x`, ignoring y.
    pub fn col_at_x(&self, x: f32) -> Option<usize> {
        band_at(&self.col_positions, x - self.cell_origin().0)
    }

    fn row_band(&self, row: usize) -> Option<(f32, f32)> {
        let top = self.row_positions.get(row).copied()?;
        let bottom = self.row_positions.get(row + 1).copied()?;
        Some((top + self.cell_origin().1, bottom - top))
    }

    fn col_band(&self, col: usize) -> Option<(f32, f32)> {
        let left = self.col_positions.get(col).copied()?;
        let right = self.col_positions.get(col + 1).copied()?;
        Some((left + self.cell_origin().0, right - left))
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Option<Rect> {
        let (y, h) = self.row_band(row)?;
        let (x, w) = self.col_band(col)?;
        Some(Rect::new(x, y, w, h))
    }

    pub fn row_handle_rect(&self, row: usize) -> Option<Rect> {
        let (y, h) = self.row_band(row)?;
        Some(Rect::new(0.0, y, self.handle_size, h))
    }

    pub fn column_handle_rect(&self, col: usize) -> Option<Rect> {
        let (x, w) = self.col_band(col)?;
        Some(Rect::new(x, 0.0, w, self.handle_size))
    }

    pub fn handle_rect(&self, axis: AxisMode, index: usize) -> Option<Rect> {
        match axis {
            AxisMode::Row => self.row_handle_rect(index),
            AxisMode::Column => self.column_handle_rect(index),
        }
    }

    pub fn handle_center(&self, axis: AxisMode, index: usize) -> Option<(f32, f32)> {
        self.handle_rect(axis, index).map(|r| r.center())
    }

    /// Determine what is at surface point `(x, y)`.
    pub fn hit_test(&self, x: f32, y: f32) -> HitTarget {
        let (ox, oy) = self.cell_origin();
        if x >= 0.0 && x < self.handle_size {
            if let Some(row) = self.row_at_y(y) {
                return HitTarget::RowHandle(row);
            }
        }
        if y >= 0.0 && y < self.handle_size {
            if let Some(col) = self.col_at_x(x) {
                return HitTarget::ColumnHandle(col);
            }
        }
        if x >= ox && y >= oy {
            if let (Some(row), Some(col)) = (self.row_at_y(y), self.col_at_x(x)) {
                return HitTarget::Cell(row, col);
            }
        }
        HitTarget::None
    }

    /// Handle of `axis` whose center is nearest to `(x, y)`.
    pub fn closest_handle(&self, axis: AxisMode, x: f32, y: f32) -> Option<usize> {
        let count = match axis {
            AxisMode::Row => self.row_count(),
            AxisMode::Column => self.column_count(),
        };
        (0..count)
            .filter_map(|i| {
                let (cx, cy) = self.handle_center(axis, i)?;
                let dist = (cx - x).powi(2) + (cy - y).powi(2);
                Some((i, dist))
            })
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        let config = GridConfig {
            cell_width: 100.0,
            cell_height: 20.0,
            handle_size: 26.0,
            handle_gap: 4.0,
            ..GridConfig::default()
        };
        GridLayout::new(3, 2, &config)
    }

    #[test]
    fn test_positions() {
        let layout = layout();
        assert_eq!(layout.col_positions, vec![0.0, 100.0, 200.0]);
        assert_eq!(layout.row_positions, vec![0.0, 20.0, 40.0, 60.0]);
        assert_eq!(layout.cell_origin(), (30.0, 30.0));
        assert_eq!(layout.total_size(), (230.0, 90.0));
    }

    #[test]
    fn test_hit_test_regions() {
        let layout = layout();
        assert_eq!(layout.hit_test(10.0, 35.0), HitTarget::RowHandle(0));
        assert_eq!(layout.hit_test(10.0, 85.0), HitTarget::RowHandle(2));
        assert_eq!(layout.hit_test(135.0, 10.0), HitTarget::ColumnHandle(1));
        assert_eq!(layout.hit_test(31.0, 31.0), HitTarget::Cell(0, 0));
        assert_eq!(layout.hit_test(229.0, 89.0), HitTarget::Cell(2, 1));
    }

    #[test]
    fn test_hit_test_misses() {
        let layout = layout();
        // corner, gaps and outside
        assert_eq!(layout.hit_test(5.0, 5.0), HitTarget::None);
        assert_eq!(layout.hit_test(28.0, 50.0), HitTarget::None);
        assert_eq!(layout.hit_test(231.0, 50.0), HitTarget::None);
        assert_eq!(layout.hit_test(10.0, 95.0), HitTarget::None);
        assert_eq!(layout.hit_test(-1.0, 35.0), HitTarget::None);
    }

    #[test]
    fn test_handle_rects_align_with_cells() {
        let layout = layout();
        let cell = layout.cell_rect(1, 1).unwrap();
        let row_handle = layout.row_handle_rect(1).unwrap();
        let col_handle = layout.column_handle_rect(1).unwrap();
        assert_eq!(row_handle.y, cell.y);
        assert_eq!(row_handle.h, cell.h);
        assert_eq!(col_handle.x, cell.x);
        assert_eq!(col_handle.w, cell.w);
        assert!(layout.cell_rect(3, 0).is_none());
    }

    #[test]
    fn test_closest_handle() {
        let layout = layout();
        assert_eq!(layout.closest_handle(AxisMode::Row, 13.0, 30.0), Some(0));
        assert_eq!(layout.closest_handle(AxisMode::Row, 13.0, 62.0), Some(1));
        assert_eq!(layout.closest_handle(AxisMode::Row, 13.0, 500.0), Some(2));
        assert_eq!(layout.closest_handle(AxisMode::Column, 170.0, 13.0), Some(1));
    }

    #[test]
    fn test_empty_layout() {
        let layout = GridLayout::new(0, 0, &GridConfig::default());
        assert_eq!(layout.hit_test(40.0, 40.0), HitTarget::None);
        assert_eq!(layout.closest_handle(AxisMode::Row, 0.0, 0.0), None);
        assert_eq!(layout.row_count(), 0);
    }
}
