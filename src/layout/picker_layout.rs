//! Geometry of the dimension picker: uniform square cells with a margin.

use super::Rect;
use crate::config::GridConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerLayout {
    pub rows: usize,
    pub columns: usize,
    pub cell_size: f32,
    pub margin: f32,
}

impl PickerLayout {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            rows: config.picker_rows,
            columns: config.picker_columns,
            cell_size: config.picker_cell_size,
            margin: config.picker_cell_margin,
        }
    }

    /// Distance between the top-left corners of neighbouring cells.
    pub fn pitch(&self) -> f32 {
        self.cell_size + 2.0 * self.margin
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn total_size(&self) -> (f32, f32) {
        (
            self.columns as f32 * self.pitch(),
            self.rows as f32 * self.pitch(),
        )
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn cell_rect(&self, row: usize, col: usize) -> Option<Rect> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        let pitch = self.pitch();
        Some(Rect::new(
            col as f32 * pitch + self.margin,
            row as f32 * pitch + self.margin,
            self.cell_size,
            self.cell_size,
        ))
    }

    /// Cell whose pitch square contains `(x, y)`; margins belong to the cell.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (w, h) = self.total_size();
        if !(0.0..w).contains(&x) || !(0.0..h).contains(&y) {
            return None;
        }
        let pitch = self.pitch();
        let col = (x / pitch).floor() as usize;
        let row = (y / pitch).floor() as usize;
        (row < self.rows && col < self.columns).then_some((row, col))
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

    fn layout() -> PickerLayout {
        PickerLayout {
            rows: 10,
            columns: 10,
            cell_size: 25.0,
            margin: 1.0,
        }
    }

    #[test]
    fn test_cell_at() {
        let layout = layout();
        assert_eq!(layout.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(layout.cell_at(27.5, 2.0), Some((0, 1)));
        assert_eq!(layout.cell_at(269.0, 269.0), Some((9, 9)));
        assert_eq!(layout.cell_at(270.0, 5.0), None);
        assert_eq!(layout.cell_at(-0.5, 5.0), None);
    }

    #[test]
    fn test_cell_rect_inside_pitch() {
        let layout = layout();
        let rect = layout.cell_rect(2, 3).unwrap();
        assert_eq!(rect, Rect::new(82.0, 55.0, 25.0, 25.0));
        assert_eq!(layout.cell_at(rect.x + 1.0, rect.y + 1.0), Some((2, 3)));
        assert!(layout.cell_rect(10, 0).is_none());
    }
}
