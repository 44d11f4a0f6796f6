//! Display-list builders for the grid surface and the dimension picker.

use super::GridSurface;
use crate::config::GridConfig;
use crate::layout::{PickerLayout, Rect};
use crate::picker::DimensionPicker;
use crate::render::{PaintOp, TextAlign};
use crate::types::{AxisMode, StableId};

/// Ops for one line (handle plus its cells) of the grid.
#[derive(Default)]
struct Layer {
    ops: Vec<PaintOp>,
}

impl Layer {
    fn cell(&mut self, rect: Rect, bg: &str, text: &str, config: &GridConfig, alpha: f64) {
        self.ops.push(PaintOp::fill(rect, bg, alpha));
        self.ops.push(PaintOp::stroke(rect, &config.grid_line_color, alpha));
        if !text.is_empty() {
            self.ops.push(PaintOp::Text {
                rect,
                text: text.to_string(),
                color: config.text_color.clone(),
                font: config.font.clone(),
                align: TextAlign::Left,
                alpha,
            });
        }
    }

    fn handle(&mut self, rect: Rect, config: &GridConfig, alpha: f64) {
        self.ops.push(PaintOp::fill(rect, &config.handle_bg_color, alpha));
        self.ops.push(PaintOp::Text {
            rect,
            text: config.handle_glyph.clone(),
            color: config.text_color.clone(),
            font: config.font.clone(),
            align: TextAlign::Center,
            alpha,
        });
    }
}

pub(super) fn grid_display_list(surface: &GridSurface) -> Vec<PaintOp> {
    let config = surface.config();
    let layout = surface.layout();
    let core = surface.core();
    let model = surface.model();
    let drag = surface.drag();

    let (width, height) = layout.total_size();
    let mut ops = vec![PaintOp::Clear {
        width,
        height,
        color: config.cell_bg_color.clone(),
    }];

    // Lifted line: everything belonging to the dragged row or column
    let lifted: Option<(AxisMode, &StableId)> = drag.axis().zip(drag.active_id());
    let (dx, dy) = drag.delta();
    let mut base = Layer::default();
    let mut top = Layer::default();

    let is_lifted = |axis: AxisMode, id: &StableId| lifted == Some((axis, id));
    let place = |rect: Rect, lift: bool| {
        if lift {
            (rect.translate(dx, dy), config.dragging_opacity)
        } else {
            (rect, 1.0)
        }
    };

    let hover = core.hover();
    let header = model.header_groups(core.column_order());
    for group in &header {
        for h in &group.headers {
            let Some(rect) = layout.column_handle_rect(h.index) else {
                continue;
            };
            let lift = is_lifted(AxisMode::Column, &h.column.id);
            let (rect, alpha) = place(rect, lift);
            let layer = if lift { &mut top } else { &mut base };
            layer.handle(rect, config, alpha);
        }
    }

    for row_view in model.rows(core.row_order()) {
        let r = row_view.index;
        let row_lift = is_lifted(AxisMode::Row, row_view.id());

        if let Some(rect) = layout.row_handle_rect(r) {
            let (rect, alpha) = place(rect, row_lift);
            let layer = if row_lift { &mut top } else { &mut base };
            layer.handle(rect, config, alpha);
        }

        for (c, cell) in model
            .visible_cells(row_view.row, core.column_order())
            .into_iter()
            .enumerate()
        {
            let Some(rect) = layout.cell_rect(r, c) else {
                continue;
            };
            let lift = row_lift || is_lifted(AxisMode::Column, &cell.column.id);
            let (rect, alpha) = place(rect, lift);
            let hovered =
                config.hover_highlight && (hover.row == Some(r) || hover.column == Some(c));
            let bg = if hovered {
                &config.hover_bg_color
            } else {
                &config.cell_bg_color
            };
            let text = cell.value.map(ToString::to_string).unwrap_or_default();
            let layer = if lift { &mut top } else { &mut base };
            layer.cell(rect, bg, &text, config, alpha);
        }
    }

    ops.append(&mut base.ops);
    ops.append(&mut top.ops);

    if let Some((axis, index)) = surface.focus() {
        if let Some(rect) = layout.handle_rect(axis, index) {
            ops.push(PaintOp::stroke(rect, &config.text_color, 1.0));
        }
    }
    ops
}

/// Picker frame. Cells inside the hover extent use the highlight color.
pub fn picker_display_list(
    picker: &DimensionPicker,
    layout: &PickerLayout,
    config: &GridConfig,
) -> Vec<PaintOp> {
    let (width, height) = layout.total_size();
    let mut ops = Vec::with_capacity(1 + picker.rows() * picker.columns() * 2);
    ops.push(PaintOp::Clear {
        width,
        height,
        color: config.picker_bg_color.clone(),
    });
    for row in 0..picker.rows() {
        for col in 0..picker.columns() {
            let Some(rect) = layout.cell_rect(row, col) else {
                continue;
            };
            let color = if picker.is_highlighted(row, col) {
                &config.picker_highlight_color
            } else {
                &config.picker_bg_color
            };
            ops.push(PaintOp::fill(rect, color, 1.0));
            ops.push(PaintOp::stroke(rect, &config.picker_border_color, 1.0));
        }
    }
    ops
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
    use crate::drag::Sensor;
    use crate::types::{Column, GeneratedGrid, Row};

    fn surface() -> GridSurface {
        let columns = vec![Column::new("c0", "a0"), Column::new("c1", "a1")];
        let rows = vec![
            Row::new("r0").with_cell("a0", "x0").with_cell("a1", "y0"),
            Row::new("r1").with_cell("a0", "x1").with_cell("a1", "y1"),
        ];
        let mut surface = GridSurface::new(GridConfig::default());
        surface.load(GeneratedGrid { columns, rows });
        surface
    }

    fn texts(ops: &[PaintOp]) -> Vec<&str> {
        ops.iter()
            .filter_map(|op| match op {
                PaintOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .filter(|t| !t.starts_with('\u{1F7F0}'))
            .collect()
    }

    #[test]
    fn test_cells_follow_orders() {
        let mut s = surface();
        assert_eq!(texts(&s.display_list()), vec!["x0", "y0", "x1", "y1"]);

        s.on_axis_enter(AxisMode::Column);
        assert!(s.on_drag_end(&StableId::from("c1"), &StableId::from("c0")));
        assert_eq!(texts(&s.display_list()), vec!["y0", "x0", "y1", "x1"]);
    }

    #[test]
    fn test_hover_highlight_toggle() {
        let mut s = surface();
        s.on_cell_hover(0, 1);
        let hover_bg = s.config().hover_bg_color.clone();
        let count = |ops: &[PaintOp]| {
            ops.iter()
                .filter(|op| matches!(op, PaintOp::FillRect { color, .. } if *color == hover_bg))
                .count()
        };
        // Row 0 (2 cells) plus column 1 of row 1
        assert_eq!(count(&s.display_list()), 3);

        let config = GridConfig {
            hover_highlight: false,
            ..GridConfig::default()
        };
        s.set_config(config).unwrap();
        assert_eq!(count(&s.display_list()), 0);
        assert_eq!(s.core().hover().row, Some(0));
    }

    #[test]
    fn test_dragged_row_drawn_last_with_opacity() {
        let mut s = surface();
        let (x, y) = s.layout().row_handle_rect(0).unwrap().center();
        s.pointer_down(x, y, Sensor::Pointer);
        s.pointer_move(x + 30.0, y + 10.0);
        assert!(s.drag().is_dragging());

        let ops = s.display_list();
        let last = ops.iter().rev().find(|op| matches!(op, PaintOp::Text { .. })).unwrap();
        match last {
            PaintOp::Text { text, alpha, rect, .. } => {
                assert_eq!(text, "y0");
                assert_eq!(*alpha, 0.8);
                let origin = s.layout().cell_rect(0, 1).unwrap();
                // Horizontal travel is discarded in row mode
                assert_eq!(rect.x, origin.x);
                assert_eq!(rect.y, origin.y + 10.0);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_picker_highlight_is_cumulative() {
        let config = GridConfig::default();
        let layout = PickerLayout::new(&config);
        let mut picker = DimensionPicker::default();
        picker.pointer_enter(1, 2);
        let ops = picker_display_list(&picker, &layout, &config);
        let lit = ops
            .iter()
            .filter(|op| {
                matches!(op, PaintOp::FillRect { color, .. } if *color == config.picker_highlight_color)
            })
            .count();
        assert_eq!(lit, 6);
        assert!(matches!(ops[0], PaintOp::Clear { .. }));
    }
}
