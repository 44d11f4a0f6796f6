//! Interactive surface: the reorderable grid as the user sees and touches it.
//!
//! `GridSurface` owns the reordering core, the table model, the layout and
//! the drag session, and is handed around by reference. Raw input (pointer,
//! touch, keys) goes in; core calls come out:
//!
//! - drop of `(active, over)`      → [`ReorderCore::reorder`]
//! - entering a row handle         → axis mode `Row`
//! - entering a column handle      → axis mode `Column`
//! - entering cell `(r, c)`        → hover position `(r, c)`
//! - leaving the grid              → hover cleared
//!
//! Every input method returns whether a re-render is needed.

mod paint;

pub use paint::picker_display_list;

use tracing::{debug, warn};

use crate::config::GridConfig;
use crate::drag::{DragSession, Sensor};
use crate::error::Result;
use crate::layout::{GridLayout, HitTarget};
use crate::reorder::ReorderCore;
use crate::render::PaintOp;
use crate::table::TableModel;
use crate::types::{AxisMode, GeneratedGrid, StableId};

/// Keyboard keys the surface understands, normalized from DOM key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Space or Enter
    Activate,
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            " " | "Spacebar" | "Enter" => Some(Self::Activate),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GridSurface {
    config: GridConfig,
    core: ReorderCore,
    model: TableModel,
    layout: GridLayout,
    drag: DragSession,
    /// Region under the pointer at the last move, to detect enter transitions
    last_hit: Option<HitTarget>,
    /// Handle with keyboard focus, as `(axis, display index)`
    focus: Option<(AxisMode, usize)>,
}

impl Default for GridSurface {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridSurface {
    pub fn new(config: GridConfig) -> Self {
        let layout = GridLayout::new(0, 0, &config);
        let drag = DragSession::new(config.activation_distance);
        Self {
            config,
            core: ReorderCore::new(),
            model: TableModel::default(),
            layout,
            drag,
            last_hit: None,
            focus: None,
        }
    }

    /// Replace the grid. All ordering, hover and drag state starts over.
    pub fn load(&mut self, grid: GeneratedGrid) {
        self.core.initialize(&grid.columns, &grid.rows);
        self.layout = GridLayout::new(grid.rows.len(), grid.columns.len(), &self.config);
        self.model = TableModel::new(grid);
        self.drag.cancel();
        self.last_hit = None;
        self.focus = None;
    }

    /// Swap the config; geometry is recomputed, orders are kept.
    pub fn set_config(&mut self, config: GridConfig) -> Result<()> {
        config.validate()?;
        self.layout = GridLayout::new(self.model.row_count(), self.model.column_count(), &config);
        self.drag.set_activation_distance(config.activation_distance);
        self.drag.cancel();
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn core(&self) -> &ReorderCore {
        &self.core
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn focus(&self) -> Option<(AxisMode, usize)> {
        self.focus
    }

    // ---- Core event contract ----

    /// A gesture dropped `active` over `over`.
    pub fn on_drag_end(&mut self, active: &StableId, over: &StableId) -> bool {
        self.core.reorder(active, over)
    }

    pub fn on_axis_enter(&mut self, axis: AxisMode) -> bool {
        let changed = self.core.axis_mode() != axis;
        self.core.set_axis_mode(axis);
        changed
    }

    pub fn on_cell_hover(&mut self, row: usize, column: usize) -> bool {
        let before = self.core.hover();
        self.core.set_hover_position(Some(row), Some(column));
        before != self.core.hover()
    }

    pub fn on_hover_clear(&mut self) -> bool {
        let changed = !self.core.hover().is_none();
        self.core.clear_hover();
        changed
    }

    // ---- Raw input ----

    /// Stable id of the handle at `index` on `axis`, in display order.
    fn id_at(&self, axis: AxisMode, index: usize) -> Option<StableId> {
        self.core.order(axis).get(index).cloned()
    }

    /// Forward an enter transition. Handles entered while a handle is held
    /// (pending or dragging) do not switch the axis.
    fn enter(&mut self, hit: HitTarget) -> bool {
        let pressed = self.drag.is_pressed();
        match hit {
            HitTarget::RowHandle(_) if !pressed => self.on_axis_enter(AxisMode::Row),
            HitTarget::ColumnHandle(_) if !pressed => self.on_axis_enter(AxisMode::Column),
            HitTarget::RowHandle(_) | HitTarget::ColumnHandle(_) => false,
            HitTarget::Cell(row, col) => self.on_cell_hover(row, col),
            HitTarget::None => false,
        }
    }

    /// Id under the dragged handle once it is shifted by the current delta.
    fn drop_target(&self, axis: AxisMode) -> Option<StableId> {
        let active = self.drag.active_id()?;
        let index = self.core.order(axis).position(active)?;
        let (cx, cy) = self.layout.handle_center(axis, index)?;
        let (dx, dy) = self.drag.delta();
        let over = self.layout.closest_handle(axis, cx + dx, cy + dy)?;
        self.id_at(axis, over)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let hit = self.layout.hit_test(x, y);
        let mut changed = false;
        if self.last_hit != Some(hit) {
            self.last_hit = Some(hit);
            changed |= self.enter(hit);
        }

        if self.drag.is_pressed() {
            changed |= self.drag.advance((x, y));
            if let Some(axis) = self.drag.axis() {
                let over = self.drop_target(axis);
                changed |= self.drag.set_over(over);
            }
        }
        changed
    }

    /// Press at `(x, y)`. Only handles start a gesture.
    pub fn pointer_down(&mut self, x: f32, y: f32, sensor: Sensor) -> bool {
        let hit = self.layout.hit_test(x, y);
        let mut changed = false;
        if self.last_hit != Some(hit) {
            self.last_hit = Some(hit);
            changed |= self.enter(hit);
        }
        let (axis, index) = match hit {
            HitTarget::RowHandle(i) => (AxisMode::Row, i),
            HitTarget::ColumnHandle(i) => (AxisMode::Column, i),
            HitTarget::Cell(..) | HitTarget::None => return changed,
        };
        let Some(id) = self.id_at(axis, index) else {
            return changed;
        };
        // The gesture and the core must agree on the axis even without a
        // preceding move onto the handle
        self.on_axis_enter(axis);
        self.focus = Some((axis, index));
        self.drag.start(id, axis, (x, y), sensor);
        true
    }

    /// Release. A completed drag is applied as a reorder.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        let was_dragging = self.drag.is_dragging();
        if was_dragging {
            self.pointer_move(x, y);
        }
        let Some(end) = self.drag.end() else {
            return was_dragging;
        };
        let moved = self.on_drag_end(&end.active, &end.over);
        if moved {
            self.refocus(&end.active);
        }
        true
    }

    /// Finger lifted. Unlike a mouse, no pointer remains over the grid.
    pub fn touch_end(&mut self, x: f32, y: f32) -> bool {
        let released = self.pointer_up(x, y);
        released | self.pointer_leave()
    }

    /// Pointer left the grid. The gesture (if any) keeps running until
    /// release or cancel.
    pub fn pointer_leave(&mut self) -> bool {
        self.last_hit = None;
        self.on_hover_clear()
    }

    pub fn cancel_drag(&mut self) -> bool {
        self.drag.cancel()
    }

    /// Give keyboard focus to a handle.
    pub fn focus_handle(&mut self, axis: AxisMode, index: usize) -> bool {
        if index >= self.core.order(axis).len() {
            return false;
        }
        let changed = self.focus != Some((axis, index));
        self.focus = Some((axis, index));
        changed | self.on_axis_enter(axis)
    }

    fn refocus(&mut self, id: &StableId) {
        if let Some((axis, _)) = self.focus {
            if let Some(index) = self.core.order(axis).position(id) {
                self.focus = Some((axis, index));
            }
        }
    }

    /// Keyboard input. Returns `true` when the key was consumed.
    pub fn key_down(&mut self, key: Key) -> bool {
        let keyboard_drag = self.drag.sensor() == Some(Sensor::Keyboard);
        match key {
            Key::Escape => self.drag.cancel(),
            Key::Activate if keyboard_drag => {
                let Some(end) = self.drag.end() else {
                    return true;
                };
                if self.on_drag_end(&end.active, &end.over) {
                    self.refocus(&end.active);
                }
                true
            }
            Key::Activate => {
                let Some((axis, index)) = self.focus else {
                    return false;
                };
                let Some(id) = self.id_at(axis, index) else {
                    return false;
                };
                let Some(center) = self.layout.handle_center(axis, index) else {
                    return false;
                };
                self.on_axis_enter(axis);
                self.drag.start(id, axis, center, Sensor::Keyboard);
                true
            }
            Key::Up | Key::Down | Key::Left | Key::Right => self.step(key, keyboard_drag),
        }
    }

    /// Arrow handling: move the drop target while dragging, otherwise move
    /// focus between handles of the same axis.
    fn step(&mut self, key: Key, keyboard_drag: bool) -> bool {
        let axis = if keyboard_drag {
            self.drag.axis()
        } else {
            self.focus.map(|(axis, _)| axis)
        };
        let Some(axis) = axis else {
            return false;
        };
        let forward = match (axis, key) {
            (AxisMode::Row, Key::Down) | (AxisMode::Column, Key::Right) => true,
            (AxisMode::Row, Key::Up) | (AxisMode::Column, Key::Left) => false,
            // Arrows across the axis are ignored
            _ => return false,
        };
        let len = self.core.order(axis).len();

        if keyboard_drag {
            let Some(current) = self.drag.over_id().and_then(|id| self.core.order(axis).position(id))
            else {
                return false;
            };
            let next = if forward {
                (current + 1).min(len.saturating_sub(1))
            } else {
                current.saturating_sub(1)
            };
            let over = self.id_at(axis, next);
            let Some(center) = self.layout.handle_center(axis, next) else {
                return false;
            };
            self.drag.move_to(center, over);
            return true;
        }

        let Some((_, index)) = self.focus else {
            return false;
        };
        let next = if forward {
            (index + 1).min(len.saturating_sub(1))
        } else {
            index.saturating_sub(1)
        };
        self.focus = Some((axis, next));
        true
    }

    // ---- Output ----

    /// CSS cursor for the current pointer position.
    pub fn cursor(&self) -> &'static str {
        if self.drag.is_dragging() {
            return "grabbing";
        }
        match self.last_hit {
            Some(HitTarget::RowHandle(_) | HitTarget::ColumnHandle(_)) => "grab",
            _ => "default",
        }
    }

    /// Frame description for the current state.
    pub fn display_list(&self) -> Vec<PaintOp> {
        paint::grid_display_list(self)
    }

    /// Pretty JSON of columns and rows in display order.
    pub fn preview_json(&self) -> Result<String> {
        let json = self
            .model
            .preview_json(self.core.row_order(), self.core.column_order());
        if let Err(err) = &json {
            warn!(%err, "preview export failed");
        } else {
            debug!("preview exported");
        }
        json
    }
}
