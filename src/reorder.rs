//! Reordering core: row/column orders, axis mode and hover position.
//!
//! This is the single owner of ordering state. Renderers read it after every
//! mutating call; nothing else mutates it. All operations are total: requests
//! that reference stale or unknown ids are ignored rather than reported.

use tracing::{debug, trace};

use crate::order::Order;
use crate::types::{AxisMode, Column, HoverPosition, Row, StableId};

/// Ordering state for one generated grid.
#[derive(Debug, Clone, Default)]
pub struct ReorderCore {
    row_order: Order,
    column_order: Order,
    axis_mode: AxisMode,
    hover: HoverPosition,
}

impl ReorderCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Core already initialized from `columns` and `rows`.
    pub fn with_grid(columns: &[Column], rows: &[Row]) -> Self {
        let mut core = Self::new();
        core.initialize(columns, rows);
        core
    }

    /// Replace all state with the orders of a freshly generated grid.
    ///
    /// Ids from any previous grid are dropped; axis mode returns to
    /// [`AxisMode::Row`] and the hover position is cleared.
    pub fn initialize(&mut self, columns: &[Column], rows: &[Row]) {
        self.column_order = Order::from_ids(columns.iter().map(|c| c.id.clone()));
        self.row_order = Order::from_ids(rows.iter().map(|r| r.id.clone()));
        self.axis_mode = AxisMode::Row;
        self.hover = HoverPosition::NONE;
        debug!(
            rows = self.row_order.len(),
            columns = self.column_order.len(),
            "reorder core initialized"
        );
    }

    pub fn set_axis_mode(&mut self, mode: AxisMode) {
        if self.axis_mode != mode {
            trace!(axis = mode.as_str(), "axis mode changed");
        }
        self.axis_mode = mode;
    }

    pub fn set_hover_position(&mut self, row: Option<usize>, column: Option<usize>) {
        self.hover = HoverPosition::new(row, column);
    }

    pub fn clear_hover(&mut self) {
        self.hover = HoverPosition::NONE;
    }

    /// Move `dragged` to where `target` sits in the order selected by the
    /// current axis mode.
    ///
    /// Returns `true` when the order changed. Equal ids, or ids missing from
    /// the active order, leave every order untouched.
    pub fn reorder(&mut self, dragged: &StableId, target: &StableId) -> bool {
        let axis = self.axis_mode;
        let moved = self.order_mut(axis).move_to(dragged, target);
        if moved {
            debug!(
                axis = axis.as_str(),
                dragged = %dragged,
                target = %target,
                "reordered"
            );
        } else {
            trace!(
                axis = axis.as_str(),
                dragged = %dragged,
                target = %target,
                "reorder ignored"
            );
        }
        moved
    }

    pub fn row_order(&self) -> &Order {
        &self.row_order
    }

    pub fn column_order(&self) -> &Order {
        &self.column_order
    }

    pub fn axis_mode(&self) -> AxisMode {
        self.axis_mode
    }

    pub fn hover(&self) -> HoverPosition {
        self.hover
    }

    /// Order that a drag gesture currently affects.
    pub fn active_order(&self) -> &Order {
        self.order(self.axis_mode)
    }

    pub fn order(&self, axis: AxisMode) -> &Order {
        match axis {
            AxisMode::Row => &self.row_order,
            AxisMode::Column => &self.column_order,
        }
    }

    fn order_mut(&mut self, axis: AxisMode) -> &mut Order {
        match axis {
            AxisMode::Row => &mut self.row_order,
            AxisMode::Column => &mut self.column_order,
        }
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

    fn ids(order: &Order) -> Vec<&str> {
        order.iter().map(StableId::as_str).collect()
    }

    fn core() -> ReorderCore {
        let columns = vec![
            Column::new("c1", "k1"),
            Column::new("c2", "k2"),
            Column::new("c3", "k3"),
        ];
        let rows = vec![Row::new("r1"), Row::new("r2")];
        ReorderCore::with_grid(&columns, &rows)
    }

    #[test]
    fn test_initialize_sets_generator_order() {
        let core = core();
        assert_eq!(ids(core.column_order()), ["c1", "c2", "c3"]);
        assert_eq!(ids(core.row_order()), ["r1", "r2"]);
        assert_eq!(core.axis_mode(), AxisMode::Row);
        assert!(core.hover().is_none());
    }

    #[test]
    fn test_reorder_uses_active_axis() {
        let mut core = core();
        core.set_axis_mode(AxisMode::Column);
        assert!(core.reorder(&"c1".into(), &"c3".into()));
        assert_eq!(ids(core.column_order()), ["c2", "c3", "c1"]);
        assert_eq!(ids(core.row_order()), ["r1", "r2"]);
    }

    #[test]
    fn test_row_id_ignored_in_column_mode() {
        let mut core = core();
        core.set_axis_mode(AxisMode::Column);
        assert!(!core.reorder(&"r2".into(), &"r1".into()));
        assert_eq!(ids(core.row_order()), ["r1", "r2"]);
        assert_eq!(ids(core.column_order()), ["c1", "c2", "c3"]);
    }

    #[test]
    fn test_active_order_follows_axis() {
        let mut core = core();
        assert_eq!(core.active_order().len(), 2);
        core.set_axis_mode(AxisMode::Column);
        assert_eq!(core.active_order().len(), 3);
    }

    #[test]
    fn test_clear_hover() {
        let mut core = core();
        core.set_hover_position(Some(1), Some(2));
        assert_eq!(core.hover(), HoverPosition::cell(1, 2));
        core.clear_hover();
        assert_eq!(core.hover(), HoverPosition::NONE);
    }

    #[test]
    fn test_empty_core_ignores_everything() {
        let mut core = ReorderCore::new();
        assert!(!core.reorder(&"a".into(), &"b".into()));
        assert!(core.row_order().is_empty());
        assert!(core.column_order().is_empty());
    }
}
