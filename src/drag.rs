//! Drag session: turns presses, moves and releases into at most one
//! `(active, over)` drop per gesture.
//!
//! Pointer and touch presses only become drags after travelling
//! `activation_distance`; a release before that is a click. Keyboard pickups
//! are active immediately. Movement is locked to the axis the gesture started
//! on: vertical for rows, horizontal for columns.

use tracing::{debug, trace};

use crate::types::{AxisMode, StableId};

/// Input device driving a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    Pointer,
    Touch,
    Keyboard,
}

/// A completed drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active: StableId,
    pub over: StableId,
}

#[derive(Debug, Clone, PartialEq)]
struct Gesture {
    active: StableId,
    axis: AxisMode,
    sensor: Sensor,
    origin: (f32, f32),
    current: (f32, f32),
    over: Option<StableId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    /// Pressed but not yet moved past the activation distance
    Pending(Gesture),
    Dragging(Gesture),
}

/// One gesture at a time; a new press replaces any unfinished one.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    state: DragState,
    activation_distance: f32,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(4.0)
    }
}

impl DragSession {
    pub fn new(activation_distance: f32) -> Self {
        Self {
            state: DragState::Idle,
            activation_distance,
        }
    }

    pub fn set_activation_distance(&mut self, distance: f32) {
        self.activation_distance = distance;
    }

    /// Begin a gesture on the handle of `active`.
    pub fn start(&mut self, active: StableId, axis: AxisMode, at: (f32, f32), sensor: Sensor) {
        trace!(active = %active, axis = axis.as_str(), ?sensor, "drag start");
        let gesture = Gesture {
            over: Some(active.clone()),
            active,
            axis,
            sensor,
            origin: at,
            current: at,
        };
        self.state = if sensor == Sensor::Keyboard {
            DragState::Dragging(gesture)
        } else {
            DragState::Pending(gesture)
        };
    }

    /// Update the gesture position and the id currently under the dragged
    /// handle. Returns `true` when anything visible changed.
    pub fn move_to(&mut self, at: (f32, f32), over: Option<StableId>) -> bool {
        let moved = self.advance(at);
        moved | self.set_over(over)
    }

    /// Update the gesture position only. A pending press activates once it
    /// has travelled `activation_distance`.
    pub fn advance(&mut self, at: (f32, f32)) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Idle => false,
            DragState::Pending(mut gesture) => {
                let (dx, dy) = (at.0 - gesture.origin.0, at.1 - gesture.origin.1);
                let travelled = dx.hypot(dy);
                gesture.current = at;
                if travelled >= self.activation_distance {
                    debug!(active = %gesture.active, "drag activated");
                    self.state = DragState::Dragging(gesture);
                    true
                } else {
                    self.state = DragState::Pending(gesture);
                    false
                }
            }
            DragState::Dragging(mut gesture) => {
                let changed = gesture.current != at;
                gesture.current = at;
                self.state = DragState::Dragging(gesture);
                changed
            }
        }
    }

    /// Set the drop target of an active drag. Ignored before activation.
    pub fn set_over(&mut self, over: Option<StableId>) -> bool {
        match &mut self.state {
            DragState::Dragging(gesture) if gesture.over != over => {
                gesture.over = over;
                true
            }
            _ => false,
        }
    }

    /// Finish the gesture. Yields a drop only for an activated drag that is
    /// over some handle.
    pub fn end(&mut self) -> Option<DragEnd> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(gesture) => {
                let over = gesture.over?;
                debug!(active = %gesture.active, over = %over, "drag end");
                Some(DragEnd {
                    active: gesture.active,
                    over,
                })
            }
            DragState::Pending(_) | DragState::Idle => None,
        }
    }

    /// Abort the gesture without a drop. Returns `true` if one was running.
    pub fn cancel(&mut self) -> bool {
        let was_active = !matches!(self.state, DragState::Idle);
        if was_active {
            debug!("drag cancelled");
        }
        self.state = DragState::Idle;
        was_active
    }

    fn gesture(&self) -> Option<&Gesture> {
        match &self.state {
            DragState::Dragging(g) => Some(g),
            DragState::Idle | DragState::Pending(_) => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture().is_some()
    }

    pub fn is_pressed(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    pub fn active_id(&self) -> Option<&StableId> {
        self.gesture().map(|g| &g.active)
    }

    pub fn over_id(&self) -> Option<&StableId> {
        self.gesture().and_then(|g| g.over.as_ref())
    }

    pub fn axis(&self) -> Option<AxisMode> {
        self.gesture().map(|g| g.axis)
    }

    pub fn sensor(&self) -> Option<Sensor> {
        self.gesture().map(|g| g.sensor)
    }

    /// Offset of the dragged handle, restricted to the gesture's axis.
    pub fn delta(&self) -> (f32, f32) {
        let Some(g) = self.gesture() else {
            return (0.0, 0.0);
        };
        let (dx, dy) = (g.current.0 - g.origin.0, g.current.1 - g.origin.1);
        match g.axis {
            AxisMode::Row => (0.0, dy),
            AxisMode::Column => (dx, 0.0),
        }
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

    fn id(s: &str) -> StableId {
        StableId::from(s)
    }

    #[test]
    fn test_click_without_travel_is_not_a_drop() {
        let mut session = DragSession::new(4.0);
        session.start(id("a"), AxisMode::Row, (10.0, 10.0), Sensor::Pointer);
        assert!(!session.move_to((11.0, 11.0), Some(id("b"))));
        assert!(!session.is_dragging());
        assert_eq!(session.end(), None);
        assert!(!session.is_pressed());
    }

    #[test]
    fn test_drag_then_drop() {
        let mut session = DragSession::new(4.0);
        session.start(id("a"), AxisMode::Row, (10.0, 10.0), Sensor::Pointer);
        assert!(session.move_to((10.0, 40.0), Some(id("b"))));
        assert!(session.is_dragging());
        assert_eq!(session.over_id(), Some(&id("b")));
        let end = session.end().unwrap();
        assert_eq!(end, DragEnd { active: id("a"), over: id("b") });
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_drop_outside_any_handle() {
        let mut session = DragSession::new(0.0);
        session.start(id("a"), AxisMode::Column, (0.0, 0.0), Sensor::Touch);
        session.move_to((50.0, 0.0), None);
        assert_eq!(session.end(), None);
    }

    #[test]
    fn test_cancel_discards() {
        let mut session = DragSession::new(0.0);
        session.start(id("a"), AxisMode::Row, (0.0, 0.0), Sensor::Pointer);
        session.move_to((0.0, 30.0), Some(id("c")));
        assert!(session.cancel());
        assert_eq!(session.end(), None);
        assert!(!session.cancel());
    }

    #[test]
    fn test_keyboard_pickup_is_immediate() {
        let mut session = DragSession::new(100.0);
        session.start(id("a"), AxisMode::Row, (0.0, 0.0), Sensor::Keyboard);
        assert!(session.is_dragging());
        assert_eq!(session.over_id(), Some(&id("a")));
        assert_eq!(session.sensor(), Some(Sensor::Keyboard));
    }

    #[test]
    fn test_delta_locked_to_axis() {
        let mut session = DragSession::new(0.0);
        session.start(id("a"), AxisMode::Row, (5.0, 5.0), Sensor::Pointer);
        session.move_to((25.0, 45.0), None);
        assert_eq!(session.delta(), (0.0, 40.0));

        session.start(id("c"), AxisMode::Column, (5.0, 5.0), Sensor::Pointer);
        session.move_to((25.0, 45.0), None);
        assert_eq!(session.delta(), (20.0, 0.0));
    }

    #[test]
    fn test_over_ignored_while_pending() {
        let mut session = DragSession::new(10.0);
        session.start(id("a"), AxisMode::Row, (0.0, 0.0), Sensor::Pointer);
        assert!(!session.set_over(Some(id("b"))));
        assert!(session.advance((0.0, 12.0)));
        // Target still defaults to the dragged item itself
        assert_eq!(session.over_id(), Some(&id("a")));
        assert!(session.set_over(Some(id("b"))));
        assert!(!session.set_over(Some(id("b"))));
    }

    #[test]
    fn test_idle_delta_is_zero() {
        let session = DragSession::default();
        assert_eq!(session.delta(), (0.0, 0.0));
        assert!(session.axis().is_none());
    }
}
