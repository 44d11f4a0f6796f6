//! Listener wiring and pointer, touch and keyboard handlers for `GridView`.
//!
//! All methods here are `pub(crate)` helpers called from the constructor in
//! `mod.rs`. Each handler mutates the shared state, drops the borrow, and
//! only then calls back into JavaScript.

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use tracing::warn;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

#[cfg(target_arch = "wasm32")]
use super::{GridView, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::drag::Sensor;
#[cfg(target_arch = "wasm32")]
use crate::surface::Key;

/// Event position relative to the element's top-left corner.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_truncation)]
fn local_point(element: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f32, f32) {
    let rect = element.get_bounding_client_rect();
    (
        client_x as f32 - rect.left() as f32,
        client_y as f32 - rect.top() as f32,
    )
}

/// Position of the first touch in `changed_touches`.
#[cfg(target_arch = "wasm32")]
fn touch_point(element: &HtmlCanvasElement, event: &TouchEvent) -> Option<(f32, f32)> {
    let touch = event.changed_touches().get(0)?;
    Some(local_point(element, touch.client_x(), touch.client_y()))
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    pub(crate) fn invoke_render_callback(callback: Option<Function>) {
        if let Some(callback) = callback {
            let _ = callback.call0(&JsValue::NULL);
        }
    }

    /// Run `f` against the app; render if it reports a change.
    fn update(state: &Rc<RefCell<SharedState>>, f: impl FnOnce(&mut super::GridApp) -> bool) {
        let callback = {
            let Ok(mut s) = state.try_borrow_mut() else {
                warn!("event dropped: state already borrowed");
                return;
            };
            if !f(&mut s.app) {
                return;
            }
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }

    fn set_cursor(state: &Rc<RefCell<SharedState>>, canvas: &HtmlCanvasElement) {
        let cursor = state.borrow().app.surface().cursor();
        let _ = canvas.style().set_property("cursor", cursor);
    }

    pub(crate) fn wire_picker(
        canvas: &HtmlCanvasElement,
        state: &Rc<RefCell<SharedState>>,
    ) -> Vec<Closure<dyn FnMut(MouseEvent)>> {
        let mut closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();

        // Mouse move (highlight preview)
        {
            let state = state.clone();
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = local_point(&target, event.client_x(), event.client_y());
                Self::update(&state, |app| app.picker_move(x, y));
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse leave (reset highlight)
        {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                Self::update(&state, |app| app.picker_leave());
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Click (choose dimensions)
        {
            let state = state.clone();
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = local_point(&target, event.client_x(), event.client_y());
                Self::update(&state, |app| app.picker_click(x, y));
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        closures
    }

    pub(crate) fn wire_grid_mouse(
        canvas: &HtmlCanvasElement,
        state: &Rc<RefCell<SharedState>>,
    ) -> Vec<Closure<dyn FnMut(MouseEvent)>> {
        let mut closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();

        // Mouse enter / move share one handler
        for event_name in ["mouseenter", "mousemove"] {
            let state = state.clone();
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = local_point(&target, event.client_x(), event.client_y());
                Self::update(&state, |app| app.surface_mut().pointer_move(x, y));
                Self::set_cursor(&state, &target);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse down (pick up a handle, take keyboard focus)
        {
            let state = state.clone();
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let _ = target.focus();
                let (x, y) = local_point(&target, event.client_x(), event.client_y());
                Self::update(&state, |app| {
                    app.surface_mut().pointer_down(x, y, Sensor::Pointer)
                });
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse leave (clear hover; an active drag keeps running)
        {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                Self::update(&state, |app| app.surface_mut().pointer_leave());
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse up on window, so releases outside the canvas end the gesture.
        // Moves outside the canvas are tracked on window too while pressed.
        if let Some(window) = web_sys::window() {
            {
                let state = state.clone();
                let target = canvas.clone();
                let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                    let (x, y) = local_point(&target, event.client_x(), event.client_y());
                    Self::update(&state, |app| app.surface_mut().pointer_up(x, y));
                    Self::set_cursor(&state, &target);
                }) as Box<dyn FnMut(MouseEvent)>);
                window
                    .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())
                    .ok();
                closures.push(closure);
            }
            {
                let state = state.clone();
                let target = canvas.clone();
                let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                    let pressed = state
                        .try_borrow()
                        .map(|s| s.app.surface().drag().is_pressed())
                        .unwrap_or(false);
                    if !pressed {
                        return;
                    }
                    let (x, y) = local_point(&target, event.client_x(), event.client_y());
                    Self::update(&state, |app| app.surface_mut().pointer_move(x, y));
                }) as Box<dyn FnMut(MouseEvent)>);
                window
                    .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                    .ok();
                closures.push(closure);
            }
        }

        closures
    }

    pub(crate) fn wire_grid_touch(
        canvas: &HtmlCanvasElement,
        state: &Rc<RefCell<SharedState>>,
    ) -> Vec<Closure<dyn FnMut(TouchEvent)>> {
        let mut closures: Vec<Closure<dyn FnMut(TouchEvent)>> = Vec::new();

        // Touch start
        {
            let state = state.clone();
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
                let Some((x, y)) = touch_point(&target, &event) else {
                    return;
                };
                Self::update(&state, |app| {
                    app.surface_mut().pointer_down(x, y, Sensor::Touch)
                });
            }) as Box<dyn FnMut(TouchEvent)>);
            canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Touch move (suppress page scroll while a handle is held)
        {
            let state = state.clone();
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
                let Some((x, y)) = touch_point(&target, &event) else {
                    return;
                };
                let pressed = state
                    .try_borrow()
                    .map(|s| s.app.surface().drag().is_pressed())
                    .unwrap_or(false);
                if pressed {
                    event.prevent_default();
                }
                Self::update(&state, |app| app.surface_mut().pointer_move(x, y));
            }) as Box<dyn FnMut(TouchEvent)>);
            canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Touch end
        {
            let state = state.clone();
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
                let Some((x, y)) = touch_point(&target, &event) else {
                    Self::update(&state, |app| app.surface_mut().cancel_drag());
                    return;
                };
                Self::update(&state, |app| app.surface_mut().touch_end(x, y));
            }) as Box<dyn FnMut(TouchEvent)>);
            canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        closures
    }

    /// Keyboard sensor. The canvas is made focusable so it receives keys.
    pub(crate) fn wire_grid_keys(
        canvas: &HtmlCanvasElement,
        state: &Rc<RefCell<SharedState>>,
    ) -> Option<Closure<dyn FnMut(KeyboardEvent)>> {
        let _ = canvas.set_attribute("tabindex", "0");
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let Some(key) = Key::from_dom(&event.key()) else {
                return;
            };
            let mut consumed = false;
            Self::update(&state, |app| {
                consumed = app.surface_mut().key_down(key);
                consumed
            });
            if consumed {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        canvas
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .ok();
        Some(closure)
    }
}
