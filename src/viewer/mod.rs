//! Main `GridView` struct: the JavaScript entry point for the picker and the
//! reorderable grid.
//!
//! The constructor binds two canvases and registers every listener it needs,
//! so no manual JavaScript wiring is required:
//! - picker canvas: `mousemove`, `mouseleave`, `click`
//! - grid canvas: `mouseenter`, `mousedown`, `mousemove`, `mouseleave`,
//!   `touchstart`, `touchmove`, `touchend`, `keydown`
//! - window: `mouseup`, so a drag released outside the canvas still ends
//!
//! After any state change the optional render callback is invoked; the host
//! is expected to call `render()` from it (typically via
//! `requestAnimationFrame`).

mod app;
mod events;

pub use app::GridApp;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

use crate::config::GridConfig;
use crate::data::SeededSource;
#[cfg(target_arch = "wasm32")]
use crate::render::CanvasPainter;

#[cfg(not(target_arch = "wasm32"))]
use crate::drag::Sensor;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::Result;
#[cfg(not(target_arch = "wasm32"))]
use crate::render::PaintOp;
#[cfg(not(target_arch = "wasm32"))]
use crate::surface::Key;
#[cfg(not(target_arch = "wasm32"))]
use crate::types::{AxisMode, HoverPosition};

/// Shared state that can be accessed by event handlers (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) app: GridApp,
    pub(crate) render_callback: Option<Function>,
}

/// The main viewer struct exported to JavaScript
#[wasm_bindgen]
pub struct GridView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    picker_painter: CanvasPainter,
    #[cfg(target_arch = "wasm32")]
    grid_painter: CanvasPainter,
    #[cfg(target_arch = "wasm32")]
    dpr: f32,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    touch_closures: Vec<Closure<dyn FnMut(TouchEvent)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    key_closure: Option<Closure<dyn FnMut(KeyboardEvent)>>,

    #[cfg(not(target_arch = "wasm32"))]
    app: GridApp,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a new widget bound to a picker canvas and a grid canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(
        picker_canvas: HtmlCanvasElement,
        grid_canvas: HtmlCanvasElement,
        dpr: f32,
    ) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let config = GridConfig::default();
        let picker_painter = CanvasPainter::new(picker_canvas.clone(), dpr)?;
        let grid_painter = CanvasPainter::new(grid_canvas.clone(), dpr)?;

        let state = Rc::new(RefCell::new(SharedState {
            app: GridApp::new(config, SeededSource::from_entropy()),
            render_callback: None,
        }));

        let mut closures = Self::wire_picker(&picker_canvas, &state);
        closures.extend(Self::wire_grid_mouse(&grid_canvas, &state));
        let touch_closures = Self::wire_grid_touch(&grid_canvas, &state);
        let key_closure = Self::wire_grid_keys(&grid_canvas, &state);

        let mut view = GridView {
            state,
            picker_painter,
            grid_painter,
            dpr,
            closures,
            touch_closures,
            key_closure,
        };
        view.render()?;
        Ok(view)
    }

    /// Apply a (possibly partial) config object.
    ///
    /// # Errors
    /// Returns an error if the object cannot be deserialized or fails
    /// validation.
    #[wasm_bindgen]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: GridConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;
        let callback = {
            let mut s = self.state.borrow_mut();
            s.app.set_config(config)?;
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
        Ok(())
    }

    /// Generate a `rows × columns` grid, as if picked in the picker.
    #[wasm_bindgen]
    pub fn choose_dimensions(&mut self, rows: usize, columns: usize) {
        let callback = {
            let mut s = self.state.borrow_mut();
            s.app.choose_dimensions(rows, columns);
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }

    /// Paint both canvases from the current state.
    ///
    /// # Errors
    /// Returns an error if a canvas context is unusable.
    #[wasm_bindgen]
    pub fn render(&mut self) -> Result<(), JsValue> {
        let s = self.state.borrow();
        let (pw, ph) = s.app.picker_layout().total_size();
        self.picker_painter.resize(pw, ph, self.dpr);
        self.picker_painter.paint(&s.app.picker_display_list());

        let (gw, gh) = s.app.surface().layout().total_size();
        self.grid_painter.resize(gw, gh, self.dpr);
        self.grid_painter.paint(&s.app.grid_display_list());
        Ok(())
    }

    /// Update the device pixel ratio (e.g. after moving between screens).
    #[wasm_bindgen]
    pub fn set_dpr(&mut self, dpr: f32) {
        self.dpr = dpr;
        let callback = self.state.borrow().render_callback.clone();
        Self::invoke_render_callback(callback);
    }

    /// Row ids in display order.
    #[wasm_bindgen]
    pub fn row_order(&self) -> Vec<String> {
        let s = self.state.borrow();
        s.app
            .surface()
            .core()
            .row_order()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Column ids in display order.
    #[wasm_bindgen]
    pub fn column_order(&self) -> Vec<String> {
        let s = self.state.borrow();
        s.app
            .surface()
            .core()
            .column_order()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// `"row"` or `"column"`.
    #[wasm_bindgen]
    pub fn axis_mode(&self) -> String {
        self.state
            .borrow()
            .app
            .surface()
            .core()
            .axis_mode()
            .as_str()
            .to_string()
    }

    /// `{ row, column }`, each a number or `null`.
    #[wasm_bindgen]
    pub fn hover_position(&self) -> JsValue {
        let hover = self.state.borrow().app.surface().core().hover();
        serde_wasm_bindgen::to_value(&hover).unwrap_or(JsValue::NULL)
    }

    /// Current picker highlight as `[rows, columns]`.
    #[wasm_bindgen]
    pub fn picker_extent(&self) -> Vec<usize> {
        let (rows, columns) = self.state.borrow().app.picker().extent();
        vec![rows, columns]
    }

    /// Columns and rows, in display order, as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen]
    pub fn preview_json(&self) -> Result<String, JsValue> {
        let s = self.state.borrow();
        Ok(s.app.surface().preview_json()?)
    }

    /// Register a JS callback to request a render on the next animation frame.
    #[wasm_bindgen]
    pub fn set_render_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().render_callback = callback;
    }

    /// Cancel an in-flight drag, if any.
    #[wasm_bindgen]
    pub fn cancel_drag(&mut self) {
        let callback = {
            let mut s = self.state.borrow_mut();
            if !s.app.surface_mut().cancel_drag() {
                return;
            }
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }
}

// ============================================================================
// Non-WASM32 Implementation (for testing)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridView {
    /// Create a new widget (non-wasm version for testing)
    pub fn new_test(seed: u64) -> Self {
        Self {
            app: GridApp::new(GridConfig::default(), SeededSource::new(seed)),
        }
    }

    pub fn app(&self) -> &GridApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut GridApp {
        &mut self.app
    }

    pub fn set_config(&mut self, config: GridConfig) -> Result<()> {
        self.app.set_config(config)
    }

    pub fn choose_dimensions(&mut self, rows: usize, columns: usize) {
        self.app.choose_dimensions(rows, columns);
    }

    pub fn row_order(&self) -> Vec<String> {
        let core = self.app.surface().core();
        core.row_order().iter().map(ToString::to_string).collect()
    }

    pub fn column_order(&self) -> Vec<String> {
        let core = self.app.surface().core();
        core.column_order().iter().map(ToString::to_string).collect()
    }

    pub fn axis_mode(&self) -> AxisMode {
        self.app.surface().core().axis_mode()
    }

    pub fn hover_position(&self) -> HoverPosition {
        self.app.surface().core().hover()
    }

    pub fn picker_extent(&self) -> Vec<usize> {
        let (rows, columns) = self.app.picker().extent();
        vec![rows, columns]
    }

    pub fn preview_json(&self) -> Result<String> {
        self.app.surface().preview_json()
    }

    /// Display lists for the picker and the grid.
    pub fn render(&self) -> (Vec<PaintOp>, Vec<PaintOp>) {
        (self.app.picker_display_list(), self.app.grid_display_list())
    }

    pub fn on_picker_move(&mut self, x: f32, y: f32) -> bool {
        self.app.picker_move(x, y)
    }

    pub fn on_picker_leave(&mut self) -> bool {
        self.app.picker_leave()
    }

    pub fn on_picker_click(&mut self, x: f32, y: f32) -> bool {
        self.app.picker_click(x, y)
    }

    pub fn on_mouse_down(&mut self, x: f32, y: f32) -> bool {
        self.app.surface_mut().pointer_down(x, y, Sensor::Pointer)
    }

    pub fn on_mouse_move(&mut self, x: f32, y: f32) -> bool {
        self.app.surface_mut().pointer_move(x, y)
    }

    pub fn on_mouse_up(&mut self, x: f32, y: f32) -> bool {
        self.app.surface_mut().pointer_up(x, y)
    }

    pub fn on_mouse_leave(&mut self) -> bool {
        self.app.surface_mut().pointer_leave()
    }

    pub fn on_touch_start(&mut self, x: f32, y: f32) -> bool {
        self.app.surface_mut().pointer_down(x, y, Sensor::Touch)
    }

    pub fn on_touch_move(&mut self, x: f32, y: f32) -> bool {
        self.app.surface_mut().pointer_move(x, y)
    }

    /// `None` when the end event carries no touch point; the gesture is
    /// cancelled like the browser handler does.
    pub fn on_touch_end(&mut self, point: Option<(f32, f32)>) -> bool {
        match point {
            Some((x, y)) => self.app.surface_mut().touch_end(x, y),
            None => self.app.surface_mut().cancel_drag(),
        }
    }

    /// Returns `true` if the key was consumed.
    pub fn on_key_down(&mut self, key: &str) -> bool {
        match Key::from_dom(key) {
            Some(key) => self.app.surface_mut().key_down(key),
            None => false,
        }
    }

    pub fn cancel_drag(&mut self) -> bool {
        self.app.surface_mut().cancel_drag()
    }
}
