//! gridshift - drag-to-reorder data grid for the web
//!
//! A dimension picker and a data grid whose rows and columns can be reordered
//! by dragging their handles, rendered to Canvas 2D via WebAssembly:
//! - Hover the picker to preview a size, click to generate a grid
//! - Drag row handles vertically or column handles horizontally
//! - Pointer, touch and keyboard (Space/Enter, arrows, Escape) sensors
//! - Live JSON preview of the data in display order
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridshift';
//! await init();
//! const view = new GridView(pickerCanvas, gridCanvas, devicePixelRatio);
//! view.set_render_callback(() => requestAnimationFrame(() => view.render()));
//! view.choose_dimensions(5, 4);
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use gridshift::data::{generate_grid, SeededSource};
//! use gridshift::reorder::ReorderCore;
//!
//! let grid = generate_grid(3, 2, &mut SeededSource::new(7));
//! let mut core = ReorderCore::with_grid(&grid.columns, &grid.rows);
//! let first = grid.rows[0].id.clone();
//! let last = grid.rows[2].id.clone();
//! assert!(core.reorder(&first, &last));
//! assert_eq!(core.row_order().get(2), Some(&first));
//! ```

// Core
pub mod error;
pub mod order;
pub mod reorder;
pub mod types;

// Collaborators
pub mod config;
pub mod data;
pub mod drag;
pub mod picker;
pub mod table;

// Rendering and interaction (Canvas 2D)
pub mod layout;
pub mod render;
pub mod surface;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
pub use viewer::GridView;

pub use types::*;

/// Generate a `rows × columns` grid and return it as preview JSON
/// (`{ "columns": [...], "data": [...] }`).
///
/// The same `seed` always yields the same grid.
///
/// # Errors
/// Returns an error if JSON serialization fails.
#[wasm_bindgen]
pub fn generate_preview(rows: usize, columns: usize, seed: u32) -> Result<String, JsValue> {
    let mut source = data::SeededSource::new(u64::from(seed));
    let grid = data::generate_grid(rows, columns, &mut source);
    serde_json::to_string_pretty(&grid)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
