//! Layout engine for the picker and the grid surface.
//!
//! This module handles:
//! - Pre-computing cell and handle positions from the config
//! - Binary search hit testing at surface coordinates
//! - Closest-center collision for drag targets

mod grid_layout;
mod picker_layout;

pub use grid_layout::{GridLayout, HitTarget, Rect};
pub use picker_layout::PickerLayout;
