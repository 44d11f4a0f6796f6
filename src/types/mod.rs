//! Data types for the grid widget.

mod axis;
mod grid;
mod ids;

pub use axis::*;
pub use grid::*;
pub use ids::*;
