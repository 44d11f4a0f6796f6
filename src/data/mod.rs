//! Synthetic data for the grid.
//!
//! - [`DataSource`]: injected pseudo-random ids and values
//! - [`generate_grid`]: weekday grid for a picked `(rows, columns)`
//! - [`make_nested`]: multi-level person records with `sub_rows`

mod generate;
mod source;

pub use generate::{generate_grid, make_nested, person_columns};
pub use source::{DataSource, SeededSource, WEEKDAYS};
