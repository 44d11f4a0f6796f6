//! Platform-independent application state behind `GridView`.

use tracing::{debug, info};

use crate::config::GridConfig;
use crate::data::{generate_grid, SeededSource};
use crate::error::Result;
use crate::layout::PickerLayout;
use crate::picker::DimensionPicker;
use crate::render::PaintOp;
use crate::surface::{picker_display_list, GridSurface};
use crate::types::Dimensions;

/// Picker, grid surface and the data source that feeds the grid.
#[derive(Debug, Clone)]
pub struct GridApp {
    config: GridConfig,
    picker: DimensionPicker,
    picker_layout: PickerLayout,
    surface: GridSurface,
    source: SeededSource,
    dimensions: Option<Dimensions>,
}

impl GridApp {
    pub fn new(config: GridConfig, source: SeededSource) -> Self {
        Self {
            picker: DimensionPicker::new(config.picker_rows, config.picker_columns),
            picker_layout: PickerLayout::new(&config),
            surface: GridSurface::new(config.clone()),
            config,
            source,
            dimensions: None,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Apply a new config. The picker is resized, the grid keeps its data.
    pub fn set_config(&mut self, config: GridConfig) -> Result<()> {
        self.surface.set_config(config.clone())?;
        self.picker.resize(config.picker_rows, config.picker_columns);
        self.picker_layout = PickerLayout::new(&config);
        self.config = config;
        debug!("config applied");
        Ok(())
    }

    /// Generate a fresh `rows × columns` grid and reset ordering state.
    pub fn choose_dimensions(&mut self, rows: usize, columns: usize) -> bool {
        let grid = generate_grid(rows, columns, &mut self.source);
        info!(rows, columns, "grid generated");
        self.surface.load(grid);
        self.dimensions = Some(Dimensions::new(rows, columns));
        true
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    pub fn picker(&self) -> &DimensionPicker {
        &self.picker
    }

    pub fn picker_layout(&self) -> &PickerLayout {
        &self.picker_layout
    }

    pub fn surface(&self) -> &GridSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut GridSurface {
        &mut self.surface
    }

    /// Pointer at picker coordinates `(x, y)`.
    pub fn picker_move(&mut self, x: f32, y: f32) -> bool {
        match self.picker_layout.cell_at(x, y) {
            Some((row, col)) => self.picker.pointer_enter(row, col),
            None => self.picker.pointer_leave(),
        }
    }

    pub fn picker_leave(&mut self) -> bool {
        self.picker.pointer_leave()
    }

    /// Click at picker coordinates; a hit chooses new dimensions.
    pub fn picker_click(&mut self, x: f32, y: f32) -> bool {
        let chosen = self
            .picker_layout
            .cell_at(x, y)
            .and_then(|(row, col)| self.picker.click(row, col));
        match chosen {
            Some(dims) => self.choose_dimensions(dims.rows, dims.columns),
            None => false,
        }
    }

    pub fn picker_display_list(&self) -> Vec<PaintOp> {
        picker_display_list(&self.picker, &self.picker_layout, &self.config)
    }

    pub fn grid_display_list(&self) -> Vec<PaintOp> {
        self.surface.display_list()
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

    fn app() -> GridApp {
        GridApp::new(GridConfig::default(), SeededSource::new(3))
    }

    #[test]
    fn test_picker_click_generates_grid() {
        let mut app = app();
        let pitch = app.picker_layout().pitch();
        // Third row, second column
        assert!(app.picker_click(pitch * 1.5, pitch * 2.5));
        assert_eq!(app.dimensions(), Some(Dimensions::new(3, 2)));
        assert_eq!(app.surface().core().row_order().len(), 3);
        assert_eq!(app.surface().core().column_order().len(), 2);
    }

    #[test]
    fn test_picker_click_outside_is_ignored() {
        let mut app = app();
        assert!(!app.picker_click(-1.0, 5.0));
        assert_eq!(app.dimensions(), None);
    }

    #[test]
    fn test_picker_move_and_leave() {
        let mut app = app();
        let pitch = app.picker_layout().pitch();
        assert!(app.picker_move(pitch * 4.5, pitch * 0.5));
        assert_eq!(app.picker().extent(), (1, 5));
        assert!(!app.picker_move(pitch * 4.6, pitch * 0.4));
        assert!(app.picker_leave());
        assert_eq!(app.picker().extent(), (0, 0));
    }

    #[test]
    fn test_set_config_resizes_picker() {
        let mut app = app();
        let config = GridConfig {
            picker_rows: 4,
            picker_columns: 6,
            ..GridConfig::default()
        };
        app.set_config(config).unwrap();
        assert_eq!(app.picker().rows(), 4);
        assert_eq!(app.picker().columns(), 6);

        let bad = GridConfig {
            picker_rows: 0,
            ..GridConfig::default()
        };
        assert!(app.set_config(bad).is_err());
        assert_eq!(app.picker().rows(), 4);
    }
}
