//! Widget configuration: geometry, colors and behaviour switches.
//!
//! Every field has a default, so a partial JSON object from JavaScript is
//! enough to override a single value.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Configuration for the picker and the reorderable grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Width of a data cell in logical pixels
    pub cell_width: f32,
    /// Height of a data cell in logical pixels
    pub cell_height: f32,
    /// Thickness of the row-handle strip (width) and column-handle strip (height)
    pub handle_size: f32,
    /// Gap between a handle strip and the cells
    pub handle_gap: f32,
    /// Track and paint the hovered cell's row and column
    pub hover_highlight: bool,
    /// Pointer travel (logical px) before a press turns into a drag
    pub activation_distance: f32,
    /// Opacity of the handle being dragged
    pub dragging_opacity: f64,

    /// Rows in the dimension picker
    pub picker_rows: usize,
    /// Columns in the dimension picker
    pub picker_columns: usize,
    /// Side length of a picker cell
    pub picker_cell_size: f32,
    /// Margin around each picker cell
    pub picker_cell_margin: f32,

    pub font: String,
    pub handle_glyph: String,
    pub handle_bg_color: String,
    pub cell_bg_color: String,
    pub text_color: String,
    pub grid_line_color: String,
    pub hover_bg_color: String,
    pub picker_bg_color: String,
    pub picker_highlight_color: String,
    pub picker_border_color: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: 96.0,
            cell_height: 26.0,
            handle_size: 26.0,
            handle_gap: 5.0,
            hover_highlight: true,
            activation_distance: 4.0,
            dragging_opacity: 0.8,
            picker_rows: 10,
            picker_columns: 10,
            picker_cell_size: 25.0,
            picker_cell_margin: 1.0,
            font: "13px -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
                .to_string(),
            handle_glyph: "\u{1F7F0}".to_string(),
            handle_bg_color: "#FF0000".to_string(),
            cell_bg_color: "#FFFFFF".to_string(),
            text_color: "#202124".to_string(),
            grid_line_color: "#797979".to_string(),
            hover_bg_color: "#FFF4C2".to_string(),
            picker_bg_color: "#FFFFFF".to_string(),
            picker_highlight_color: "#FF0000".to_string(),
            picker_border_color: "#797979".to_string(),
        }
    }
}

impl GridConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry that would make layout or hit testing meaningless.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
            ("handle_size", self.handle_size),
            ("picker_cell_size", self.picker_cell_size),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        let offsets = [
            ("handle_gap", self.handle_gap),
            ("activation_distance", self.activation_distance),
            ("picker_cell_margin", self.picker_cell_margin),
        ];
        for (name, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::Config(format!(
                    "{name} must be zero or positive, got {value}"
                )));
            }
        }
        if self.picker_rows == 0 || self.picker_columns == 0 {
            return Err(GridError::Config(
                "picker must have at least one row and one column".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.dragging_opacity) {
            return Err(GridError::Config(format!(
                "dragging_opacity must be within 0..=1, got {}",
                self.dragging_opacity
            )));
        }
        Ok(())
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

    #[test]
    fn test_default_is_valid() {
        GridConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GridConfig::from_json(r#"{"cell_width": 120, "hover_highlight": false}"#)
            .unwrap();
        assert_eq!(config.cell_width, 120.0);
        assert!(!config.hover_highlight);
        assert_eq!(config.picker_rows, 10);
        assert_eq!(config.handle_size, 26.0);
    }

    #[test]
    fn test_rejects_zero_cell_size() {
        let err = GridConfig::from_json(r#"{"cell_height": 0}"#).unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
        assert!(err.to_string().contains("cell_height"));
    }

    #[test]
    fn test_rejects_empty_picker() {
        let err = GridConfig::from_json(r#"{"picker_columns": 0}"#).unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = GridConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, GridError::Serialization(_)));
    }
}
