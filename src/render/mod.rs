//! Backend-agnostic display lists and the Canvas 2D painter.
//!
//! The surface and picker describe a frame as a flat list of [`PaintOp`]s,
//! which keeps everything above the canvas testable natively. The
//! [`CanvasPainter`] replays a list onto a `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;

use crate::layout::Rect;

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// One drawing instruction, in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// Clear the whole surface to a color.
    Clear { width: f32, height: f32, color: String },
    FillRect {
        rect: Rect,
        color: String,
        alpha: f64,
    },
    StrokeRect {
        rect: Rect,
        color: String,
        alpha: f64,
    },
    /// Text vertically centered in `rect`, clipped to it.
    Text {
        rect: Rect,
        text: String,
        color: String,
        font: String,
        align: TextAlign,
        alpha: f64,
    },
}

impl PaintOp {
    pub fn fill(rect: Rect, color: &str, alpha: f64) -> Self {
        Self::FillRect {
            rect,
            color: color.to_string(),
            alpha,
        }
    }

    pub fn stroke(rect: Rect, color: &str, alpha: f64) -> Self {
        Self::StrokeRect {
            rect,
            color: color.to_string(),
            alpha,
        }
    }
}
