//! Canvas 2D painter for display lists.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::PaintOp;
use crate::error::{GridError, Result};

pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f32,
}

impl CanvasPainter {
    pub fn new(canvas: HtmlCanvasElement, dpr: f32) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| GridError::Dom("Failed to get 2d context".into()))?
            .ok_or_else(|| GridError::Dom("No 2d context available".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GridError::Dom("Failed to cast to CanvasRenderingContext2d".into()))?;
        Ok(Self { canvas, ctx, dpr })
    }

    /// Size the backing store to `logical × dpr` and the CSS box to `logical`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, logical_width: f32, logical_height: f32, dpr: f32) {
        self.dpr = dpr;
        let physical_w = (logical_width * dpr).ceil().max(1.0) as u32;
        let physical_h = (logical_height * dpr).ceil().max(1.0) as u32;
        if self.canvas.width() != physical_w || self.canvas.height() != physical_h {
            self.canvas.set_width(physical_w);
            self.canvas.set_height(physical_h);
        }
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{logical_width}px"));
        let _ = style.set_property("height", &format!("{logical_height}px"));
    }

    /// Replay `ops` in order. Later ops paint over earlier ones.
    pub fn paint(&self, ops: &[PaintOp]) {
        let ctx = &self.ctx;
        let dpr = f64::from(self.dpr);
        let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        ctx.set_line_width(1.0);
        ctx.set_text_baseline("middle");

        for op in ops {
            match op {
                PaintOp::Clear {
                    width,
                    height,
                    color,
                } => {
                    ctx.set_global_alpha(1.0);
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(0.0, 0.0, f64::from(*width), f64::from(*height));
                }
                PaintOp::FillRect { rect, color, alpha } => {
                    ctx.set_global_alpha(*alpha);
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(
                        f64::from(rect.x),
                        f64::from(rect.y),
                        f64::from(rect.w),
                        f64::from(rect.h),
                    );
                }
                PaintOp::StrokeRect { rect, color, alpha } => {
                    ctx.set_global_alpha(*alpha);
                    ctx.set_stroke_style_str(color);
                    // Half-pixel offset keeps 1px lines crisp
                    ctx.stroke_rect(
                        f64::from(rect.x).floor() + 0.5,
                        f64::from(rect.y).floor() + 0.5,
                        f64::from(rect.w) - 1.0,
                        f64::from(rect.h) - 1.0,
                    );
                }
                PaintOp::Text {
                    rect,
                    text,
                    color,
                    font,
                    align,
                    alpha,
                } => {
                    let (x, y, w, h) = (
                        f64::from(rect.x),
                        f64::from(rect.y),
                        f64::from(rect.w),
                        f64::from(rect.h),
                    );
                    ctx.save();
                    ctx.begin_path();
                    ctx.rect(x, y, w, h);
                    ctx.clip();
                    ctx.set_global_alpha(*alpha);
                    ctx.set_fill_style_str(color);
                    ctx.set_font(font);
                    ctx.set_text_align(align.as_css());
                    let text_x = match align {
                        super::TextAlign::Center => x + w / 2.0,
                        super::TextAlign::Left => x + 4.0,
                    };
                    let _ = ctx.fill_text(text, text_x, y + h / 2.0);
                    ctx.restore();
                }
            }
        }
        ctx.set_global_alpha(1.0);
    }
}
