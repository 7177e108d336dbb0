//! Canvas 2D backend for [`Surface`]

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::color::Rgba;
use super::surface::Surface;

/// A canvas element plus its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> bool {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn resize(&mut self, width: f32, height: f32) {
        // Setting the size clears the bitmap, so skip no-op resizes
        let (w, h) = (width.max(0.0) as u32, height.max(0.0) as u32);
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }
    }

    fn fill_rect(&mut self, color: Rgba) {
        let (w, h) = self.size();
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if self.circle_path(center, radius) {
            self.ctx.set_fill_style_str(&color.css());
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba) {
        if self.circle_path(center, radius) {
            self.ctx.set_stroke_style_str(&color.css());
            self.ctx.set_line_width(line_width as f64);
            self.ctx.stroke();
        }
    }
}
