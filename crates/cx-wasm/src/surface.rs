//! `cx_core::Surface` over a browser `CanvasRenderingContext2d`.

use cx_core::{Color, ImageData, Surface};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// A browser 2D context. Exceptions thrown by the context are logged and
/// dropped, matching what an uncaught error inside a draw call would leave
/// on screen.
pub struct WebSurface {
    ctx: CanvasRenderingContext2d,
}

impl WebSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

fn warn_on_err(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{op} failed: {e:?}");
    }
}

impl Surface for WebSurface {
    fn set_fill_style(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        warn_on_err("translate", self.ctx.translate(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        warn_on_err("rotate", self.ctx.rotate(angle));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        warn_on_err("scale", self.ctx.scale(sx, sy));
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        // Negative radii throw IndexSizeError
        warn_on_err(
            "arc",
            self.ctx
                .arc_with_anticlockwise(x, y, radius, start, end, anticlockwise),
        );
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.stroke_rect(x, y, w, h);
    }

    fn get_image_data(&self, x: i32, y: i32, w: u32, h: u32) -> ImageData {
        match self
            .ctx
            .get_image_data(x as f64, y as f64, w as f64, h as f64)
        {
            Ok(img) => ImageData {
                width: img.width(),
                height: img.height(),
                data: img.data().0,
            },
            Err(e) => {
                // Zero-sized or tainted reads throw
                log::warn!("get_image_data failed: {e:?}");
                ImageData::transparent(w, h)
            }
        }
    }
}
