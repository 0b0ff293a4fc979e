//! A surface that draws nothing and records every primitive call.
//!
//! Used by tests to check the exact call sequence a derived operation
//! expands to, and the transform in effect at each paint. Compiled only
//! with the `testing` feature (on by default; backends turn it off).

use crate::color::Color;
use crate::surface::{ImageData, Surface};
use kurbo::Affine;
use serde::Serialize;
use std::cell::RefCell;

/// One recorded primitive call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Call {
    SetFillStyle(Color),
    SetStrokeStyle(Color),
    SetLineWidth(f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Scale(f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
        anticlockwise: bool,
    },
    ClosePath,
    Fill,
    Stroke,
    ClearRect(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
    StrokeRect(f64, f64, f64, f64),
    GetImageData(i32, i32, u32, u32),
}

impl Call {
    /// Calls that put pixels on the surface.
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            Call::Fill | Call::Stroke | Call::FillRect(..) | Call::StrokeRect(..)
        )
    }
}

/// Recording stub. Tracks the transform stack so callers can inspect the
/// transform at every paint call; reads back pixels of a fixed color.
#[derive(Debug)]
pub struct RecordingSurface {
    calls: RefCell<Vec<Call>>,
    transform: Affine,
    stack: Vec<Affine>,
    paint_transforms: Vec<Affine>,
    readback: Color,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::with_readback(Color::TRANSPARENT)
    }

    /// A stub whose `get_image_data` reports every pixel as `color`.
    pub fn with_readback(color: Color) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            paint_transforms: Vec::new(),
            readback: color,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear(&mut self) {
        self.calls.get_mut().clear();
        self.paint_transforms.clear();
    }

    /// Current transformation matrix.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Depth of the save/restore stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Transform in effect at each paint call, in call order.
    pub fn paint_transforms(&self) -> &[Affine] {
        &self.paint_transforms
    }

    fn push(&mut self, call: Call) {
        if call.is_paint() {
            self.paint_transforms.push(self.transform);
        }
        self.calls.get_mut().push(call);
    }
}

impl Surface for RecordingSurface {
    fn set_fill_style(&mut self, color: Color) {
        self.push(Call::SetFillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.push(Call::SetStrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(Call::SetLineWidth(width));
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
        self.push(Call::Save);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
        self.push(Call::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.transform = self.transform * Affine::translate((x, y));
        self.push(Call::Translate(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        self.transform = self.transform * Affine::rotate(angle);
        self.push(Call::Rotate(angle));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform = self.transform * Affine::scale_non_uniform(sx, sy);
        self.push(Call::Scale(sx, sy));
    }

    fn begin_path(&mut self) {
        self.push(Call::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(Call::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(Call::LineTo(x, y));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        self.push(Call::Arc {
            x,
            y,
            radius,
            start,
            end,
            anticlockwise,
        });
    }

    fn close_path(&mut self) {
        self.push(Call::ClosePath);
    }

    fn fill(&mut self) {
        self.push(Call::Fill);
    }

    fn stroke(&mut self) {
        self.push(Call::Stroke);
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.push(Call::ClearRect(x, y, w, h));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.push(Call::FillRect(x, y, w, h));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.push(Call::StrokeRect(x, y, w, h));
    }

    fn get_image_data(&self, x: i32, y: i32, w: u32, h: u32) -> ImageData {
        self.calls.borrow_mut().push(Call::GetImageData(x, y, w, h));
        let data = std::iter::repeat_n(self.readback.to_array(), w as usize * h as usize)
            .flatten()
            .collect();
        ImageData {
            width: w,
            height: h,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_compose_onto_current() {
        let mut s = RecordingSurface::new();
        s.translate(10.0, 0.0);
        s.scale(2.0, 2.0);
        let p = s.transform() * kurbo::Point::new(1.0, 1.0);
        assert_eq!((p.x, p.y), (12.0, 2.0));
    }

    #[test]
    fn restore_pops_saved_transform() {
        let mut s = RecordingSurface::new();
        s.save();
        s.rotate(1.0);
        assert_eq!(s.depth(), 1);
        s.restore();
        assert_eq!(s.transform(), Affine::IDENTITY);
        assert_eq!(s.depth(), 0);

        // Unbalanced restore leaves the transform alone
        s.translate(5.0, 5.0);
        s.restore();
        assert_eq!(s.transform(), Affine::translate((5.0, 5.0)));
    }

    #[test]
    fn paint_transforms_follow_paint_calls() {
        let mut s = RecordingSurface::new();
        s.begin_path();
        s.fill();
        s.translate(1.0, 2.0);
        s.stroke_rect(0.0, 0.0, 1.0, 1.0);
        assert_eq!(
            s.paint_transforms(),
            &[Affine::IDENTITY, Affine::translate((1.0, 2.0))]
        );
    }

    #[test]
    fn calls_serialize_as_snake_case() {
        let mut s = RecordingSurface::new();
        s.begin_path();
        s.move_to(1.0, 2.0);
        let json = serde_json::to_string(&s.calls()).unwrap();
        assert_eq!(json, r#"["begin_path",{"move_to":[1.0,2.0]}]"#);
    }
}
