//! Software drawing surface backed by a `tiny-skia` pixmap.
//!
//! Follows browser canvas rules: path points are fixed in device space when
//! added, `fill` ignores the current transform, `stroke` and the rect
//! helpers draw under it (so line width scales with it). Calls with
//! non-finite arguments are ignored.

use crate::path::{CurrentPath, arc_sweep, rect_path, to_skia};
use cx_core::{Color, ImageData, Surface};
use kurbo::{Affine, PathEl, Point, Vec2};
use std::fmt;
use thiserror::Error;
use tiny_skia::{BlendMode, FillRule, Paint, Pixmap, Stroke, Transform};

/// Device-space flattening tolerance for arcs, in pixels.
const ARC_TOLERANCE: f64 = 0.05;
/// Floor on arc tolerance as a fraction of the radius. Bounds the cubic
/// count per full turn no matter how large the radius or the transform.
const ARC_RELATIVE_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    Encode(String),
}

/// Style and transform saved by `save`, restored by `restore`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingState {
    pub transform: Affine,
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
        }
    }
}

pub struct PixmapSurface {
    pixmap: Pixmap,
    state: DrawingState,
    stack: Vec<DrawingState>,
    path: CurrentPath,
}

impl fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("state", &self.state)
            .field("depth", &self.stack.len())
            .finish()
    }
}

impl PixmapSurface {
    /// A transparent surface of `width`×`height` device pixels.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
        log::debug!("pixmap surface {width}x{height}");
        Ok(Self {
            pixmap,
            state: DrawingState::default(),
            stack: Vec::new(),
            path: CurrentPath::default(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Current transformation matrix.
    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        paint
    }

    fn stroke_style(&self) -> Stroke {
        Stroke {
            width: self.state.line_width as f32,
            ..Stroke::default()
        }
    }

    fn device(&self, x: f64, y: f64) -> Point {
        self.state.transform * Point::new(x, y)
    }

    fn apply(&mut self, t: Affine) {
        self.state.transform = self.state.transform * t;
    }
}

fn skia_transform(t: Affine) -> Transform {
    let [a, b, c, d, e, f] = t.as_coeffs();
    Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
}

fn finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// An invertible transform, or `None` when it collapses the plane.
fn invertible(t: Affine) -> Option<Affine> {
    let det = t.determinant();
    (det.is_finite() && det.abs() > f64::EPSILON).then(|| t.inverse())
}

impl Surface for PixmapSurface {
    fn set_fill_style(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        if finite(&[x, y]) {
            self.apply(Affine::translate((x, y)));
        }
    }

    fn rotate(&mut self, angle: f64) {
        if angle.is_finite() {
            self.apply(Affine::rotate(angle));
        }
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        if finite(&[sx, sy]) {
            self.apply(Affine::scale_non_uniform(sx, sy));
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if finite(&[x, y]) {
            let p = self.device(x, y);
            self.path.move_to(p);
        }
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if finite(&[x, y]) {
            let p = self.device(x, y);
            self.path.line_to(p);
        }
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        if !finite(&[x, y, radius, start, end]) {
            return;
        }
        if radius < 0.0 {
            log::warn!("arc with negative radius {radius} ignored");
            return;
        }

        let ctm = self.state.transform;
        let center = Point::new(x, y);
        let arc = kurbo::Arc {
            center,
            radii: Vec2::new(radius, radius),
            start_angle: start,
            sweep_angle: arc_sweep(start, end, anticlockwise),
            x_rotation: 0.0,
        };

        self.path.line_to(ctm * (center + Vec2::from_angle(start) * radius));

        let scale = ctm.determinant().abs().sqrt();
        let tolerance = if scale > 0.0 {
            (ARC_TOLERANCE / scale).min(ARC_TOLERANCE)
        } else {
            ARC_TOLERANCE
        }
        .max(radius * ARC_RELATIVE_TOLERANCE);
        for el in arc.append_iter(tolerance) {
            if let PathEl::CurveTo(c1, c2, p) = el {
                self.path.curve_to(ctm * c1, ctm * c2, ctm * p);
            }
        }
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn fill(&mut self) {
        let Some(path) = self.path.to_skia() else {
            return;
        };
        let paint = Self::paint(self.state.fill);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke(&mut self) {
        // Stroke geometry is built in user space, then mapped by the CTM.
        let Some(inverse) = invertible(self.state.transform) else {
            return;
        };
        let mut user = self.path.bez().clone();
        user.apply_affine(inverse);
        let Some(path) = to_skia(&user) else {
            return;
        };
        let paint = Self::paint(self.state.stroke);
        let stroke = self.stroke_style();
        self.pixmap.stroke_path(
            &path,
            &paint,
            &stroke,
            skia_transform(self.state.transform),
            None,
        );
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if !finite(&[x, y, w, h]) {
            return;
        }
        let Some(path) = rect_path(x, y, w, h) else {
            return;
        };
        let mut paint = Self::paint(Color::TRANSPARENT);
        paint.blend_mode = BlendMode::Clear;
        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            skia_transform(self.state.transform),
            None,
        );
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if !finite(&[x, y, w, h]) {
            return;
        }
        let Some(path) = rect_path(x, y, w, h) else {
            return;
        };
        let paint = Self::paint(self.state.fill);
        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            skia_transform(self.state.transform),
            None,
        );
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if !finite(&[x, y, w, h]) || invertible(self.state.transform).is_none() {
            return;
        }
        let Some(path) = rect_path(x, y, w, h) else {
            return;
        };
        let paint = Self::paint(self.state.stroke);
        let stroke = self.stroke_style();
        self.pixmap.stroke_path(
            &path,
            &paint,
            &stroke,
            skia_transform(self.state.transform),
            None,
        );
    }

    fn get_image_data(&self, x: i32, y: i32, w: u32, h: u32) -> ImageData {
        let mut img = ImageData::transparent(w, h);
        for row in 0..h {
            for col in 0..w {
                let (px, py) = (x as i64 + col as i64, y as i64 + row as i64);
                let Some(c) = self.device_pixel(px, py) else {
                    continue;
                };
                let i = (row as usize * w as usize + col as usize) * 4;
                img.data[i..i + 4].copy_from_slice(&c);
            }
        }
        img
    }
}

impl PixmapSurface {
    fn device_pixel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }
}
