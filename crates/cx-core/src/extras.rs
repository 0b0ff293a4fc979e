//! Derived drawing operations built from surface primitives.
//!
//! [`install_extras`] wraps a surface once at setup time in an [`Extras`]
//! decorator. The decorator forwards every primitive to the wrapped surface
//! and implements [`GraphicsExtras`] by composing those primitives.
//!
//! None of the helpers validate their arguments: a negative radius or a NaN
//! coordinate goes straight to the primitive, which decides what (if
//! anything) gets drawn.

use crate::color::Color;
use crate::surface::{ImageData, Rgba, Surface};
use std::f64::consts::TAU;

/// Minimum vertex count for [`GraphicsExtras::fill_poly`].
pub const MIN_FILL_POINTS: usize = 3;
/// Minimum vertex count for [`GraphicsExtras::stroke_poly`].
pub const MIN_STROKE_POINTS: usize = 2;

/// Higher-level drawing helpers.
pub trait GraphicsExtras {
    /// Stroke the segment from (x1, y1) to (x2, y2).
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    fn fill_circle(&mut self, x: f64, y: f64, r: f64);
    fn stroke_circle(&mut self, x: f64, y: f64, r: f64);

    /// Fill the axis-aligned oval centered at (x, y) with radii `rh`, `rv`.
    fn fill_oval(&mut self, x: f64, y: f64, rh: f64, rv: f64);
    fn stroke_oval(&mut self, x: f64, y: f64, rh: f64, rv: f64);

    /// Fill the closed polygon through `points`. Fewer than three points
    /// draws nothing.
    fn fill_poly(&mut self, points: &[(f64, f64)]);

    /// Stroke the closed polygon through `points`. Fewer than two points
    /// draws nothing.
    fn stroke_poly(&mut self, points: &[(f64, f64)]);

    /// `fill_poly` over a flattened `x1, y1, x2, y2, ...` list. A trailing
    /// unpaired value is ignored.
    fn fill_poly_flat(&mut self, coords: &[f64]);

    /// `stroke_poly` over a flattened `x1, y1, x2, y2, ...` list.
    fn stroke_poly_flat(&mut self, coords: &[f64]);

    /// Color of the device pixel at (x, y) as red, green, blue, alpha.
    fn get_rgb(&self, x: i32, y: i32) -> Rgba;
}

/// Whole points in a flattened coordinate list.
fn flat_points(coords: &[f64]) -> impl Iterator<Item = (f64, f64)> + '_ {
    coords.chunks_exact(2).map(|c| (c[0], c[1]))
}

/// A surface decorated with [`GraphicsExtras`].
#[derive(Debug, Default)]
pub struct Extras<S> {
    surface: S,
}

/// Wrap `surface` so the derived helpers are available on it.
pub fn install_extras<S: Surface>(surface: S) -> Extras<S> {
    log::debug!("graphics extras installed");
    Extras { surface }
}

impl<S> Extras<S> {
    pub fn inner(&self) -> &S {
        &self.surface
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_inner(self) -> S {
        self.surface
    }
}

impl<S: Surface> Extras<S> {
    /// Current path through `points`, closed. Caller checks the minimum.
    fn poly_path(&mut self, points: impl IntoIterator<Item = (f64, f64)>) {
        let s = &mut self.surface;
        s.begin_path();
        let mut points = points.into_iter();
        if let Some((x0, y0)) = points.next() {
            s.move_to(x0, y0);
        }
        for (x, y) in points {
            s.line_to(x, y);
        }
        s.close_path();
    }

    /// Unit circle under translate + scale, restored before the caller paints
    /// so line width and fill are not distorted by the scale.
    fn oval_path(&mut self, x: f64, y: f64, rh: f64, rv: f64) {
        let s = &mut self.surface;
        s.save();
        s.translate(x, y);
        s.scale(rh, rv);
        s.begin_path();
        s.arc(0.0, 0.0, 1.0, 0.0, TAU, false);
        s.restore();
    }
}

impl<S: Surface> GraphicsExtras for Extras<S> {
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        log::trace!("stroke_line ({x1}, {y1}) -> ({x2}, {y2})");
        let s = &mut self.surface;
        s.begin_path();
        s.move_to(x1, y1);
        s.line_to(x2, y2);
        s.stroke();
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64) {
        log::trace!("fill_circle ({x}, {y}) r={r}");
        let s = &mut self.surface;
        s.begin_path();
        s.arc(x, y, r, 0.0, TAU, false);
        s.fill();
    }

    fn stroke_circle(&mut self, x: f64, y: f64, r: f64) {
        log::trace!("stroke_circle ({x}, {y}) r={r}");
        let s = &mut self.surface;
        s.begin_path();
        s.arc(x, y, r, 0.0, TAU, false);
        s.stroke();
    }

    fn fill_oval(&mut self, x: f64, y: f64, rh: f64, rv: f64) {
        log::trace!("fill_oval ({x}, {y}) r=({rh}, {rv})");
        self.oval_path(x, y, rh, rv);
        self.surface.fill();
    }

    fn stroke_oval(&mut self, x: f64, y: f64, rh: f64, rv: f64) {
        log::trace!("stroke_oval ({x}, {y}) r=({rh}, {rv})");
        self.oval_path(x, y, rh, rv);
        self.surface.stroke();
    }

    fn fill_poly(&mut self, points: &[(f64, f64)]) {
        if points.len() < MIN_FILL_POINTS {
            return;
        }
        log::trace!("fill_poly {} points", points.len());
        self.poly_path(points.iter().copied());
        self.surface.fill();
    }

    fn stroke_poly(&mut self, points: &[(f64, f64)]) {
        if points.len() < MIN_STROKE_POINTS {
            return;
        }
        log::trace!("stroke_poly {} points", points.len());
        self.poly_path(points.iter().copied());
        self.surface.stroke();
    }

    fn fill_poly_flat(&mut self, coords: &[f64]) {
        if coords.len() / 2 < MIN_FILL_POINTS {
            return;
        }
        log::trace!("fill_poly_flat {} points", coords.len() / 2);
        self.poly_path(flat_points(coords));
        self.surface.fill();
    }

    fn stroke_poly_flat(&mut self, coords: &[f64]) {
        if coords.len() / 2 < MIN_STROKE_POINTS {
            return;
        }
        log::trace!("stroke_poly_flat {} points", coords.len() / 2);
        self.poly_path(flat_points(coords));
        self.surface.stroke();
    }

    fn get_rgb(&self, x: i32, y: i32) -> Rgba {
        self.surface
            .get_image_data(x, y, 1, 1)
            .pixel(0, 0)
            .unwrap_or([0; 4])
    }
}

impl<S: Surface> Surface for Extras<S> {
    fn set_fill_style(&mut self, color: Color) {
        self.surface.set_fill_style(color)
    }
    fn set_stroke_style(&mut self, color: Color) {
        self.surface.set_stroke_style(color)
    }
    fn set_line_width(&mut self, width: f64) {
        self.surface.set_line_width(width)
    }
    fn save(&mut self) {
        self.surface.save()
    }
    fn restore(&mut self) {
        self.surface.restore()
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.surface.translate(x, y)
    }
    fn rotate(&mut self, angle: f64) {
        self.surface.rotate(angle)
    }
    fn scale(&mut self, sx: f64, sy: f64) {
        self.surface.scale(sx, sy)
    }
    fn begin_path(&mut self) {
        self.surface.begin_path()
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.surface.move_to(x, y)
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.surface.line_to(x, y)
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        self.surface.arc(x, y, radius, start, end, anticlockwise)
    }
    fn close_path(&mut self) {
        self.surface.close_path()
    }
    fn fill(&mut self) {
        self.surface.fill()
    }
    fn stroke(&mut self) {
        self.surface.stroke()
    }
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.surface.clear_rect(x, y, w, h)
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.surface.fill_rect(x, y, w, h)
    }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.surface.stroke_rect(x, y, w, h)
    }
    fn get_image_data(&self, x: i32, y: i32, w: u32, h: u32) -> ImageData {
        self.surface.get_image_data(x, y, w, h)
    }
}
