//! Primitive drawing operations a host surface provides.
//!
//! Mirrors the subset of the Canvas 2D context that the derived helpers
//! and the scene are built from. Backends: `cx-render` (tiny-skia pixmap),
//! `cx-wasm` (browser canvas), and `record::RecordingSurface` behind the
//! `testing` feature.

use crate::color::Color;

/// One pixel as red, green, blue, alpha.
pub type Rgba = [u8; 4];

/// A rectangular block of non-premultiplied RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ImageData {
    /// A fully transparent block.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Pixel at (x, y) relative to the block origin.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// A stateful 2D drawing surface.
///
/// Path coordinates are interpreted in the current transform at the time
/// they are added. `restore` on an empty state stack does nothing.
pub trait Surface {
    // Style state
    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);

    // Transform stack
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    // Current path
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    // Rectangles, drawn without touching the current path
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Read back device pixels. Pixels outside the surface are transparent black.
    fn get_image_data(&self, x: i32, y: i32, w: u32, h: u32) -> ImageData;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_fill_style(&mut self, color: Color) {
        (**self).set_fill_style(color)
    }
    fn set_stroke_style(&mut self, color: Color) {
        (**self).set_stroke_style(color)
    }
    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width)
    }
    fn save(&mut self) {
        (**self).save()
    }
    fn restore(&mut self) {
        (**self).restore()
    }
    fn translate(&mut self, x: f64, y: f64) {
        (**self).translate(x, y)
    }
    fn rotate(&mut self, angle: f64) {
        (**self).rotate(angle)
    }
    fn scale(&mut self, sx: f64, sy: f64) {
        (**self).scale(sx, sy)
    }
    fn begin_path(&mut self) {
        (**self).begin_path()
    }
    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }
    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        (**self).arc(x, y, radius, start, end, anticlockwise)
    }
    fn close_path(&mut self) {
        (**self).close_path()
    }
    fn fill(&mut self) {
        (**self).fill()
    }
    fn stroke(&mut self) {
        (**self).stroke()
    }
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        (**self).clear_rect(x, y, w, h)
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        (**self).fill_rect(x, y, w, h)
    }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        (**self).stroke_rect(x, y, w, h)
    }
    fn get_image_data(&self, x: i32, y: i32, w: u32, h: u32) -> ImageData {
        (**self).get_image_data(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_data_indexes_row_major() {
        let mut img = ImageData::transparent(2, 2);
        img.data[12..16].copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(img.pixel(1, 1), Some([1, 2, 3, 4]));
        assert_eq!(img.pixel(0, 1), Some([0, 0, 0, 0]));
        assert_eq!(img.pixel(2, 0), None);
    }
}
