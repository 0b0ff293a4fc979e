//! Headless backend: a `tiny-skia` pixmap behind the `cx_core::Surface` trait.

mod host;
mod path;
mod pixmap;

pub use host::PixmapHost;
pub use pixmap::{DrawingState, PixmapSurface, RenderError};
