//! In-process host handing out pixmap surfaces, for headless rendering.

use crate::pixmap::PixmapSurface;
use cx_core::{Host, SurfaceError};
use std::cell::RefCell;

/// A host with one named canvas of a fixed device size.
pub struct PixmapHost {
    canvas_id: String,
    width: u32,
    height: u32,
    diagnostic: RefCell<Option<(String, String)>>,
}

impl PixmapHost {
    pub fn new(canvas_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            width,
            height,
            diagnostic: RefCell::new(None),
        }
    }

    /// Last `(placeholder_id, html)` shown, if any.
    pub fn diagnostic(&self) -> Option<(String, String)> {
        self.diagnostic.borrow().clone()
    }
}

impl Host for PixmapHost {
    type Surface = PixmapSurface;

    fn acquire_surface(&self, canvas_id: &str) -> Result<PixmapSurface, SurfaceError> {
        if canvas_id != self.canvas_id {
            return Err(SurfaceError::ElementNotFound(canvas_id.to_string()));
        }
        PixmapSurface::new(self.width, self.height)
            .map_err(|e| SurfaceError::ContextUnavailable(e.to_string()))
    }

    fn show_diagnostic(&self, placeholder_id: &str, html: &str) {
        log::warn!("#{placeholder_id}: {html}");
        *self.diagnostic.borrow_mut() = Some((placeholder_id.to_string(), html.to_string()));
    }
}
