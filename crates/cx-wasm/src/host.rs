//! Element lookup in the page's document.

use crate::surface::WebSurface;
use cx_core::{Host, SurfaceError};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

pub struct WebHost {
    document: Document,
}

impl WebHost {
    /// The current window's document, if running in a page.
    pub fn from_window() -> Result<Self, SurfaceError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SurfaceError::Unsupported)?;
        Ok(Self { document })
    }
}

impl Host for WebHost {
    type Surface = WebSurface;

    fn acquire_surface(&self, canvas_id: &str) -> Result<WebSurface, SurfaceError> {
        let canvas: HtmlCanvasElement = self
            .document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SurfaceError::ElementNotFound(canvas_id.to_string()))?
            .dyn_into()
            .map_err(|_| SurfaceError::NotACanvas(canvas_id.to_string()))?;

        let ctx: js_sys::Object = canvas
            .get_context("2d")
            .map_err(|e| SurfaceError::ContextUnavailable(format!("{e:?}")))?
            .ok_or_else(|| SurfaceError::ContextUnavailable("null context".to_string()))?;
        let ctx: CanvasRenderingContext2d = ctx
            .dyn_into()
            .map_err(|_| SurfaceError::ContextUnavailable("not a 2d context".to_string()))?;

        Ok(WebSurface::new(ctx))
    }

    fn show_diagnostic(&self, placeholder_id: &str, html: &str) {
        match self.document.get_element_by_id(placeholder_id) {
            Some(el) => el.set_inner_html(html),
            None => log::warn!("no placeholder `{placeholder_id}` for diagnostic"),
        }
    }
}
