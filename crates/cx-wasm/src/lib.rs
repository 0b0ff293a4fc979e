//! WASM entry point — draws the demo scene into the page's `#canvas`.
//!
//! Compiled via `wasm-pack build --target web`; the page calls `init()`
//! once loaded. The returned [`Graphics`] handle exposes the derived
//! drawing helpers to JavaScript.

mod console;
mod host;
mod surface;

pub use host::WebHost;
pub use surface::WebSurface;

use cx_core::{BootConfig, Color, Extras, GraphicsExtras, Surface};
use wasm_bindgen::prelude::*;

/// A page canvas with the extra drawing helpers installed.
#[wasm_bindgen]
pub struct Graphics {
    inner: Extras<WebSurface>,
}

#[wasm_bindgen]
impl Graphics {
    /// Set the fill color from a CSS hex string. Unparseable colors are
    /// ignored, like a bad `fillStyle` assignment.
    pub fn set_fill_style(&mut self, css: &str) {
        if let Some(c) = Color::from_hex(css) {
            self.inner.set_fill_style(c);
        }
    }

    pub fn set_stroke_style(&mut self, css: &str) {
        if let Some(c) = Color::from_hex(css) {
            self.inner.set_stroke_style(c);
        }
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.inner.set_line_width(width);
    }

    pub fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.inner.stroke_line(x1, y1, x2, y2);
    }

    pub fn fill_circle(&mut self, x: f64, y: f64, r: f64) {
        self.inner.fill_circle(x, y, r);
    }

    pub fn stroke_circle(&mut self, x: f64, y: f64, r: f64) {
        self.inner.stroke_circle(x, y, r);
    }

    pub fn fill_oval(&mut self, x: f64, y: f64, rh: f64, rv: f64) {
        self.inner.fill_oval(x, y, rh, rv);
    }

    pub fn stroke_oval(&mut self, x: f64, y: f64, rh: f64, rv: f64) {
        self.inner.stroke_oval(x, y, rh, rv);
    }

    /// Flattened `[x1, y1, x2, y2, ...]` from a JS `Float64Array`.
    pub fn fill_poly(&mut self, coords: &[f64]) {
        self.inner.fill_poly_flat(coords);
    }

    pub fn stroke_poly(&mut self, coords: &[f64]) {
        self.inner.stroke_poly_flat(coords);
    }

    /// `[r, g, b, a]` of the pixel at (x, y).
    pub fn get_rgb(&self, x: i32, y: i32) -> Vec<u8> {
        self.inner.get_rgb(x, y).to_vec()
    }
}

/// Draw the scene using the default element ids (`canvas`, `canvasholder`).
///
/// Returns `undefined` when no 2D context is available; the placeholder
/// element then carries the diagnostic and nothing is drawn.
#[wasm_bindgen]
pub fn init() -> Option<Graphics> {
    boot(&BootConfig::default())
}

/// Like [`init`], with a JSON `BootConfig` override; missing fields keep
/// their defaults. Throws only on malformed JSON.
#[wasm_bindgen]
pub fn init_with_config(json: &str) -> Result<Option<Graphics>, JsValue> {
    let config = parse_config(json).map_err(|e| JsValue::from_str(&e))?;
    Ok(boot(&config))
}

fn parse_config(json: &str) -> Result<BootConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid boot config: {e}"))
}

fn boot(config: &BootConfig) -> Option<Graphics> {
    console::setup(log::LevelFilter::Debug);
    let host = match WebHost::from_window() {
        Ok(host) => host,
        Err(e) => {
            log::error!("no document to draw in: {e}");
            return None;
        }
    };
    // `run` has already logged and shown the diagnostic on failure
    let inner = cx_core::run(&host, config).ok()?;
    Some(Graphics { inner })
}
