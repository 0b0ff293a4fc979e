//! Startup: acquire a surface from the host, install extras, draw.

use crate::extras::{Extras, install_extras};
use crate::scene::{SceneConfig, draw_scene_with};
use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder content shown when no drawing surface can be acquired.
pub const UNSUPPORTED_MESSAGE: &str =
    "Canvas graphics is not supported.<br>An error occurred while initializing graphics.";

/// Why a drawing surface could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("no element with id `{0}`")]
    ElementNotFound(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("2d context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("2d drawing is not supported here")]
    Unsupported,
}

/// Element ids and scene area used at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    pub canvas_id: String,
    pub placeholder_id: String,
    pub scene: SceneConfig,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            canvas_id: "canvas".to_string(),
            placeholder_id: "canvasholder".to_string(),
            scene: SceneConfig::default(),
        }
    }
}

/// The environment a surface is acquired from.
pub trait Host {
    type Surface: Surface;

    /// Look up the element `canvas_id` and obtain its 2D context.
    fn acquire_surface(&self, canvas_id: &str) -> Result<Self::Surface, SurfaceError>;

    /// Replace the content of element `placeholder_id` with `html`.
    fn show_diagnostic(&self, placeholder_id: &str, html: &str);
}

/// Acquire, install extras, draw.
///
/// On acquisition failure the placeholder gets [`UNSUPPORTED_MESSAGE`] and
/// nothing is drawn; the error is returned for the caller to inspect.
pub fn run<H: Host>(host: &H, config: &BootConfig) -> Result<Extras<H::Surface>, SurfaceError> {
    let surface = match host.acquire_surface(&config.canvas_id) {
        Ok(surface) => surface,
        Err(e) => {
            log::error!("cannot initialize graphics on `{}`: {e}", config.canvas_id);
            host.show_diagnostic(&config.placeholder_id, UNSUPPORTED_MESSAGE);
            return Err(e);
        }
    };
    log::debug!("acquired 2d surface `{}`", config.canvas_id);

    let mut graphics = install_extras(surface);
    draw_scene_with(&mut graphics, &config.scene);
    log::debug!("scene drawn");
    Ok(graphics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ids_match_page_markup() {
        let cfg = BootConfig::default();
        assert_eq!(cfg.canvas_id, "canvas");
        assert_eq!(cfg.placeholder_id, "canvasholder");
        assert_eq!(cfg.scene, SceneConfig::default());
    }

    #[test]
    fn config_deserializes_partial_json() {
        let cfg: BootConfig =
            serde_json::from_str(r#"{"canvas_id":"main","scene":{"height":480}}"#).unwrap();
        assert_eq!(cfg.canvas_id, "main");
        assert_eq!(cfg.placeholder_id, "canvasholder");
        assert_eq!(cfg.scene.height, 480.0);
        assert_eq!(cfg.scene.width, 600.0);
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(
            SurfaceError::ElementNotFound("canvas".into()).to_string(),
            "no element with id `canvas`"
        );
        assert_eq!(
            SurfaceError::ContextUnavailable("null".into()).to_string(),
            "2d context unavailable: null"
        );
    }
}
