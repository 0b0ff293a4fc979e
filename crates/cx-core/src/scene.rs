//! The static demo scene: a blue square with a black outline, rotated 45°
//! and shifted in the rotated frame.

use crate::color::Color;
use crate::surface::Surface;
use kurbo::{Affine, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

/// Local-space square, filled then outlined.
pub const RECT: Rect = Rect::new(200.0, 200.0, 400.0, 400.0);
pub const ROTATION: f64 = FRAC_PI_4;
/// Translation applied after the rotation, so in the rotated frame.
pub const OFFSET: (f64, f64) = (100.0, -300.0);
pub const LINE_WIDTH: f64 = 4.0;
pub const FILL: Color = Color::BLUE;
pub const STROKE: Color = Color::BLACK;

/// Logical canvas area cleared before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
        }
    }
}

/// Local → device transform the rectangle is drawn under, assuming the
/// surface starts at identity.
pub fn scene_transform() -> Affine {
    Affine::rotate(ROTATION) * Affine::translate(OFFSET)
}

/// Draw the scene on the default 600×600 area.
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S) {
    draw_scene_with(surface, &SceneConfig::default());
}

/// Draw the scene, clearing `config`'s area first.
///
/// Transforms compose onto whatever is current; the surface is left in
/// the rotated + translated state afterwards.
pub fn draw_scene_with<S: Surface + ?Sized>(surface: &mut S, config: &SceneConfig) {
    let (x, y, w, h) = (RECT.x0, RECT.y0, RECT.width(), RECT.height());

    log::trace!("SCENE clear {}x{}", config.width, config.height);
    surface.clear_rect(0.0, 0.0, config.width, config.height);

    surface.rotate(ROTATION);
    surface.translate(OFFSET.0, OFFSET.1);

    log::trace!("SCENE fill {FILL} ({x}, {y}, {w}, {h})");
    surface.set_fill_style(FILL);
    surface.fill_rect(x, y, w, h);

    surface.set_stroke_style(STROKE);
    surface.set_line_width(LINE_WIDTH);
    surface.translate(0.0, 0.0);

    log::trace!("SCENE stroke {STROKE} width {LINE_WIDTH}");
    surface.stroke_rect(x, y, w, h);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Call, RecordingSurface};
    use pretty_assertions::assert_eq;

    #[test]
    fn scene_issues_calls_in_order() {
        let mut s = RecordingSurface::new();
        draw_scene(&mut s);
        assert_eq!(
            s.calls(),
            vec![
                Call::ClearRect(0.0, 0.0, 600.0, 600.0),
                Call::Rotate(FRAC_PI_4),
                Call::Translate(100.0, -300.0),
                Call::SetFillStyle(Color::BLUE),
                Call::FillRect(200.0, 200.0, 200.0, 200.0),
                Call::SetStrokeStyle(Color::BLACK),
                Call::SetLineWidth(4.0),
                Call::Translate(0.0, 0.0),
                Call::StrokeRect(200.0, 200.0, 200.0, 200.0),
            ]
        );
    }

    #[test]
    fn fill_and_stroke_share_one_frame() {
        let mut s = RecordingSurface::new();
        draw_scene(&mut s);
        let [fill, stroke] = s.paint_transforms() else {
            panic!("expected two paints");
        };
        let want = scene_transform();
        for t in [fill, stroke] {
            let (a, b) = (t.as_coeffs(), want.as_coeffs());
            assert!(a.iter().zip(b).all(|(p, q)| (p - q).abs() < 1e-9));
        }
    }

    #[test]
    fn config_changes_cleared_area() {
        let mut s = RecordingSurface::new();
        draw_scene_with(&mut s, &SceneConfig { width: 800.0, height: 300.0 });
        assert_eq!(s.calls()[0], Call::ClearRect(0.0, 0.0, 800.0, 300.0));
    }

    #[test]
    fn config_fills_missing_fields() {
        let cfg: SceneConfig = serde_json::from_str(r#"{"width": 320}"#).unwrap();
        assert_eq!(cfg, SceneConfig { width: 320.0, height: 600.0 });
    }
}
