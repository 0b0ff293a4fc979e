//! Integration tests: bootstrap → scene → sampled pixels.
//!
//! Draws the demo scene on a headless 600×600 pixmap and checks pixels at
//! the device positions of known local points.

use cx_core::kurbo::Point;
use cx_core::scene::{RECT, scene_transform};
use cx_core::{BootConfig, GraphicsExtras, UNSUPPORTED_MESSAGE, run};
use cx_render::{PixmapHost, PixmapSurface};
use pretty_assertions::assert_eq;

const BLUE: [u8; 4] = [0, 0, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render() -> cx_core::Extras<PixmapSurface> {
    init_logger();
    let host = PixmapHost::new("canvas", 600, 600);
    run(&host, &BootConfig::default()).expect("surface should be acquired")
}

/// Device pixel covering the local scene point (x, y).
fn sample(g: &impl GraphicsExtras, x: f64, y: f64) -> [u8; 4] {
    let p = scene_transform() * Point::new(x, y);
    g.get_rgb(p.x.floor() as i32, p.y.floor() as i32)
}

// ─── Fill ───────────────────────────────────────────────────────────────

#[test]
fn square_interior_is_blue() {
    let g = render();
    let c = RECT.center();
    assert_eq!(sample(&g, c.x, c.y), BLUE);
    assert_eq!(sample(&g, 210.0, 210.0), BLUE);
    assert_eq!(sample(&g, 390.0, 250.0), BLUE);
}

#[test]
fn rotated_center_lands_on_diagonal() {
    let c = scene_transform() * RECT.center();
    assert!((c.x - 200.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    assert!((c.y - c.x).abs() < 1e-9);
}

// ─── Outline ────────────────────────────────────────────────────────────

#[test]
fn edges_and_corners_are_black() {
    let g = render();
    assert_eq!(sample(&g, 300.0, 200.0), BLACK);
    assert_eq!(sample(&g, 400.0, 300.0), BLACK);
    assert_eq!(sample(&g, 200.0, 200.0), BLACK);
    assert_eq!(sample(&g, 400.0, 400.0), BLACK);
}

#[test]
fn outline_stays_four_pixels_wide() {
    let g = render();
    // Stroke spans local y 198..202 along the top edge
    assert_eq!(sample(&g, 300.0, 200.5), BLACK);
    assert_eq!(sample(&g, 300.0, 199.5), BLACK);
    assert_eq!(sample(&g, 300.0, 204.0), BLUE);
    assert_eq!(sample(&g, 300.0, 196.0), CLEAR);
}

// ─── Background ─────────────────────────────────────────────────────────

#[test]
fn untransformed_rect_area_stays_clear() {
    let g = render();
    assert_eq!(g.get_rgb(205, 205), CLEAR);
    assert_eq!(g.get_rgb(395, 395), CLEAR);
    assert_eq!(g.get_rgb(10, 590), CLEAR);
}

#[test]
fn scene_leaves_rotated_frame_current() {
    let g = render();
    let t = g.inner().transform().as_coeffs();
    let want = scene_transform().as_coeffs();
    assert!(t.iter().zip(want).all(|(a, b)| (a - b).abs() < 1e-9));
}

// ─── Failure ────────────────────────────────────────────────────────────

#[test]
fn missing_canvas_reports_unsupported() {
    init_logger();
    let host = PixmapHost::new("elsewhere", 600, 600);
    assert!(run(&host, &BootConfig::default()).is_err());
    assert_eq!(
        host.diagnostic(),
        Some(("canvasholder".to_string(), UNSUPPORTED_MESSAGE.to_string()))
    );
}
