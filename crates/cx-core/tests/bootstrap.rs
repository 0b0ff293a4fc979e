//! Integration tests: host → bootstrap → extras + scene.
//!
//! Exercises `cx_core::run` against an in-memory host that hands out
//! recording surfaces.

use cx_core::record::{Call, RecordingSurface};
use cx_core::{BootConfig, GraphicsExtras, Host, SurfaceError, UNSUPPORTED_MESSAGE, run};
use pretty_assertions::assert_eq;
use std::cell::RefCell;

struct FakeHost {
    canvas_id: &'static str,
    diagnostics: RefCell<Vec<(String, String)>>,
}

impl FakeHost {
    fn with_canvas(id: &'static str) -> Self {
        Self {
            canvas_id: id,
            diagnostics: RefCell::new(Vec::new()),
        }
    }
}

impl Host for FakeHost {
    type Surface = RecordingSurface;

    fn acquire_surface(&self, canvas_id: &str) -> Result<RecordingSurface, SurfaceError> {
        if canvas_id == self.canvas_id {
            Ok(RecordingSurface::new())
        } else {
            Err(SurfaceError::ElementNotFound(canvas_id.to_string()))
        }
    }

    fn show_diagnostic(&self, placeholder_id: &str, html: &str) {
        self.diagnostics
            .borrow_mut()
            .push((placeholder_id.to_string(), html.to_string()));
    }
}

// ─── Success path ───────────────────────────────────────────────────────

#[test]
fn run_draws_scene_on_acquired_surface() {
    let host = FakeHost::with_canvas("canvas");
    let graphics = run(&host, &BootConfig::default()).unwrap();

    let calls = graphics.inner().calls();
    assert_eq!(calls.first(), Some(&Call::ClearRect(0.0, 0.0, 600.0, 600.0)));
    assert_eq!(
        calls.last(),
        Some(&Call::StrokeRect(200.0, 200.0, 200.0, 200.0))
    );
    assert!(host.diagnostics.borrow().is_empty());
}

#[test]
fn returned_surface_keeps_extras() {
    let host = FakeHost::with_canvas("canvas");
    let mut graphics = run(&host, &BootConfig::default()).unwrap();
    graphics.inner_mut().clear();

    graphics.stroke_line(0.0, 0.0, 10.0, 0.0);
    assert_eq!(
        graphics.into_inner().calls(),
        vec![
            Call::BeginPath,
            Call::MoveTo(0.0, 0.0),
            Call::LineTo(10.0, 0.0),
            Call::Stroke,
        ]
    );
}

#[test]
fn configured_canvas_id_is_used() {
    let host = FakeHost::with_canvas("main");
    let config = BootConfig {
        canvas_id: "main".into(),
        ..BootConfig::default()
    };
    assert!(run(&host, &config).is_ok());
}

// ─── Failure path ───────────────────────────────────────────────────────

#[test]
fn missing_canvas_shows_diagnostic_and_stops() {
    let host = FakeHost::with_canvas("other");
    let err = run(&host, &BootConfig::default()).unwrap_err();

    assert_eq!(err, SurfaceError::ElementNotFound("canvas".into()));
    assert_eq!(
        host.diagnostics.borrow().as_slice(),
        &[("canvasholder".to_string(), UNSUPPORTED_MESSAGE.to_string())]
    );
}
