//! The current path, kept in device space.
//!
//! Points arrive already mapped through the transform that was current
//! when they were added, so a later `restore` does not move them.

use kurbo::{BezPath, PathEl, Point};
use std::f64::consts::TAU;
use tiny_skia::PathBuilder;

#[derive(Debug, Default, Clone)]
pub(crate) struct CurrentPath {
    bez: BezPath,
    subpath_start: Option<Point>,
    last: Option<Point>,
    /// Set after `close`: the next segment reopens at `subpath_start`.
    needs_move: bool,
}

impl CurrentPath {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn move_to(&mut self, p: Point) {
        self.bez.move_to(p);
        self.subpath_start = Some(p);
        self.last = Some(p);
        self.needs_move = false;
    }

    /// Line to `p`; with no subpath this starts one at `p` instead.
    pub fn line_to(&mut self, p: Point) {
        if !self.ensure_subpath(p) {
            return;
        }
        self.bez.line_to(p);
        self.last = Some(p);
    }

    pub fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        if !self.ensure_subpath(c1) {
            return;
        }
        self.bez.curve_to(c1, c2, p);
        self.last = Some(p);
    }

    pub fn close(&mut self) {
        if self.last.is_none() || self.needs_move {
            return;
        }
        self.bez.close_path();
        self.last = self.subpath_start;
        self.needs_move = true;
    }

    /// Returns `false` when `first` was consumed as the subpath start.
    fn ensure_subpath(&mut self, first: Point) -> bool {
        match self.subpath_start {
            None => {
                self.move_to(first);
                false
            }
            Some(start) if self.needs_move => {
                self.bez.move_to(start);
                self.needs_move = false;
                true
            }
            Some(_) => true,
        }
    }

    pub fn bez(&self) -> &BezPath {
        &self.bez
    }

    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        to_skia(&self.bez)
    }
}

pub(crate) fn to_skia(bez: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in bez.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

/// Rectangle as a closed path in the given coordinate space.
pub(crate) fn rect_path(x: f64, y: f64, w: f64, h: f64) -> Option<tiny_skia::Path> {
    let (x, y, w, h) = (x as f32, y as f32, w as f32, h as f32);
    let mut pb = PathBuilder::new();
    pb.move_to(x, y);
    pb.line_to(x + w, y);
    pb.line_to(x + w, y + h);
    pb.line_to(x, y + h);
    pb.close();
    pb.finish()
}

/// Signed sweep of a canvas `arc` call.
///
/// A span of a full turn or more in the drawing direction is a full circle;
/// anything else is reduced modulo 2π in that direction.
pub(crate) fn arc_sweep(start: f64, end: f64, anticlockwise: bool) -> f64 {
    if anticlockwise {
        if start - end >= TAU {
            -TAU
        } else {
            -(start - end).rem_euclid(TAU)
        }
    } else if end - start >= TAU {
        TAU
    } else {
        (end - start).rem_euclid(TAU)
    }
}
