//! Shared test doubles for the rendering seam.

use crate::render::{DrawSurface, RenderBackend};
use kurbo::{BezPath, Point, Rect, Shape};

/// Deterministic backend for unit tests: straight outlines, polyline stroke
/// paths, fixed-advance text measurement.
pub struct StubBackend;

impl RenderBackend for StubBackend {
    fn line(&self, start: Point, end: Point) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(start);
        path.line_to(end);
        path
    }

    fn rectangle(&self, start: Point, end: Point) -> BezPath {
        Rect::from_points(start, end).to_path(0.1)
    }

    fn stroke_path(&self, points: &[Point], _width: f64) -> BezPath {
        let mut path = BezPath::new();
        if let Some((&first, rest)) = points.split_first() {
            path.move_to(first);
            for &point in rest {
                path.line_to(point);
            }
        }
        path
    }

    fn text_width(&self, content: &str) -> f64 {
        content.chars().count() as f64 * 12.0
    }
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Clear,
    Outline(BezPath),
    Text { content: String, anchor: Point },
}

/// Surface that records its calls in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<PaintOp>,
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(PaintOp::Clear);
    }

    fn paint(&mut self, outline: &BezPath) {
        self.ops.push(PaintOp::Outline(outline.clone()));
    }

    fn draw_text(&mut self, content: &str, anchor: Point) {
        self.ops.push(PaintOp::Text {
            content: content.to_owned(),
            anchor,
        });
    }
}
