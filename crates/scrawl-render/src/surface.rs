//! In-memory drawing surface.

use kurbo::{BezPath, Point};
use scrawl_core::DrawSurface;

/// One recorded surface call, in the order the render reaction issued it.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Clear,
    Outline(BezPath),
    Text { content: String, anchor: Point },
}

/// Surface that records paint calls instead of rasterizing them. Used by
/// headless hosts and tests to observe exactly what a repaint pass painted.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<PaintOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since the last clear.
    pub fn frame(&self) -> &[PaintOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, PaintOp::Clear))
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.ops[start..]
    }
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
