//! Text element.

use super::{ElementId, HitPosition};
use crate::geometry::point_in_bounding_box;
use crate::render::RenderBackend;
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// Fixed line height of text elements in surface pixels.
pub const LINE_HEIGHT: f64 = 24.0;

/// A single line of text anchored at `start`. `end` is derived from the
/// measured content width and [`LINE_HEIGHT`], never set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub id: ElementId,
    pub start: Point,
    pub end: Point,
    pub content: String,
    /// Rendering handle. Text is painted through the surface's text
    /// primitive, so the handle stays empty.
    pub outline: BezPath,
}

impl Text {
    /// Create a text element, measuring its extent from the content.
    pub fn new(id: ElementId, start: Point, content: String, backend: &dyn RenderBackend) -> Self {
        let end = Point::new(start.x + backend.text_width(&content), start.y + LINE_HEIGHT);
        Self {
            id,
            start,
            end,
            content,
            outline: BezPath::new(),
        }
    }

    /// Move the anchor, keeping the content.
    pub fn relocated(&self, start: Point, backend: &dyn RenderBackend) -> Self {
        Self::new(self.id, start, self.content.clone(), backend)
    }

    /// Replace the content, re-measuring the extent from the anchor.
    pub fn with_content(&self, content: &str, backend: &dyn RenderBackend) -> Self {
        Self::new(self.id, self.start, content.to_owned(), backend)
    }

    /// Text is hit anywhere in its measured box; there are no corner
    /// handles.
    pub fn hit_test(&self, point: Point) -> Option<HitPosition> {
        point_in_bounding_box(point, self.start, self.end).then_some(HitPosition::Inside)
    }
}
