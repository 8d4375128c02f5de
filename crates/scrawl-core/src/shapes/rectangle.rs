//! Rectangle element.

use super::{ElementId, HitPosition};
use crate::geometry::{is_near_position, point_in_bounding_box};
use crate::render::RenderBackend;
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle spanned by two corners. The corners stay in
/// drag order during editing; [`Rectangle::normalized`] pins `start` to the
/// top-left on commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: ElementId,
    pub start: Point,
    pub end: Point,
    /// Rendering handle, rebuilt from the corners on every change.
    pub outline: BezPath,
}

impl Rectangle {
    /// Create a rectangle and its rendering handle.
    pub fn new(id: ElementId, start: Point, end: Point, backend: &dyn RenderBackend) -> Self {
        Self {
            id,
            start,
            end,
            outline: backend.rectangle(start, end),
        }
    }

    /// Corner checks run first, in a fixed priority order, then the body.
    pub fn hit_test(&self, point: Point) -> Option<HitPosition> {
        let top_left = Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y));
        let bottom_right = Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y));
        let top_right = Point::new(bottom_right.x, top_left.y);
        let bottom_left = Point::new(top_left.x, bottom_right.y);

        if is_near_position(point, top_left) {
            Some(HitPosition::TopLeft)
        } else if is_near_position(point, top_right) {
            Some(HitPosition::TopRight)
        } else if is_near_position(point, bottom_left) {
            Some(HitPosition::BottomLeft)
        } else if is_near_position(point, bottom_right) {
            Some(HitPosition::BottomRight)
        } else if point_in_bounding_box(point, self.start, self.end) {
            Some(HitPosition::Inside)
        } else {
            None
        }
    }

    /// Reorder the corners to `{min,min}`/`{max,max}`. Idempotent.
    pub fn normalized(&self, backend: &dyn RenderBackend) -> Self {
        let min = Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y));
        let max = Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y));
        if min == self.start && max == self.end {
            self.clone()
        } else {
            Self::new(self.id, min, max, backend)
        }
    }
}
