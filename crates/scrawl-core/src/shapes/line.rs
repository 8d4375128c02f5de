//! Line element.

use super::{ElementId, HitPosition};
use crate::geometry::{is_near_position, on_line};
use crate::render::RenderBackend;
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// A straight line segment between two points. `end` is unconstrained while
/// the element is being edited; [`Line::normalized`] restores canonical
/// endpoint order on commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: ElementId,
    pub start: Point,
    pub end: Point,
    /// Rendering handle, rebuilt from the endpoints on every change.
    pub outline: BezPath,
}

impl Line {
    /// Create a line and its rendering handle.
    pub fn new(id: ElementId, start: Point, end: Point, backend: &dyn RenderBackend) -> Self {
        Self {
            id,
            start,
            end,
            outline: backend.line(start, end),
        }
    }

    /// Endpoint checks take priority over the segment body.
    pub fn hit_test(&self, point: Point) -> Option<HitPosition> {
        if is_near_position(point, self.start) {
            Some(HitPosition::Start)
        } else if is_near_position(point, self.end) {
            Some(HitPosition::End)
        } else if on_line(self.start, self.end, point) {
            Some(HitPosition::Inside)
        } else {
            None
        }
    }

    /// Reorder the endpoints so `start` precedes `end` by x, then by y on
    /// ties. Idempotent.
    pub fn normalized(&self, backend: &dyn RenderBackend) -> Self {
        let ordered = self.start.x < self.end.x
            || (self.start.x == self.end.x && self.start.y <= self.end.y);
        if ordered {
            self.clone()
        } else {
            Self::new(self.id, self.end, self.start, backend)
        }
    }
}
