//! Freehand stroke element.

use super::{ElementId, HitPosition};
use crate::geometry::on_line_with_tolerance;
use crate::render::RenderBackend;
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// Brush width passed to the backend when building the stroke path.
pub const BRUSH_WIDTH: f64 = 12.0;

/// Hit tolerance around the stroke spine in surface pixels.
pub const STROKE_TOLERANCE: f64 = 5.0;

/// A freehand stroke: the ordered pointer samples of one drag. Never empty
/// after creation; points are append-only while drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    pub id: ElementId,
    pub points: Vec<Point>,
    /// Rendering handle, rebuilt from the points on every change.
    pub outline: BezPath,
}

impl Freehand {
    /// Start a stroke at the pointer-down position.
    pub fn begin(id: ElementId, origin: Point, backend: &dyn RenderBackend) -> Self {
        let points = vec![origin];
        let outline = backend.stroke_path(&points, BRUSH_WIDTH);
        Self { id, points, outline }
    }

    /// Append one pointer-move sample.
    pub fn push_point(&mut self, point: Point, backend: &dyn RenderBackend) {
        self.points.push(point);
        self.outline = backend.stroke_path(&self.points, BRUSH_WIDTH);
    }

    /// Replace every point, keeping the sample count. Used when dragging the
    /// whole stroke by a uniform per-point offset.
    pub fn set_points(&mut self, points: Vec<Point>, backend: &dyn RenderBackend) {
        debug_assert_eq!(points.len(), self.points.len());
        debug_assert!(!points.is_empty());
        self.points = points;
        self.outline = backend.stroke_path(&self.points, BRUSH_WIDTH);
    }

    /// A stroke is hit anywhere along its spine; there are no corner
    /// handles. Consecutive sample pairs are checked in order, first match
    /// wins.
    pub fn hit_test(&self, point: Point) -> Option<HitPosition> {
        self.points
            .windows(2)
            .any(|pair| on_line_with_tolerance(pair[0], pair[1], point, STROKE_TOLERANCE))
            .then_some(HitPosition::Inside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubBackend;

    #[test]
    fn test_begin_seeds_one_point() {
        let backend = StubBackend;
        let stroke = Freehand::begin(0, Point::new(5.0, 5.0), &backend);
        assert_eq!(stroke.points, vec![Point::new(5.0, 5.0)]);
    }

    #[test]
    fn test_push_point_appends() {
        let backend = StubBackend;
        let mut stroke = Freehand::begin(0, Point::new(0.0, 0.0), &backend);
        stroke.push_point(Point::new(10.0, 0.0), &backend);
        stroke.push_point(Point::new(20.0, 5.0), &backend);
        assert_eq!(stroke.points.len(), 3);
        assert_eq!(stroke.points[2], Point::new(20.0, 5.0));
    }

    #[test]
    fn test_hit_test_along_spine() {
        let backend = StubBackend;
        let mut stroke = Freehand::begin(0, Point::new(0.0, 0.0), &backend);
        stroke.push_point(Point::new(50.0, 0.0), &backend);
        stroke.push_point(Point::new(50.0, 50.0), &backend);

        assert_eq!(stroke.hit_test(Point::new(25.0, 0.0)), Some(HitPosition::Inside));
        assert_eq!(stroke.hit_test(Point::new(50.0, 25.0)), Some(HitPosition::Inside));
        assert_eq!(stroke.hit_test(Point::new(25.0, 25.0)), None);
    }

    #[test]
    fn test_single_point_has_no_segment() {
        let backend = StubBackend;
        let stroke = Freehand::begin(0, Point::new(10.0, 10.0), &backend);
        assert_eq!(stroke.hit_test(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_set_points_rebuilds_outline() {
        let backend = StubBackend;
        let mut stroke = Freehand::begin(0, Point::new(0.0, 0.0), &backend);
        stroke.push_point(Point::new(10.0, 0.0), &backend);
        let before = stroke.outline.clone();

        stroke.set_points(vec![Point::new(5.0, 5.0), Point::new(15.0, 5.0)], &backend);
        assert_ne!(stroke.outline, before);
    }
}
