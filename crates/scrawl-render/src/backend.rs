//! Deterministic outline backend.

use kurbo::{BezPath, Point, Rect, Shape, Vec2};
use scrawl_core::RenderBackend;

/// Fixed glyph advance in surface pixels, half the model's line height.
pub const GLYPH_ADVANCE: f64 = 12.0;

/// Backend that builds clean, straight outlines. Every handle is a pure
/// function of the geometry passed in, so rebuilding after a mutation
/// always yields the same path.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackend;

impl RenderBackend for PlainBackend {
    fn line(&self, start: Point, end: Point) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(start);
        path.line_to(end);
        path
    }

    fn rectangle(&self, start: Point, end: Point) -> BezPath {
        Rect::from_points(start, end).to_path(0.1)
    }

    fn stroke_path(&self, points: &[Point], width: f64) -> BezPath {
        let half = width / 2.0;
        match points {
            [] => BezPath::new(),
            // A stationary tap paints a diamond of the brush width.
            [point] => {
                let mut path = BezPath::new();
                path.move_to(Point::new(point.x - half, point.y));
                path.line_to(Point::new(point.x, point.y - half));
                path.line_to(Point::new(point.x + half, point.y));
                path.line_to(Point::new(point.x, point.y + half));
                path.close_path();
                path
            }
            _ => ribbon(points, half),
        }
    }

    fn text_width(&self, content: &str) -> f64 {
        content.chars().count() as f64 * GLYPH_ADVANCE
    }
}

/// Closed polygon around a stroke spine: each sample is pushed out along
/// its normal on both sides, then the two rails are joined end to end.
fn ribbon(points: &[Point], half: f64) -> BezPath {
    let mut left = Vec::with_capacity(points.len());
    let mut right = Vec::with_capacity(points.len());

    for (i, &point) in points.iter().enumerate() {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(points.len() - 1)];
        let direction = next - prev;
        let length = direction.hypot();
        let normal = if length < f64::EPSILON {
            Vec2::new(0.0, 1.0)
        } else {
            Vec2::new(-direction.y / length, direction.x / length)
        };
        left.push(point + normal * half);
        right.push(point - normal * half);
    }

    let mut path = BezPath::new();
    path.move_to(left[0]);
    for &point in &left[1..] {
        path.line_to(point);
    }
    for &point in right.iter().rev() {
        path.line_to(point);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_handles_are_deterministic() {
        let backend = PlainBackend;
        let start = Point::new(10.0, 10.0);
        let end = Point::new(50.0, 40.0);

        assert_eq!(backend.line(start, end), backend.line(start, end));
        assert_eq!(backend.rectangle(start, end), backend.rectangle(start, end));

        let points = [start, Point::new(30.0, 20.0), end];
        assert_eq!(
            backend.stroke_path(&points, 12.0),
            backend.stroke_path(&points, 12.0)
        );
    }

    #[test]
    fn test_line_path() {
        let path = PlainBackend.line(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let elements: Vec<PathEl> = path.elements().to_vec();
        assert_eq!(
            elements,
            vec![
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn test_rectangle_corner_order_is_irrelevant() {
        let backend = PlainBackend;
        let a = backend.rectangle(Point::new(10.0, 10.0), Point::new(50.0, 40.0));
        let b = backend.rectangle(Point::new(50.0, 40.0), Point::new(10.0, 10.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ribbon_offsets_by_half_width() {
        let points = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let path = PlainBackend.stroke_path(&points, 4.0);
        let ys: Vec<f64> = path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p.y),
                _ => None,
            })
            .collect();
        // Horizontal spine: both rails sit exactly half the width away.
        assert!(ys.iter().all(|y| (y.abs() - 2.0).abs() < 1e-9));
    }

    #[test]
    fn test_single_point_stroke_is_closed() {
        let path = PlainBackend.stroke_path(&[Point::new(5.0, 5.0)], 4.0);
        assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
    }

    #[test]
    fn test_text_width_fixed_advance() {
        let backend = PlainBackend;
        assert_eq!(backend.text_width(""), 0.0);
        assert_eq!(backend.text_width("hello"), 5.0 * GLYPH_ADVANCE);
    }
}
