//! Pure geometry helpers used by hit-testing.

use kurbo::Point;

/// Corner/endpoint hit tolerance in surface pixels, independent of zoom.
pub const NEAR_TOLERANCE: f64 = 5.0;

/// Segment hit tolerance in surface pixels.
pub const LINE_TOLERANCE: f64 = 3.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Whether two positions coincide within [`NEAR_TOLERANCE`] on both axes.
pub fn is_near_position(p: Point, q: Point) -> bool {
    (p.x - q.x).abs() < NEAR_TOLERANCE && (p.y - q.y).abs() < NEAR_TOLERANCE
}

/// Whether `point` lies on the segment `start`..`end`, within [`LINE_TOLERANCE`].
pub fn on_line(start: Point, end: Point, point: Point) -> bool {
    on_line_with_tolerance(start, end, point, LINE_TOLERANCE)
}

/// Segment membership via triangle-inequality slack: a point on the segment
/// splits it into two sub-lengths that sum back to the full length. No
/// perpendicular-projection clamp is needed.
pub fn on_line_with_tolerance(start: Point, end: Point, point: Point, tolerance: f64) -> bool {
    let slack = distance(start, end) - distance(start, point) - distance(end, point);
    slack.abs() < tolerance
}

/// Axis-aligned containment test against the box spanned by two corners,
/// in either order.
pub fn point_in_bounding_box(point: Point, corner1: Point, corner2: Point) -> bool {
    let min_x = corner1.x.min(corner2.x);
    let max_x = corner1.x.max(corner2.x);
    let min_y = corner1.y.min(corner2.y);
    let max_y = corner1.y.max(corner2.y);
    point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
}
