//! Selection-transient state.
//!
//! Everything here lives only while an element is the active selection. It
//! is never written into history snapshots, which keeps the persisted
//! element collection free of drag bookkeeping.

use crate::shapes::{Element, ElementId, HitPosition};
use kurbo::{Point, Vec2};

/// How the pointer grabbed the selected element.
#[derive(Debug, Clone, PartialEq)]
pub enum Grip {
    /// Pointer-to-anchor offset, for elements dragged by their `start`.
    Offset(Vec2),
    /// One offset per stroke point, for freehand drags.
    PointOffsets(Vec<Vec2>),
}

/// Reference to the selected element plus the working state of the grab.
/// The element itself stays owned by the history; `id` is re-read from the
/// current snapshot on every use.
#[derive(Debug, Clone, PartialEq)]
pub struct Selected {
    pub id: ElementId,
    /// Hit position resolved by the last hit test.
    pub hit: HitPosition,
    pub grip: Grip,
}

impl Selected {
    /// Capture the grab state for `element` under the pointer.
    pub fn grab(element: &Element, hit: HitPosition, pointer: Point) -> Self {
        let grip = match element {
            Element::Line(line) => Grip::Offset(pointer - line.start),
            Element::Rectangle(rect) => Grip::Offset(pointer - rect.start),
            Element::Text(text) => Grip::Offset(pointer - text.start),
            Element::Freehand(stroke) => {
                Grip::PointOffsets(stroke.points.iter().map(|&p| pointer - p).collect())
            }
        };
        Self {
            id: element.id(),
            hit,
            grip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Freehand, Line};
    use crate::testing::StubBackend;

    #[test]
    fn test_grab_anchor_offset() {
        let backend = StubBackend;
        let line = Element::Line(Line::new(
            3,
            Point::new(10.0, 10.0),
            Point::new(50.0, 40.0),
            &backend,
        ));
        let selected = Selected::grab(&line, HitPosition::Inside, Point::new(25.0, 20.0));

        assert_eq!(selected.id, 3);
        assert_eq!(selected.hit, HitPosition::Inside);
        assert_eq!(selected.grip, Grip::Offset(Vec2::new(15.0, 10.0)));
    }

    #[test]
    fn test_grab_per_point_offsets() {
        let backend = StubBackend;
        let mut stroke = Freehand::begin(0, Point::new(0.0, 0.0), &backend);
        stroke.push_point(Point::new(10.0, 0.0), &backend);
        stroke.push_point(Point::new(20.0, 10.0), &backend);

        let selected = Selected::grab(
            &Element::Freehand(stroke),
            HitPosition::Inside,
            Point::new(5.0, 5.0),
        );
        assert_eq!(
            selected.grip,
            Grip::PointOffsets(vec![
                Vec2::new(5.0, 5.0),
                Vec2::new(-5.0, 5.0),
                Vec2::new(-15.0, -5.0),
            ])
        );
    }
}
