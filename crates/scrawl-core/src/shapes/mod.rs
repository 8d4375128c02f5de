//! Element definitions for the whiteboard.

mod freehand;
mod line;
mod rectangle;
mod text;

pub use freehand::{Freehand, BRUSH_WIDTH, STROKE_TOLERANCE};
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::{Text, LINE_HEIGHT};

use crate::render::RenderBackend;
use crate::tools::Tool;
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of an element: its index in the active collection at creation
/// time. Mutations preserve id and position.
pub type ElementId = usize;

/// Faults in the element model. Both variants are programming errors; the
/// host UI never produces them under normal constraints.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("no element variant for tool {0:?}")]
    UnknownElementType(Tool),
    #[error("{0:?} is not a resize handle")]
    InvalidHandle(HitPosition),
}

/// The zone of an element that a pointer coordinate resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitPosition {
    Inside,
    Start,
    End,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Pointer affordance shown over an element zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorIcon {
    #[default]
    Default,
    Move,
    /// Diagonal resize, north-west to south-east.
    NwseResize,
    /// Diagonal resize, north-east to south-west.
    NeswResize,
}

/// Map a hit position to its cursor affordance.
pub fn cursor_for_hit(position: HitPosition) -> CursorIcon {
    match position {
        HitPosition::Inside => CursorIcon::Move,
        HitPosition::Start
        | HitPosition::End
        | HitPosition::TopLeft
        | HitPosition::BottomRight => CursorIcon::NwseResize,
        HitPosition::TopRight | HitPosition::BottomLeft => CursorIcon::NeswResize,
    }
}

/// Substitute the dragged corner/endpoint with the pointer position.
///
/// `TopLeft`/`Start` replace `start`, `BottomRight`/`End` replace `end`;
/// the mixed corners update one axis of each point. `Inside` (or any other
/// non-resize zone) is a state-machine mismatch and fails.
pub fn resize_from_handle(
    pointer: Point,
    start: Point,
    end: Point,
    handle: HitPosition,
) -> Result<(Point, Point), ShapeError> {
    match handle {
        HitPosition::TopLeft | HitPosition::Start => Ok((pointer, end)),
        HitPosition::BottomRight | HitPosition::End => Ok((start, pointer)),
        HitPosition::TopRight => Ok((
            Point::new(start.x, pointer.y),
            Point::new(pointer.x, end.y),
        )),
        HitPosition::BottomLeft => Ok((
            Point::new(pointer.x, start.y),
            Point::new(end.x, pointer.y),
        )),
        HitPosition::Inside => Err(ShapeError::InvalidHandle(handle)),
    }
}

/// A drawable element. Each variant owns its geometry plus the rendering
/// handle built from it by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Line(Line),
    Rectangle(Rectangle),
    Freehand(Freehand),
    Text(Text),
}

impl Element {
    /// Build a new element for a creation tool at the given geometry.
    ///
    /// Freehand ignores `end` and seeds its path with `start`; text starts
    /// with empty content measured from `start`. [`Tool::Selection`] creates
    /// nothing and faults.
    pub fn create(
        id: ElementId,
        start: Point,
        end: Point,
        tool: Tool,
        backend: &dyn RenderBackend,
    ) -> Result<Self, ShapeError> {
        match tool {
            Tool::Line => Ok(Element::Line(Line::new(id, start, end, backend))),
            Tool::Rectangle => Ok(Element::Rectangle(Rectangle::new(id, start, end, backend))),
            Tool::Pencil => Ok(Element::Freehand(Freehand::begin(id, start, backend))),
            Tool::Text => Ok(Element::Text(Text::new(id, start, String::new(), backend))),
            Tool::Selection => Err(ShapeError::UnknownElementType(tool)),
        }
    }

    pub fn id(&self) -> ElementId {
        match self {
            Element::Line(e) => e.id,
            Element::Rectangle(e) => e.id,
            Element::Freehand(e) => e.id,
            Element::Text(e) => e.id,
        }
    }

    /// The backend-built rendering handle. Empty for text, which is painted
    /// through the surface's text primitive instead.
    pub fn outline(&self) -> &BezPath {
        match self {
            Element::Line(e) => &e.outline,
            Element::Rectangle(e) => &e.outline,
            Element::Freehand(e) => &e.outline,
            Element::Text(e) => &e.outline,
        }
    }

    /// Resolve the pointer position against this element.
    pub fn hit_test(&self, point: Point) -> Option<HitPosition> {
        match self {
            Element::Line(e) => e.hit_test(point),
            Element::Rectangle(e) => e.hit_test(point),
            Element::Freehand(e) => e.hit_test(point),
            Element::Text(e) => e.hit_test(point),
        }
    }

    /// Canonical corner order for lines and rectangles; identity otherwise.
    /// Idempotent.
    pub fn normalized(&self, backend: &dyn RenderBackend) -> Self {
        match self {
            Element::Line(e) => Element::Line(e.normalized(backend)),
            Element::Rectangle(e) => Element::Rectangle(e.normalized(backend)),
            Element::Freehand(_) | Element::Text(_) => self.clone(),
        }
    }
}
