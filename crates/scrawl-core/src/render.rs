//! Rendering seam: the backend/surface traits the editor consumes, and the
//! repaint projection.
//!
//! The core owns *when* these collaborators are invoked, never how they
//! render. Backends build the opaque outline handles stored on elements;
//! surfaces paint them.

use crate::shapes::{Element, ElementId};
use kurbo::{BezPath, Point};

/// Produces rendering handles from element geometry. Implementations must
/// be pure functions of their inputs so a handle can be rebuilt
/// deterministically whenever geometry changes.
pub trait RenderBackend {
    /// Outline for a line segment.
    fn line(&self, start: Point, end: Point) -> BezPath;

    /// Outline for the rectangle spanned by two corners, in either order.
    fn rectangle(&self, start: Point, end: Point) -> BezPath;

    /// Filled path around a freehand stroke spine of the given brush width.
    fn stroke_path(&self, points: &[Point], width: f64) -> BezPath;

    /// Measured width of a single line of text at the model's fixed line
    /// height.
    fn text_width(&self, content: &str) -> f64;
}

/// Paints handles onto the drawing surface.
pub trait DrawSurface {
    /// Erase the whole surface ahead of a repaint pass.
    fn clear(&mut self);

    /// Paint one element's outline handle.
    fn paint(&mut self, outline: &BezPath);

    /// Paint a line of text at its anchor.
    fn draw_text(&mut self, content: &str, anchor: Point);
}

/// Repaint the surface from scratch: full clear, then every element in
/// collection order. The element currently being text-edited is skipped;
/// its editing affordance is the host's. No incremental diffing.
pub fn repaint(elements: &[Element], skip: Option<ElementId>, surface: &mut dyn DrawSurface) {
    surface.clear();
    for element in elements {
        if skip == Some(element.id()) {
            continue;
        }
        match element {
            Element::Text(text) => surface.draw_text(&text.content, text.start),
            _ => surface.paint(element.outline()),
        }
    }
}
