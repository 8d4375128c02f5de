//! Wheel-driven surface scale.
//!
//! Scaling is centered on the surface midpoint: the scale offset shifts the
//! painted output so growth is symmetric. Editing-engine tolerances stay in
//! surface pixels regardless of scale.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 10.0;

/// Wheel delta to scale-step conversion factor.
const WHEEL_STEP: f64 = -0.01;

/// View scale state for the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f64,
    pub size: Size,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            size: Size::new(800.0, 600.0),
        }
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    /// Apply a wheel delta, clamped to [`MIN_SCALE`]..[`MAX_SCALE`].
    pub fn zoom(&mut self, wheel_delta: f64) {
        self.scale = (self.scale + wheel_delta * WHEEL_STEP).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Centering offset between the scaled and unscaled surface.
    pub fn scale_offset(&self) -> Vec2 {
        Vec2::new(
            (self.size.width * self.scale - self.size.width) / 2.0,
            (self.size.height * self.scale - self.size.height) / 2.0,
        )
    }

    /// Map a surface-space pointer position into canvas coordinates.
    pub fn to_canvas(&self, position: Point) -> Point {
        let offset = self.scale_offset();
        Point::new(
            (position.x + offset.x) / self.scale,
            (position.y + offset.y) / self.scale,
        )
    }

    /// Transform for hosts painting canvas coordinates onto the surface.
    pub fn paint_transform(&self) -> Affine {
        Affine::translate(-self.scale_offset()) * Affine::scale(self.scale)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_default_scale() {
        let viewport = Viewport::new();
        let p = Point::new(123.0, 456.0);
        assert_eq!(viewport.to_canvas(p), p);
        assert_eq!(viewport.paint_transform() * p, p);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut viewport = Viewport::new();
        viewport.zoom(-5000.0);
        assert_eq!(viewport.scale, MAX_SCALE);
        viewport.zoom(5000.0);
        assert_eq!(viewport.scale, MIN_SCALE);
    }

    #[test]
    fn test_wheel_direction() {
        let mut viewport = Viewport::new();
        // Wheel up (negative delta) zooms in.
        viewport.zoom(-100.0);
        assert!(viewport.scale > 1.0);
        viewport.zoom(100.0);
        assert!((viewport.scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_round_trip() {
        let mut viewport = Viewport::new();
        viewport.zoom(-100.0);
        let canvas = Point::new(321.0, 123.0);
        let surface = viewport.paint_transform() * canvas;
        let back = viewport.to_canvas(surface);
        assert!((back.x - canvas.x).abs() < 1e-9);
        assert!((back.y - canvas.y).abs() < 1e-9);
    }

    #[test]
    fn test_scale_offset_centers() {
        let mut viewport = Viewport::new();
        viewport.set_size(200.0, 100.0);
        viewport.scale = 2.0;
        assert_eq!(viewport.scale_offset(), Vec2::new(100.0, 50.0));
        // The surface midpoint maps to the canvas midpoint.
        let mid = viewport.to_canvas(Point::new(100.0, 50.0));
        assert_eq!(mid, Point::new(100.0, 50.0));
    }
}
