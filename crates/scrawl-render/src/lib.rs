//! Reference renderer for the Scrawl whiteboard.
//!
//! Implements the core's rendering seam with deterministic, dependency-free
//! collaborators: [`PlainBackend`] builds straight outline handles and
//! [`RecordingSurface`] captures paint calls in order. Production hosts
//! swap in their own backend (e.g. a hand-drawn-style outline generator)
//! and a real painting surface.

mod backend;
mod surface;

pub use backend::{PlainBackend, GLYPH_ADVANCE};
pub use surface::{PaintOp, RecordingSurface};
