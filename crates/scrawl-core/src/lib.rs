//! Scrawl Core Library
//!
//! Platform-agnostic editing engine for the Scrawl whiteboard: the element
//! model, geometric hit-testing, the undo/redo history and the pointer
//! interaction state machine. Rendering backends and drawing surfaces are
//! consumed through the traits in [`render`]; this crate owns when they are
//! invoked, never how they paint.

pub mod editor;
pub mod geometry;
pub mod history;
pub mod input;
pub mod render;
pub mod selection;
pub mod shapes;
pub mod tools;
pub mod viewport;

#[cfg(test)]
pub(crate) mod testing;

pub use editor::{Action, Editor};
pub use history::{History, Snapshot};
pub use input::{history_shortcut, HistoryOp, Modifiers, PointerEvent};
pub use render::{repaint, DrawSurface, RenderBackend};
pub use selection::{Grip, Selected};
pub use shapes::{
    cursor_for_hit, resize_from_handle, CursorIcon, Element, ElementId, Freehand, HitPosition,
    Line, Rectangle, ShapeError, Text,
};
pub use tools::Tool;
pub use viewport::Viewport;
