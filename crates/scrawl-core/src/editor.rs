//! Pointer interaction state machine.
//!
//! All mutation happens synchronously inside the event handlers; the
//! history is the only mutable resource. A discrete action (one drag, one
//! draw, one text edit) opens a single appended history entry on
//! pointer-down and refines it with overwrites until release.

use crate::history::History;
use crate::input::{history_shortcut, HistoryOp, Modifiers, PointerEvent};
use crate::render::{repaint, DrawSurface, RenderBackend};
use crate::selection::{Grip, Selected};
use crate::shapes::{
    cursor_for_hit, resize_from_handle, CursorIcon, Element, ElementId, HitPosition, Line,
    Rectangle, ShapeError,
};
use crate::tools::Tool;
use crate::viewport::Viewport;
use kurbo::Point;
use log::debug;

/// Phase of the in-progress interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Default,
    Drawing,
    Moving,
    Resizing,
    Writing,
}

/// The whiteboard editor: element history, active tool, interaction state
/// and the rendering backend that builds element handles.
pub struct Editor {
    backend: Box<dyn RenderBackend>,
    history: History,
    tool: Tool,
    action: Action,
    selected: Option<Selected>,
    cursor: CursorIcon,
    viewport: Viewport,
    /// Pointer-down position of the current press, for click-to-edit
    /// detection.
    press: Option<Point>,
}

impl Editor {
    /// Create an editor over an empty collection.
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        Self::with_elements(backend, Vec::new())
    }

    /// Create an editor seeded with an existing collection. Element ids
    /// must equal their collection index.
    pub fn with_elements(backend: Box<dyn RenderBackend>, elements: Vec<Element>) -> Self {
        debug_assert!(elements.iter().enumerate().all(|(i, e)| e.id() == i));
        Self {
            backend,
            history: History::new(elements),
            tool: Tool::default(),
            action: Action::default(),
            selected: None,
            cursor: CursorIcon::default(),
            viewport: Viewport::new(),
            press: None,
        }
    }

    /// The current element collection.
    pub fn elements(&self) -> &[Element] {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Cursor affordance for the host to apply to the surface.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Switch the active tool, ending any interaction in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        debug!("tool -> {tool:?}");
        self.tool = tool;
        self.action = Action::Default;
        self.selected = None;
        self.cursor = CursorIcon::Default;
        self.press = None;
    }

    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport.set_size(width, height);
    }

    /// Apply a wheel delta to the surface scale.
    pub fn zoom(&mut self, wheel_delta: f64) {
        self.viewport.zoom(wheel_delta);
    }

    /// Forward a unified pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<(), ShapeError> {
        match event {
            PointerEvent::Down(position) => self.pointer_down(position),
            PointerEvent::Move(position) => self.pointer_move(position),
            PointerEvent::Up(position) => {
                self.pointer_up(position);
                Ok(())
            }
        }
    }

    /// Begin an interaction: select-and-grab with the selection tool, or
    /// create a zero-size element with a creation tool.
    pub fn pointer_down(&mut self, position: Point) -> Result<(), ShapeError> {
        let position = self.viewport.to_canvas(position);
        self.press = Some(position);
        match self.tool {
            Tool::Selection => {
                let Some((id, hit)) = self.hit_any(position) else {
                    return Ok(());
                };
                let selected = Selected::grab(&self.history.current()[id], hit, position);
                // Re-assert the unchanged collection: the drag that follows
                // overwrites this entry, so a single undo returns here.
                self.history.commit_with(|current| current.to_vec(), false);
                self.action = if hit == HitPosition::Inside {
                    Action::Moving
                } else {
                    Action::Resizing
                };
                self.selected = Some(selected);
                debug!("grab element {id} at {hit:?} -> {:?}", self.action);
            }
            tool => {
                let id = self.history.current().len();
                let element = Element::create(id, position, position, tool, self.backend.as_ref())?;
                let selected = Selected::grab(&element, HitPosition::Inside, position);
                let mut next = self.history.current().to_vec();
                next.push(element);
                self.history.commit(next, false);
                self.selected = Some(selected);
                self.action = if tool == Tool::Text {
                    Action::Writing
                } else {
                    Action::Drawing
                };
                debug!("create element {id} with {tool:?} -> {:?}", self.action);
            }
        }
        Ok(())
    }

    /// Refine the interaction in progress. Every refinement is an overwrite
    /// commit; with nothing selected the refinement states degrade to
    /// no-ops.
    pub fn pointer_move(&mut self, position: Point) -> Result<(), ShapeError> {
        let position = self.viewport.to_canvas(position);
        if self.tool == Tool::Selection {
            self.cursor = match self.hit_any(position) {
                Some((_, hit)) => cursor_for_hit(hit),
                None => CursorIcon::Default,
            };
        }
        match self.action {
            Action::Drawing => self.extend_drawing(position),
            Action::Moving => self.move_selected(position),
            Action::Resizing => self.resize_selected(position)?,
            Action::Default | Action::Writing => {}
        }
        Ok(())
    }

    /// End the interaction. Lines and rectangles that were drawn or resized
    /// are committed with canonical corner order; releasing on a text
    /// element without net movement switches to writing instead.
    pub fn pointer_up(&mut self, position: Point) {
        let position = self.viewport.to_canvas(position);
        let pressed = self.press.take();

        if let Some(selected) = &self.selected {
            if pressed == Some(position)
                && matches!(self.history.current().get(selected.id), Some(Element::Text(_)))
            {
                self.action = Action::Writing;
                debug!("click-to-edit element {}", selected.id);
                return;
            }
        }

        if matches!(self.action, Action::Drawing | Action::Resizing) {
            if let Some(selected) = &self.selected {
                if let Some(element) = self.history.current().get(selected.id) {
                    if matches!(element, Element::Line(_) | Element::Rectangle(_)) {
                        let normalized = element.normalized(self.backend.as_ref());
                        let mut next = self.history.current().to_vec();
                        next[selected.id] = normalized;
                        self.history.commit(next, true);
                    }
                }
            }
        }

        self.action = Action::Default;
        self.selected = None;
        self.cursor = CursorIcon::Default;
    }

    /// Commit the edited text on focus loss while writing.
    pub fn commit_text(&mut self, content: &str) {
        if self.action != Action::Writing {
            return;
        }
        if let Some(selected) = self.selected.take() {
            let backend = self.backend.as_ref();
            let mut next = self.history.current().to_vec();
            if let Some(Element::Text(text)) = next.get_mut(selected.id) {
                *text = text.with_content(content, backend);
                self.history.commit(next, true);
                debug!("commit text on element {}", selected.id);
            }
        }
        self.action = Action::Default;
        self.cursor = CursorIcon::Default;
        self.press = None;
    }

    /// Decode and apply undo/redo chords; other keys are ignored.
    pub fn key_pressed(&mut self, key: &str, modifiers: Modifiers) {
        match history_shortcut(key, modifiers) {
            Some(HistoryOp::Undo) => self.undo(),
            Some(HistoryOp::Redo) => self.redo(),
            None => {}
        }
    }

    pub fn undo(&mut self) {
        debug!("undo");
        self.history.undo();
    }

    pub fn redo(&mut self) {
        debug!("redo");
        self.history.redo();
    }

    /// Replace the collection with an empty one, as a new undo step.
    pub fn clear_all(&mut self) {
        debug!("clear all");
        self.history.commit(Vec::new(), false);
        self.selected = None;
        self.action = Action::Default;
        self.cursor = CursorIcon::Default;
    }

    /// Repaint the surface from the current snapshot.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let skip = match (&self.action, &self.selected) {
            (Action::Writing, Some(selected)) => Some(selected.id),
            _ => None,
        };
        repaint(self.history.current(), skip, surface);
    }

    /// Hit-test the collection in creation order; first hit wins.
    fn hit_any(&self, position: Point) -> Option<(ElementId, HitPosition)> {
        self.history
            .current()
            .iter()
            .enumerate()
            .find_map(|(id, element)| element.hit_test(position).map(|hit| (id, hit)))
    }

    fn extend_drawing(&mut self, position: Point) {
        let backend = self.backend.as_ref();
        let mut next = self.history.current().to_vec();
        let Some(element) = next.last_mut() else {
            return;
        };
        match element {
            Element::Line(line) => *line = Line::new(line.id, line.start, position, backend),
            Element::Rectangle(rect) => {
                *rect = Rectangle::new(rect.id, rect.start, position, backend)
            }
            Element::Freehand(stroke) => stroke.push_point(position, backend),
            Element::Text(_) => return,
        }
        self.history.commit(next, true);
    }

    fn move_selected(&mut self, position: Point) {
        let Some(selected) = self.selected.clone() else {
            return;
        };
        let backend = self.backend.as_ref();
        let mut next = self.history.current().to_vec();
        let Some(element) = next.get_mut(selected.id) else {
            return;
        };
        match (element, &selected.grip) {
            (Element::Line(line), Grip::Offset(offset)) => {
                let extent = line.end - line.start;
                let start = position - *offset;
                *line = Line::new(line.id, start, start + extent, backend);
            }
            (Element::Rectangle(rect), Grip::Offset(offset)) => {
                let extent = rect.end - rect.start;
                let start = position - *offset;
                *rect = Rectangle::new(rect.id, start, start + extent, backend);
            }
            (Element::Text(text), Grip::Offset(offset)) => {
                *text = text.relocated(position - *offset, backend);
            }
            (Element::Freehand(stroke), Grip::PointOffsets(offsets))
                if offsets.len() == stroke.points.len() =>
            {
                let points = offsets.iter().map(|&offset| position - offset).collect();
                stroke.set_points(points, backend);
            }
            _ => return,
        }
        self.history.commit(next, true);
    }

    fn resize_selected(&mut self, position: Point) -> Result<(), ShapeError> {
        let Some(selected) = self.selected.clone() else {
            return Ok(());
        };
        let backend = self.backend.as_ref();
        let mut next = self.history.current().to_vec();
        let Some(element) = next.get_mut(selected.id) else {
            return Ok(());
        };
        match element {
            Element::Line(line) => {
                let (start, end) = resize_from_handle(position, line.start, line.end, selected.hit)?;
                *line = Line::new(line.id, start, end, backend);
            }
            Element::Rectangle(rect) => {
                let (start, end) = resize_from_handle(position, rect.start, rect.end, selected.hit)?;
                *rect = Rectangle::new(rect.id, start, end, backend);
            }
            // No resize handles on strokes and text.
            Element::Freehand(_) | Element::Text(_) => return Ok(()),
        }
        self.history.commit(next, true);
        Ok(())
    }
}
