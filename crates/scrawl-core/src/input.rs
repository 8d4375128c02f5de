//! Pointer/keyboard event types and shortcut decoding.
//!
//! Hosts own the actual event subscriptions (window listeners, widget
//! callbacks) and forward them through these types for the editor's
//! lifetime; nothing here registers global state.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state, sampled per event by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Platform chord key: Ctrl, or Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Unified pointer event, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

/// History operation decoded from a keyboard chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOp {
    Undo,
    Redo,
}

/// Decode the undo/redo chords: `Ctrl/Cmd+Z` and `Ctrl/Cmd+Shift+Z`.
pub fn history_shortcut(key: &str, modifiers: Modifiers) -> Option<HistoryOp> {
    if !modifiers.command() || !key.eq_ignore_ascii_case("z") {
        return None;
    }
    if modifiers.shift {
        Some(HistoryOp::Redo)
    } else {
        Some(HistoryOp::Undo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_chord() {
        let mods = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        assert_eq!(history_shortcut("z", mods), Some(HistoryOp::Undo));
        assert_eq!(history_shortcut("Z", mods), Some(HistoryOp::Undo));
    }

    #[test]
    fn test_redo_chord() {
        let mods = Modifiers {
            ctrl: true,
            shift: true,
            ..Modifiers::default()
        };
        assert_eq!(history_shortcut("z", mods), Some(HistoryOp::Redo));
    }

    #[test]
    fn test_meta_works_as_command() {
        let mods = Modifiers {
            meta: true,
            ..Modifiers::default()
        };
        assert_eq!(history_shortcut("z", mods), Some(HistoryOp::Undo));
    }

    #[test]
    fn test_non_chords_ignored() {
        assert_eq!(history_shortcut("z", Modifiers::default()), None);
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        assert_eq!(history_shortcut("y", ctrl), None);
        assert_eq!(history_shortcut("Escape", ctrl), None);
    }
}
