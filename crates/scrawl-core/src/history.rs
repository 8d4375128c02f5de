//! Versioned log of element collections with cursor-based undo/redo.

use crate::shapes::Element;
use log::trace;

/// One history entry: a full copy of the element collection.
pub type Snapshot = Vec<Element>;

/// Append/overwrite versioned log of snapshots.
///
/// Every discrete user action opens exactly one appended snapshot; the
/// pointer-move refinements of that action overwrite it in place, so a drag
/// costs one undo step rather than one per sample. Appending after an undo
/// discards the redoable future.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
    index: usize,
}

impl History {
    /// Seed the log with an initial (possibly empty) collection.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
        }
    }

    /// The collection at the cursor.
    pub fn current(&self) -> &[Element] {
        &self.snapshots[self.index]
    }

    /// Write a snapshot. With `overwrite` the entry at the cursor is
    /// replaced in place, leaving cursor and length unchanged; otherwise any
    /// redoable future is truncated and the snapshot is appended, advancing
    /// the cursor.
    pub fn commit(&mut self, next: Snapshot, overwrite: bool) {
        trace!(
            "commit: {} elements, overwrite={overwrite}, index={}/{}",
            next.len(),
            self.index,
            self.snapshots.len()
        );
        if overwrite {
            self.snapshots[self.index] = next;
        } else {
            self.snapshots.truncate(self.index + 1);
            self.snapshots.push(next);
            self.index += 1;
        }
    }

    /// [`History::commit`] with the snapshot produced by a pure function of
    /// the current collection.
    pub fn commit_with(&mut self, transform: impl FnOnce(&[Element]) -> Snapshot, overwrite: bool) {
        let next = transform(self.current());
        self.commit(next, overwrite);
    }

    /// Step the cursor back one snapshot; no-op at the oldest entry.
    pub fn undo(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Step the cursor forward one snapshot; no-op at the newest entry.
    pub fn redo(&mut self) {
        if self.index < self.snapshots.len() - 1 {
            self.index += 1;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index < self.snapshots.len() - 1
    }

    /// Number of snapshots in the log.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Cursor position.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
