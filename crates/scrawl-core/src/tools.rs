//! Tool selection.

use serde::{Deserialize, Serialize};

/// The creation/interaction mode bound to pointer input. Exactly one is
/// active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Selection,
    Pencil,
    Line,
    Rectangle,
    Text,
}

impl Tool {
    /// Whether pointer-down with this tool creates a new element.
    pub fn creates_elements(&self) -> bool {
        !matches!(self, Tool::Selection)
    }
}
