use crate::affix::Construct;
use crate::editor::TextField;

use super::FieldKind;

/// Toolbar state for one field.
#[derive(Debug, Default)]
pub struct Model {
    /// The host field.
    pub field: TextField,
    /// Kind of field, which decides the button set.
    pub field_kind: FieldKind,
    /// Bumped on every content change made through the toolbar.
    pub revision: u64,
}

impl Model {
    /// Create a model for `field`.
    pub const fn new(field: TextField, field_kind: FieldKind) -> Self {
        Self {
            field,
            field_kind,
            revision: 0,
        }
    }

    /// Whether the table button accepts clicks.
    ///
    /// The table template only makes sense at a caret, so the button is
    /// disabled while text is selected.
    pub const fn table_enabled(&self) -> bool {
        !self.field.has_selection()
    }

    /// Whether the button for `construct` is present and enabled.
    pub fn is_enabled(&self, construct: Construct) -> bool {
        if !self.field_kind.has_button(construct) {
            return false;
        }
        match construct {
            Construct::Table => self.table_enabled(),
            _ => true,
        }
    }
}
