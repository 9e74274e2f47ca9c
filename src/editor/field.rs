use std::collections::VecDeque;
use std::ops::Range;

use ropey::Rope;

use super::selection::SelectionState;

/// Most undo snapshots kept per field. Older ones are dropped.
pub const UNDO_LIMIT: usize = 100;

/// Saved content and selection for undo.
#[derive(Debug, Clone)]
struct Snapshot {
    rope: Rope,
    selection: (usize, usize),
}

/// A text field backed by a rope, with a selection and undo history.
///
/// This stands in for the host input/textarea the toolbar is attached to.
/// Offsets are char indices.
pub struct TextField {
    rope: Rope,
    selection: (usize, usize),
    history: VecDeque<Snapshot>,
    dirty: bool,
}

impl TextField {
    /// Create a field from a string with the caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: (0, 0),
            history: VecDeque::new(),
            dirty: false,
        }
    }

    /// Create an empty field.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The full text content of the field.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Length in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Current `(start, end)` selection.
    pub const fn selection(&self) -> (usize, usize) {
        self.selection
    }

    /// Set the selection, clamping to the content and ordering the ends.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.len_chars();
        let (a, b) = (start.min(len), end.min(len));
        self.selection = (a.min(b), a.max(b));
    }

    pub const fn has_selection(&self) -> bool {
        self.selection.0 != self.selection.1
    }

    /// The currently selected text.
    pub fn selected_text(&self) -> String {
        let (start, end) = self.selection;
        self.rope.slice(start..end).to_string()
    }

    /// Snapshot of content and selection for the injector.
    pub fn selection_state(&self) -> SelectionState {
        SelectionState::new(self.text(), self.selection.0, self.selection.1)
    }

    /// Replace the whole content. Undo history is lost.
    pub fn replace_all(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.history.clear();
        self.selection = (self.len_chars(), self.len_chars());
        self.dirty = true;
    }

    /// Replace `range` with `text` and put the caret after it.
    ///
    /// Records an undo snapshot first, keeping at most [`UNDO_LIMIT`].
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if self.history.len() == UNDO_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(Snapshot {
            rope: self.rope.clone(),
            selection: self.selection,
        });
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
        let caret = start + text.chars().count();
        self.selection = (caret, caret);
        self.dirty = true;
    }

    /// Restore the state before the last [`Self::replace_range`].
    ///
    /// Returns `true` if something was undone.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop_back() else {
            return false;
        };
        self.rope = snapshot.rope;
        self.selection = snapshot.selection;
        self.dirty = true;
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether the content has changed since creation or the last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the field as clean (e.g., after the form was submitted).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextField")
            .field("rope", &format_args!("Rope({} chars)", self.rope.len_chars()))
            .field("selection", &self.selection)
            .field("history", &self.history.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}
