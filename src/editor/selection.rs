use serde::Serialize;

/// Snapshot of a field's content and selection.
///
/// Offsets are char indices with `start <= end <= text.chars().count()`.
/// Equal offsets mean a collapsed selection (a caret).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    text: String,
    start: usize,
    end: usize,
}

impl SelectionState {
    /// Create a selection snapshot, clamping offsets into range.
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        let text = text.into();
        let len = text.chars().count();
        let clamped_end = end.min(len);
        let clamped_start = start.min(clamped_end);
        if clamped_start != start || clamped_end != end {
            tracing::warn!(
                start,
                end,
                len,
                clamped_start,
                clamped_end,
                "selection out of range, clamping"
            );
        }
        Self {
            text,
            start: clamped_start,
            end: clamped_end,
        }
    }

    /// A caret at `offset`.
    pub fn caret(text: impl Into<String>, offset: usize) -> Self {
        Self::new(text, offset, offset)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    pub const fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Text before the selection.
    pub fn head(&self) -> &str {
        &self.text[..byte_offset(&self.text, self.start)]
    }

    /// The selected text.
    pub fn selected_text(&self) -> &str {
        let from = byte_offset(&self.text, self.start);
        let to = byte_offset(&self.text, self.end);
        &self.text[from..to]
    }

    /// Text after the selection.
    pub fn tail(&self) -> &str {
        &self.text[byte_offset(&self.text, self.end)..]
    }
}

/// Outcome of an injection: the field's new content and selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectionResult {
    pub new_text: String,
    pub new_selection_start: usize,
    pub new_selection_end: usize,
    /// The string that replaced the original selection.
    #[serde(skip)]
    pub inserted: String,
}

impl InjectionResult {
    pub const fn is_collapsed(&self) -> bool {
        self.new_selection_start == self.new_selection_end
    }
}

/// Byte offset of the char at `char_idx`, or the text length past the end.
pub(crate) fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(i, _)| i)
}
