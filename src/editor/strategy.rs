use super::field::TextField;
use super::selection::{InjectionResult, SelectionState};

/// How an [`InjectionResult`] is written back into a field.
///
/// Every strategy leaves the field with the same text and selection. They
/// differ only in what happens to the field's undo history.
pub trait ApplyStrategy {
    fn apply(&self, field: &mut TextField, state: &SelectionState, result: &InjectionResult);
}

/// Replace the whole field content with the spliced string.
///
/// For hosts whose insert-text primitive corrupts their own state when
/// content is replaced. Undo history is lost.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpliceStrategy;

impl ApplyStrategy for SpliceStrategy {
    fn apply(&self, field: &mut TextField, _state: &SelectionState, result: &InjectionResult) {
        field.replace_all(&result.new_text);
        field.set_selection(result.new_selection_start, result.new_selection_end);
    }
}

/// Insert the injected text over the selection, keeping undo history.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertTextStrategy;

impl ApplyStrategy for InsertTextStrategy {
    fn apply(&self, field: &mut TextField, state: &SelectionState, result: &InjectionResult) {
        field.replace_range(state.start()..state.end(), &result.inserted);
        field.set_selection(result.new_selection_start, result.new_selection_end);
    }
}

/// Which [`ApplyStrategy`] the host uses.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyKind {
    /// Replace the whole value.
    Splice,
    /// Insert at the caret.
    #[default]
    InsertText,
}

impl StrategyKind {
    pub fn strategy(self) -> Box<dyn ApplyStrategy> {
        match self {
            Self::Splice => Box::new(SpliceStrategy),
            Self::InsertText => Box::new(InsertTextStrategy),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Splice => "splice",
            Self::InsertText => "insert-text",
        }
    }
}
