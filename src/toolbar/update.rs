use super::Model;

/// All events the toolbar reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A toolbar button was pressed (by click or shortcut)
    Button(String),
    /// The user moved or changed the selection
    SelectionChanged { start: usize, end: usize },
    /// Undo the last toolbar edit
    Undo,
}

/// Pure state transitions that need no catalog.
///
/// [`Message::Button`] is handled by
/// [`Toolbar::dispatch`](super::Toolbar::dispatch).
pub fn update(mut model: Model, msg: &Message) -> Model {
    match msg {
        Message::SelectionChanged { start, end } => {
            model.field.set_selection(*start, *end);
        }
        Message::Undo => {
            if model.field.undo() {
                model.revision += 1;
            }
        }
        Message::Button(_) => {}
    }
    model
}
