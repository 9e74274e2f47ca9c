//! Toolbar adapter between a host field and the injector.
//!
//! Follows The Elm Architecture like the rest of the UI layer:
//! - [`Model`]: the field plus toolbar state
//! - [`Message`]: button presses, selection changes, undo
//! - [`update`]: pure state transitions
//! - [`Toolbar::dispatch`]: runs injections and reports [`ToolbarEvent`]s
//!
//! Rendering the buttons is up to the host; [`FieldKind::items`] only
//! describes which buttons exist and in what order.

mod effects;
mod input;
mod model;
mod update;

pub use input::{KeyAction, ShortcutModifier, parse_key_spec};
pub use model::Model;
pub use update::{Message, update};

use crate::affix::{AffixCatalog, Construct};
use crate::editor::{BlankSelection, StrategyKind, TextField};

/// Notification raised after the toolbar changed the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarEvent {
    /// The field content changed; live previews should re-render.
    ContentChanged,
}

/// The kind of field a toolbar is attached to.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    /// Multi-line textarea with the full button set.
    #[default]
    #[value(name = "textarea")]
    TextArea,
    /// Single-line text input with inline constructs only.
    #[value(name = "input")]
    TextInput,
}

/// One slot in a toolbar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Button {
        construct: Construct,
        label: &'static str,
    },
    Divider,
}

const fn button(construct: Construct, label: &'static str) -> ToolbarItem {
    ToolbarItem::Button { construct, label }
}

const TEXTAREA_ITEMS: &[ToolbarItem] = &[
    button(Construct::Header, "header text"),
    ToolbarItem::Divider,
    button(Construct::Bold, "bold text"),
    button(Construct::Italic, "italic text"),
    button(Construct::Highlight, "highlighted text"),
    ToolbarItem::Divider,
    button(Construct::Quote, "quote block"),
    button(Construct::Link, "link"),
    button(Construct::Table, "table"),
    ToolbarItem::Divider,
    button(Construct::BlockCode, "code block"),
    button(Construct::InlineCode, "inline code"),
    ToolbarItem::Divider,
    button(Construct::ListUl, "unordered list"),
    button(Construct::ListOl, "ordered list"),
];

const INPUT_ITEMS: &[ToolbarItem] = &[
    button(Construct::Bold, "bold text"),
    button(Construct::Italic, "italic text"),
    button(Construct::Highlight, "highlighted text"),
    ToolbarItem::Divider,
    button(Construct::Link, "link"),
    button(Construct::InlineCode, "inline code"),
];

impl FieldKind {
    /// Toolbar layout for this kind of field.
    pub const fn items(self) -> &'static [ToolbarItem] {
        match self {
            Self::TextArea => TEXTAREA_ITEMS,
            Self::TextInput => INPUT_ITEMS,
        }
    }

    /// Constructs with a button on this kind of field.
    pub fn constructs(self) -> impl Iterator<Item = Construct> {
        self.items().iter().filter_map(|item| match item {
            ToolbarItem::Button { construct, .. } => Some(*construct),
            ToolbarItem::Divider => None,
        })
    }

    pub fn has_button(self, construct: Construct) -> bool {
        self.constructs().any(|c| c == construct)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextArea => "textarea",
            Self::TextInput => "input",
        }
    }
}

/// A toolbar attached to one field.
///
/// Owns its catalog and the host-specific choices; the field itself lives
/// in the [`Model`].
#[derive(Debug, Clone)]
pub struct Toolbar {
    catalog: AffixCatalog,
    field_kind: FieldKind,
    strategy: StrategyKind,
    blank_selection: BlankSelection,
    shortcut_modifier: ShortcutModifier,
}

impl Toolbar {
    /// Create a toolbar for the given catalog with default settings.
    pub fn new(catalog: AffixCatalog) -> Self {
        Self {
            catalog,
            field_kind: FieldKind::default(),
            strategy: StrategyKind::default(),
            blank_selection: BlankSelection::default(),
            shortcut_modifier: ShortcutModifier::default(),
        }
    }

    /// Set the kind of field the toolbar is attached to.
    pub const fn with_field_kind(mut self, kind: FieldKind) -> Self {
        self.field_kind = kind;
        self
    }

    /// Choose how results are written back into the field.
    pub const fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Choose what happens to blank-only selections.
    pub const fn with_blank_selection(mut self, blank: BlankSelection) -> Self {
        self.blank_selection = blank;
        self
    }

    /// Choose which modifier triggers keyboard shortcuts.
    pub const fn with_shortcut_modifier(mut self, modifier: ShortcutModifier) -> Self {
        self.shortcut_modifier = modifier;
        self
    }

    /// Attach the toolbar to a field.
    pub fn attach(&self, field: TextField) -> Model {
        Model::new(field, self.field_kind)
    }

    pub const fn catalog(&self) -> &AffixCatalog {
        &self.catalog
    }

    pub const fn field_kind(&self) -> FieldKind {
        self.field_kind
    }

    pub const fn strategy(&self) -> StrategyKind {
        self.strategy
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new(AffixCatalog::builtin())
    }
}
