use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::affix::Construct;

use super::{Message, Toolbar};

/// Which modifier key triggers toolbar shortcuts.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortcutModifier {
    /// Ctrl
    Control,
    /// Cmd / Super
    Command,
    /// Either Ctrl or Cmd
    #[default]
    Either,
}

impl ShortcutModifier {
    fn matches(self, modifiers: KeyModifiers) -> bool {
        let control = modifiers.contains(KeyModifiers::CONTROL);
        let command = modifiers.contains(KeyModifiers::SUPER);
        match self {
            Self::Control => control,
            Self::Command => command,
            Self::Either => control || command,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::Command => "command",
            Self::Either => "either",
        }
    }
}

/// A shortcut matched by [`Toolbar::handle_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAction {
    /// Message to dispatch.
    pub message: Message,
    /// The host must not also process the keystroke itself.
    pub suppress_default: bool,
}

impl Toolbar {
    /// Map a key press to a toolbar action.
    ///
    /// Mod+B, Mod+I and Mod+K press bold, italic and link. Anything else is
    /// left to the host.
    pub fn handle_key(&self, key: KeyEvent) -> Option<KeyAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if !self.shortcut_modifier.matches(key.modifiers) {
            return None;
        }
        let KeyCode::Char(c) = key.code else {
            return None;
        };
        let construct = match c.to_ascii_lowercase() {
            'b' => Construct::Bold,
            'i' => Construct::Italic,
            'k' => Construct::Link,
            _ => return None,
        };
        tracing::debug!(key = %c, construct = construct.name(), "shortcut");
        Some(KeyAction {
            message: Message::Button(construct.name().to_string()),
            suppress_default: true,
        })
    }
}

/// Parse a shortcut spec such as `ctrl+b` or `cmd+shift+k`.
///
/// Returns `None` for unknown modifiers or a key that is not one char.
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts = spec.split('+').map(str::trim).peekable();
    let mut key = None;
    while let Some(part) = parts.next() {
        if parts.peek().is_none() {
            key = Some(part);
            break;
        }
        modifiers |= match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "cmd" | "command" | "super" | "meta" => KeyModifiers::SUPER,
            "shift" => KeyModifiers::SHIFT,
            "alt" | "option" => KeyModifiers::ALT,
            _ => return None,
        };
    }
    let mut chars = key?.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(KeyEvent::new(KeyCode::Char(c), modifiers))
}
