use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::{BlankSelection, StrategyKind};
use crate::toolbar::{FieldKind, ShortcutModifier, Toolbar};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFlags {
    pub strategy: Option<StrategyKind>,
    pub blank_selection: Option<BlankSelection>,
    pub shortcut_modifier: Option<ShortcutModifier>,
    pub field: Option<FieldKind>,
}

impl ConfigFlags {
    /// Merge two flag sets; values in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            strategy: other.strategy.or(self.strategy),
            blank_selection: other.blank_selection.or(self.blank_selection),
            shortcut_modifier: other.shortcut_modifier.or(self.shortcut_modifier),
            field: other.field.or(self.field),
        }
    }

    /// Apply these settings to a toolbar, keeping its defaults for unset flags.
    pub fn configure(&self, mut toolbar: Toolbar) -> Toolbar {
        if let Some(strategy) = self.strategy {
            toolbar = toolbar.with_strategy(strategy);
        }
        if let Some(blank) = self.blank_selection {
            toolbar = toolbar.with_blank_selection(blank);
        }
        if let Some(modifier) = self.shortcut_modifier {
            toolbar = toolbar.with_shortcut_modifier(modifier);
        }
        if let Some(field) = self.field {
            toolbar = toolbar.with_field_kind(field);
        }
        toolbar
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("textile-toolbar").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("textile-toolbar")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("textile-toolbar").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("textile-toolbar")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".textilerc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# textile-toolbar defaults (saved with --save)".to_string());
    if let Some(strategy) = flags.strategy {
        lines.push(format!("--strategy {}", strategy.as_str()));
    }
    if let Some(blank) = flags.blank_selection {
        let blank_str = match blank {
            BlankSelection::Discard => "discard",
            BlankSelection::Placeholder => "placeholder",
        };
        lines.push(format!("--blank-selection {blank_str}"));
    }
    if let Some(modifier) = flags.shortcut_modifier {
        lines.push(format!("--shortcut-modifier {}", modifier.as_str()));
    }
    if let Some(field) = flags.field {
        lines.push(format!("--field {}", field.as_str()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of a token list; unknown tokens and values are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        let known = matches!(
            name,
            "--strategy" | "--blank-selection" | "--shortcut-modifier" | "--field"
        );
        if known {
            let value = if let Some(value) = inline_value {
                Some(value)
            } else {
                i += 1;
                tokens.get(i).map(String::as_str)
            };
            if let Some(value) = value {
                apply_flag(&mut flags, name, value);
            }
        }
        i += 1;
    }
    flags
}

fn apply_flag(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--strategy" => flags.strategy = parse_value(value),
        "--blank-selection" => flags.blank_selection = parse_value(value),
        "--shortcut-modifier" => flags.shortcut_modifier = parse_value(value),
        "--field" => flags.field = parse_value(value),
        _ => {}
    }
}

fn parse_value<T: clap::ValueEnum>(s: &str) -> Option<T> {
    T::from_str(s, true).ok()
}
