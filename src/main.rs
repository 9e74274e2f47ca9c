//! textile-toolbar - Apply Textile toolbar actions to text from the shell.
//!
//! # Usage
//!
//! ```bash
//! textile-toolbar notes.textile --construct bold --start 6 --end 11
//! echo "a\nb" | textile-toolbar --construct list-ul --start 0 --end 3
//! textile-toolbar notes.textile --key ctrl+k --start 4 --end 8 --write
//! textile-toolbar --list
//! ```

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use textile_toolbar::affix::{Affix, AffixCatalog};
use textile_toolbar::config::{
    clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags, ConfigFlags,
};
use textile_toolbar::editor::{BlankSelection, StrategyKind, TextField};
use textile_toolbar::toolbar::{parse_key_spec, FieldKind, Message, ShortcutModifier, Toolbar};

/// Apply a Textile toolbar action to a text selection
#[derive(Parser, Debug)]
#[command(name = "textile-toolbar", version, about, long_about = None)]
struct Cli {
    /// File holding the field content (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Construct to apply (bold, italic, header, link, list-ul, ...)
    #[arg(short, long, conflicts_with = "key")]
    construct: Option<String>,

    /// Press a keyboard shortcut instead, e.g. ctrl+b
    #[arg(short, long)]
    key: Option<String>,

    /// Selection start as a char offset
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Selection end as a char offset (defaults to --start)
    #[arg(long)]
    end: Option<usize>,

    /// Print a JSON report with the new text and selection
    #[arg(long)]
    json: bool,

    /// Write the result back to FILE
    #[arg(short, long, requires = "file")]
    write: bool,

    /// List the construct catalog and exit
    #[arg(long)]
    list: bool,

    /// How the result is written into the field
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// What to do with a selection of blank lines only
    #[arg(long, value_enum)]
    blank_selection: Option<BlankSelection>,

    /// Modifier that triggers shortcuts
    #[arg(long, value_enum)]
    shortcut_modifier: Option<ShortcutModifier>,

    /// Kind of field the toolbar is attached to
    #[arg(long, value_enum)]
    field: Option<FieldKind>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    const fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            strategy: self.strategy,
            blank_selection: self.blank_selection,
            shortcut_modifier: self.shortcut_modifier,
            field: self.field,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    text: &'a str,
    selection_start: usize,
    selection_end: usize,
    changed: bool,
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_catalog(catalog: &AffixCatalog, json: bool) -> Result<()> {
    if json {
        let entries: BTreeMap<&str, &Affix> = catalog.iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for (name, affix) in catalog.iter() {
        println!(
            "{name:<12} {:<8} {:<20} {:?}",
            format!("{:?}", affix.prefix),
            format!("{:?}", affix.placeholder.lines().next().unwrap_or_default()),
            affix.suffix
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    let toolbar = effective.configure(Toolbar::new(AffixCatalog::builtin()));

    if cli.list {
        return print_catalog(toolbar.catalog(), cli.json);
    }

    let message = match (&cli.construct, &cli.key) {
        (Some(name), _) => Message::Button(name.clone()),
        (None, Some(spec)) => {
            let key = parse_key_spec(spec)
                .with_context(|| format!("Invalid key spec '{spec}'"))?;
            toolbar
                .handle_key(key)
                .with_context(|| format!("'{spec}' is not a toolbar shortcut"))?
                .message
        }
        (None, None) if cli.save || cli.clear => return Ok(()),
        (None, None) => anyhow::bail!("Nothing to do: pass --construct, --key or --list"),
    };

    let text = read_input(cli.file.as_ref())?;
    let mut field = TextField::from_text(&text);
    field.set_selection(cli.start, cli.end.unwrap_or(cli.start));
    let mut model = toolbar.attach(field);

    let events = toolbar.dispatch(&mut model, &message)?;
    tracing::debug!(events = events.len(), revision = model.revision, "dispatched");

    let new_text = model.field.text();
    let (selection_start, selection_end) = model.field.selection();

    if cli.write
        && let Some(path) = &cli.file
    {
        std::fs::write(path, &new_text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        let report = Report {
            text: &new_text,
            selection_start,
            selection_end,
            changed: !events.is_empty(),
        };
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else if !cli.write {
        write!(stdout, "{new_text}")?;
    }
    Ok(())
}
