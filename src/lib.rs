// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. affix::AffixCatalog)
    clippy::module_name_repetitions
)]

//! # Textile Toolbar
//!
//! Selection-aware Textile markup injection for text fields.
//!
//! Given a field's text, its selection and a construct such as bold or a
//! list item, the crate computes the new text and where the selection goes
//! next:
//! - A caret gets a placeholder stub with the placeholder selected
//! - A single-line selection is wrapped in the construct's prefix and suffix
//! - A multi-line selection has every line wrapped on its own
//!
//! ## Modules
//!
//! - [`affix`]: Affixes and the catalog of built-in constructs
//! - [`editor`]: The pure injector, the host field and apply strategies
//! - [`toolbar`]: Button layouts, shortcuts and the TEA adapter
//! - [`config`]: Flag-token config files

pub mod affix;
pub mod config;
pub mod editor;
pub mod toolbar;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::affix::{Affix, AffixCatalog, CatalogError, Construct};
    pub use crate::editor::{InjectionResult, SelectionState, TextField, inject};
    pub use crate::toolbar::{Message, Model, Toolbar, ToolbarEvent};
}
