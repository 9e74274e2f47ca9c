//! Markup affixes and the catalog of built-in Textile constructs.
//!
//! An [`Affix`] is the prefix/placeholder/suffix triple that one toolbar
//! construct wraps around a selection. The [`AffixCatalog`] maps construct
//! names to their affixes and is built once per toolbar.

mod catalog;

pub use catalog::{AffixCatalog, CatalogError, Construct, TABLE_TEMPLATE};

use serde::Serialize;

/// A prefix/placeholder/suffix triple for one markup construct.
///
/// Missing parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Affix {
    pub prefix: String,
    pub placeholder: String,
    pub suffix: String,
}

impl Affix {
    /// Create an affix from its three parts.
    pub fn new(
        prefix: impl Into<String>,
        placeholder: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            placeholder: placeholder.into(),
            suffix: suffix.into(),
        }
    }

    /// Text inserted when nothing is selected: `prefix + placeholder + suffix`.
    pub fn as_placeholder(&self) -> String {
        self.with_selection(&self.placeholder)
    }

    /// Wrap one selected line: `prefix + selection + suffix`.
    pub fn with_selection(&self, selection: &str) -> String {
        let mut out =
            String::with_capacity(self.prefix.len() + selection.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(selection);
        out.push_str(&self.suffix);
        out
    }

    /// Prefix length in chars.
    pub fn prefix_len(&self) -> usize {
        self.prefix.chars().count()
    }

    /// Suffix length in chars.
    pub fn suffix_len(&self) -> usize {
        self.suffix.chars().count()
    }
}
