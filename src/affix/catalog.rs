use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::Affix;

/// Literal text inserted by the `table` construct.
pub const TABLE_TEMPLATE: &str = concat!(
    "|_. Col 1 Header|_. Col 2 Header|\n",
    "|Col 1 Row 1|Col 2 Row 1|\n",
    "|Col 1 Row 2|Col 2 Row 2|",
);

/// Errors raised by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The construct name has no registered affix.
    #[error("unknown construct '{0}'")]
    UnknownConstruct(String),
}

/// The built-in toolbar constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Construct {
    BlockCode,
    Bold,
    Header,
    Highlight,
    InlineCode,
    Italic,
    Link,
    ListOl,
    ListUl,
    Quote,
    Table,
}

impl Construct {
    /// Every construct, in catalog (name) order.
    pub const ALL: [Self; 11] = [
        Self::BlockCode,
        Self::Bold,
        Self::Header,
        Self::Highlight,
        Self::InlineCode,
        Self::Italic,
        Self::Link,
        Self::ListOl,
        Self::ListUl,
        Self::Quote,
        Self::Table,
    ];

    /// The catalog key for this construct.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BlockCode => "block-code",
            Self::Bold => "bold",
            Self::Header => "header",
            Self::Highlight => "highlight",
            Self::InlineCode => "inline-code",
            Self::Italic => "italic",
            Self::Link => "link",
            Self::ListOl => "list-ol",
            Self::ListUl => "list-ul",
            Self::Quote => "quote",
            Self::Table => "table",
        }
    }

    fn default_affix(self) -> Affix {
        match self {
            Self::BlockCode => Affix::new("bc. ", "Code markup", ""),
            Self::Bold => Affix::new("*", "Bold text", "*"),
            Self::Header => Affix::new("#[", "Header text", "]#"),
            Self::Highlight => Affix::new("$${{", "Highlighted text", "}}$$"),
            Self::InlineCode => Affix::new("@", "Inline code", "@"),
            Self::Italic => Affix::new("_", "Italic text", "_"),
            Self::Link => Affix::new("\"", "", "\":http://"),
            Self::ListOl => Affix::new("# ", "Ordered item", ""),
            Self::ListUl => Affix::new("* ", "Unordered item", ""),
            Self::Quote => Affix::new("bq. ", "Quoted text", ""),
            Self::Table => Affix::new("", TABLE_TEMPLATE, ""),
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Construct {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| CatalogError::UnknownConstruct(s.to_string()))
    }
}

/// Immutable mapping from construct name to [`Affix`].
///
/// Built once per toolbar and passed to whoever needs lookups; there is no
/// global instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixCatalog {
    entries: BTreeMap<String, Affix>,
}

impl AffixCatalog {
    /// The built-in Textile constructs.
    pub fn builtin() -> Self {
        Self::from_entries(
            Construct::ALL
                .into_iter()
                .map(|c| (c.name().to_string(), c.default_affix())),
        )
    }

    /// Build a catalog from arbitrary entries. Later duplicates win.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Affix)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up the affix registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownConstruct`] when `name` is not registered.
    pub fn get(&self, name: &str) -> Result<&Affix, CatalogError> {
        self.entries
            .get(name)
            .ok_or_else(|| CatalogError::UnknownConstruct(name.to_string()))
    }

    /// Look up a built-in construct.
    ///
    /// # Errors
    ///
    /// Fails only for catalogs built with [`Self::from_entries`] that omit it.
    pub fn affix(&self, construct: Construct) -> Result<&Affix, CatalogError> {
        self.get(construct.name())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Affix)> {
        self.entries.iter().map(|(name, affix)| (name.as_str(), affix))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AffixCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
