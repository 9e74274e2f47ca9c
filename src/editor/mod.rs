//! Selection-aware markup injection.
//!
//! [`inject`] is the pure transformation from a [`SelectionState`] and an
//! [`Affix`](crate::affix::Affix) to an [`InjectionResult`]. Writing the
//! result back into a [`TextField`] is left to an [`ApplyStrategy`] chosen
//! by the host.

mod field;
mod inject;
mod selection;
mod strategy;

pub use field::TextField;
pub use inject::{BlankSelection, inject, inject_with};
pub use selection::{InjectionResult, SelectionState};
pub use strategy::{ApplyStrategy, InsertTextStrategy, SpliceStrategy, StrategyKind};
