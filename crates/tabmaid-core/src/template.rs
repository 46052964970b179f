//! Starter templates.

use crate::row::RowSet;

/// A named starter row set for one diagram family.
///
/// Selecting a template replaces the current row sequence wholesale; it
/// never merges with existing rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Stable template identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// The fixed row sequence this template expands to.
    pub rows: RowSet,
}
