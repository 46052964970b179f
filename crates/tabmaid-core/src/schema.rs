//! Column schemas for row-editing surfaces.
//!
//! A [`Schema`] describes how one family's rows should be presented in an
//! editable grid: the ordered columns, their display titles and width hints,
//! and the enumerated choices of select-style columns. The column keys are
//! exactly the serde field names of the family's row struct.

use crate::{kind::DiagramKind, row::RowSet};

/// One enumerated value of a select-style column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// The stored field value.
    pub value: &'static str,
    /// The display label.
    pub label: &'static str,
}

/// One grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Row field name this column edits.
    pub key: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Minimum rendered width hint, in pixels.
    pub min_width: Option<u16>,
    /// Maximum rendered width hint, in pixels.
    pub max_width: Option<u16>,
    /// Enumerated values for select columns; empty for free-text columns.
    pub choices: &'static [Choice],
}

impl Column {
    /// A free-text column.
    pub const fn text(key: &'static str, title: &'static str, min_width: u16) -> Self {
        Column {
            key,
            title,
            min_width: Some(min_width),
            max_width: None,
            choices: &[],
        }
    }

    /// A select column over a fixed choice set.
    pub const fn select(
        key: &'static str,
        title: &'static str,
        min_width: u16,
        max_width: u16,
        choices: &'static [Choice],
    ) -> Self {
        Column {
            key,
            title,
            min_width: Some(min_width),
            max_width: Some(max_width),
            choices,
        }
    }

    /// Caps a free-text column's width.
    pub const fn with_max_width(mut self, max_width: u16) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// Grid schema for one diagram family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// The family this schema belongs to.
    pub kind: DiagramKind,
    /// Ordered column definitions.
    pub columns: &'static [Column],
}

impl Schema {
    /// Display label of the family.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// The family's zero-value row, as a one-row set.
    pub fn default_row(&self) -> RowSet {
        RowSet::seed(self.kind, 1)
    }

    /// The row set a fresh editing grid starts from (three default rows).
    pub fn initial_rows(&self) -> RowSet {
        RowSet::seed(self.kind, 3)
    }

    /// The declared field names, in column order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|column| column.key)
    }
}
