//! Row document parsing.
//!
//! The CLI consumes a JSON document naming a diagram family, its rows, and
//! optional compilation options:
//!
//! ```json
//! {
//!   "diagram": "flowchart",
//!   "options": { "direction": "lr" },
//!   "rows": [
//!     { "id": "S1", "name": "Start", "kind": "start", "next": "S2" },
//!     { "id": "S2", "name": "Done", "kind": "end" }
//!   ]
//! }
//! ```
//!
//! The `diagram` tag selects the family; a row carrying a field that family
//! does not declare is rejected. Document options rank below command-line
//! flags and above the configuration file.

use serde::Deserialize;

use tabmaid::{Direction, RowSet, Theme};

/// A parsed row document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    rows: RowSet,

    #[serde(default)]
    options: DocumentOptions,
}

/// Optional per-document compilation options.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentOptions {
    direction: Option<Direction>,
    swimlanes: Option<bool>,
    theme: Option<Theme>,
}

impl Document {
    /// Parse a document from JSON source.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the document is
    /// not valid JSON, names an unknown diagram kind, or carries a row
    /// field outside the family's schema.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// The family and rows this document holds.
    pub fn rows(&self) -> &RowSet {
        &self.rows
    }

    /// The document's option overrides.
    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }
}

impl DocumentOptions {
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn swimlanes(&self) -> Option<bool> {
        self.swimlanes
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }
}
