//! tabmaid - compile flat table rows into Mermaid diagram markup.
//!
//! A user describes a process as rows of a flat table; tabmaid compiles the
//! rows into the textual markup an external Mermaid renderer consumes. Nine
//! diagram families are supported, each with its own row schema and
//! generation rules: flowchart, sequence, state, class, ER, gantt, pie,
//! mindmap, and timeline.
//!
//! Compilation is total and pure: rows that are not complete enough to
//! render are silently skipped, an all-incomplete row set compiles to the
//! empty string, and the same `(rows, options)` input always produces
//! byte-identical output.
//!
//! # Examples
//!
//! ```rust
//! use tabmaid::{compile, DiagramKind, Options, RowSet};
//! use tabmaid::row::PieRow;
//!
//! let rows = RowSet::Pie(vec![
//!     PieRow { label: Some("Chrome".into()), value: Some("65.3".into()) },
//!     PieRow { label: Some("Safari".into()), value: Some("18.9".into()) },
//! ]);
//!
//! let markup = compile(&rows, &Options::default());
//! assert_eq!(markup, "pie\n    \"Chrome\" : 65.3\n    \"Safari\" : 18.9");
//!
//! // Seed rows carry no user data yet, so there is nothing to render.
//! let blank = RowSet::seed(DiagramKind::Flowchart, 3);
//! assert_eq!(compile(&blank, &Options::default()), "");
//! ```

pub mod schema;
pub mod templates;

mod generate;

pub use tabmaid_core::{DiagramKind, Direction, Options, RowSet, TabmaidError, Theme};
pub use tabmaid_core::{error, kind, options, row, template};

use log::{debug, trace};

/// Compile a row set into diagram markup.
///
/// The single dispatch point over the nine diagram families. Rows failing
/// the family's completeness predicate are dropped without reordering the
/// rest; when no row qualifies the result is the empty string, which callers
/// treat as "nothing to render" rather than a failure.
///
/// Malformed row content can never make this function fail; the only
/// exceptional conditions in tabmaid live at the construction boundary
/// ([`RowSet::from_fields`], [`DiagramKind::from_str`](std::str::FromStr)).
pub fn compile(rows: &RowSet, options: &Options) -> String {
    debug!(kind = rows.kind().id(), rows_len = rows.len(); "Compiling diagram markup");

    let markup = match rows {
        RowSet::Flowchart(rows) => generate::flowchart::generate(rows, options),
        RowSet::Sequence(rows) => generate::sequence::generate(rows, options),
        RowSet::State(rows) => generate::state::generate(rows, options),
        RowSet::Class(rows) => generate::class_diagram::generate(rows, options),
        RowSet::Er(rows) => generate::er::generate(rows, options),
        RowSet::Gantt(rows) => generate::gantt::generate(rows, options),
        RowSet::Pie(rows) => generate::pie::generate(rows, options),
        RowSet::Mindmap(rows) => generate::mindmap::generate(rows, options),
        RowSet::Timeline(rows) => generate::timeline::generate(rows, options),
    };

    trace!(lines_len = markup.lines().count(); "Markup generated");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_row_set_compiles_to_empty_string() {
        for kind in DiagramKind::ALL {
            let rows = RowSet::seed(kind, 0);
            assert_eq!(compile(&rows, &Options::default()), "", "kind: {kind}");
        }
    }

    #[test]
    fn test_seed_rows_compile_to_empty_string() {
        // Seed rows carry family defaults but no user content, so every
        // family's completeness predicate rejects them.
        for kind in DiagramKind::ALL {
            let rows = RowSet::seed(kind, 3);
            assert_eq!(compile(&rows, &Options::default()), "", "kind: {kind}");
        }
    }

    #[test]
    fn test_compile_is_deterministic() {
        for template in DiagramKind::ALL.iter().flat_map(|kind| templates::templates(*kind)) {
            let options = Options::default();
            let first = compile(&template.rows, &options);
            let second = compile(&template.rows, &options);
            assert_eq!(first, second, "template: {}", template.id);
        }
    }
}
