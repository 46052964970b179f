//! Error types for tabmaid operations.
//!
//! Only caller mistakes are errors here: naming a diagram kind that does not
//! exist, or constructing rows with a field the family's schema does not
//! declare. Incomplete or malformed row *content* is never an error; the
//! compilers silently skip rows that are not complete enough to render.

use thiserror::Error;

use crate::kind::DiagramKind;

/// The main error type for tabmaid operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabmaidError {
    /// A diagram kind identifier did not match any supported family.
    #[error("unknown diagram kind `{0}`")]
    UnknownKind(String),

    /// A row carried a field name the family's schema does not declare.
    #[error("unknown field `{field}` for {kind} rows")]
    UnknownField { kind: DiagramKind, field: String },

    /// An option token (direction or theme) did not parse.
    #[error("unknown {option} `{value}`")]
    UnknownOption {
        option: &'static str,
        value: String,
    },
}
