//! tabmaid Core Types and Definitions
//!
//! This crate provides the foundational types for the tabmaid markup
//! compiler. It includes:
//!
//! - **Diagram kinds**: The closed roster of supported diagram families
//!   ([`kind::DiagramKind`])
//! - **Rows**: Typed per-family row records and the [`row::RowSet`] union
//! - **Options**: The compilation options record ([`options::Options`])
//! - **Schemas**: Column metadata for row-editing surfaces ([`schema`] module)
//! - **Templates**: Starter row sets ([`template::Template`])

pub mod error;
pub mod kind;
pub mod options;
pub mod row;
pub mod schema;
pub mod template;

pub use error::TabmaidError;
pub use kind::DiagramKind;
pub use options::{Direction, Options, Theme};
pub use row::RowSet;
