//! CLI error type.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors the CLI can surface to the user.
///
/// Row *content* never appears here: incomplete rows are filtered by the
/// compiler, and an empty compilation result is reported as "nothing to
/// render", not as an error.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse row document: {0}")]
    #[diagnostic(help("expected {{ \"diagram\": \"<kind>\", \"rows\": [...] }}"))]
    Document(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
