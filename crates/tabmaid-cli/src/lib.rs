//! CLI logic for the tabmaid diagram tool.
//!
//! Reads a JSON row document, compiles it into diagram markup, and writes
//! the markup to stdout or a file.

pub mod config;
pub mod document;

mod args;
mod error;

pub use args::Args;
pub use error::CliError;

use std::{
    fs,
    io::{self, Write},
};

use log::{info, warn};

use tabmaid::Options;

use config::AppConfig;
use document::Document;

/// Run the tabmaid CLI application
///
/// Processes the input row document through the compiler and writes the
/// resulting markup to the output target.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Row document parsing errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(input_path = args.input; "Compiling row document");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and parse the row document
    let source = fs::read_to_string(&args.input)?;
    let document = Document::from_json(&source)?;

    // Compile with the resolved options
    let options = resolve_options(args, &document, &app_config);
    let markup = tabmaid::compile(document.rows(), &options);

    if markup.is_empty() {
        warn!(kind = document.rows().kind().id(); "No complete rows; nothing to render");
    }

    // Write output
    match &args.output {
        Some(path) => {
            fs::write(path, &markup)?;
            info!(output_file = path; "Markup written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(markup.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// Merges the option sources.
///
/// Precedence: command-line flag, then the document's `options` object,
/// then the configuration file's `[defaults]`, then built-in defaults.
fn resolve_options(args: &Args, document: &Document, config: &AppConfig) -> Options {
    let defaults = config.defaults();
    let overrides = document.options();

    Options {
        direction: args
            .direction
            .or(overrides.direction())
            .or(defaults.direction())
            .unwrap_or_default(),
        swimlanes: if args.swimlanes {
            true
        } else {
            overrides.swimlanes().or(defaults.swimlanes()).unwrap_or(false)
        },
        theme: args
            .theme
            .or(overrides.theme())
            .or(defaults.theme())
            .unwrap_or_default(),
    }
}
