//! Command-line argument definitions for the tabmaid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, option overrides, and logging verbosity.

use clap::Parser;

use tabmaid::{Direction, Theme};

/// Command-line arguments for the tabmaid diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input row document (JSON)
    #[arg(help = "Path to the input row document (JSON)")]
    pub input: String,

    /// Path to the output markup file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the layout direction (td, lr)
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Group flowchart steps into per-assignee swimlanes
    #[arg(long)]
    pub swimlanes: bool,

    /// Override the renderer theme (default, forest, dark, neutral)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
