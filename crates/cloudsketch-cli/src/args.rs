//! Command-line argument definitions for the Cloudsketch CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Every argument is optional: a bare invocation generates
//! PNG diagrams and the report into the current directory.

use std::path::PathBuf;

use clap::Parser;

use cloudsketch::export::OutputFormat;

/// Generate the webapp-demo CI/CD architecture diagrams and HTML report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory receiving the diagrams and the report
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Diagram file format (png, svg, dot)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
