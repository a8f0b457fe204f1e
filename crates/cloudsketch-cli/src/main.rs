//! Cloudsketch CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use cloudsketch_cli::{Args, error_adapter::render_report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Cloudsketch");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = cloudsketch_cli::run(&args) {
        if err.is_missing_backend() {
            println!("❌ Error: Missing Graphviz rendering backend");
        } else {
            println!("❌ Error generating diagrams: {err}");
        }

        error!(err:%; "Generation failed");
        eprintln!("{}", render_report(&err));

        process::exit(1);
    }

    info!("Completed successfully");
}
