//! Error adapter for converting CloudsketchError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Each variant gets
//! a diagnostic code and a remediation hint rendered as `help`.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use cloudsketch::CloudsketchError;

/// Shown when the Graphviz executable cannot be started.
pub const INSTALL_HINT: &str = "Install Graphviz: https://graphviz.org/download/";

/// Shown for every other failure.
pub const GENERIC_HINT: &str = "Make sure Graphviz is installed and `dot` is on your PATH";

/// Adapter exposing a [`CloudsketchError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a CloudsketchError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CloudsketchError::MissingBackend(_) => "cloudsketch::missing_backend",
            CloudsketchError::Io(_) => "cloudsketch::io",
            CloudsketchError::Diagram(_) => "cloudsketch::diagram",
            CloudsketchError::Render(_) => "cloudsketch::render",
            CloudsketchError::Config(_) => "cloudsketch::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CloudsketchError::MissingBackend(_) => INSTALL_HINT,
            CloudsketchError::Config(_) => {
                "Check the configuration file, or remove it to use the defaults"
            }
            _ => GENERIC_HINT,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Render `err` as a graphical miette report.
pub fn render_report(err: &CloudsketchError) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, &ErrorAdapter(err))
        .expect("Writing to String buffer is infallible");
    writer
}
