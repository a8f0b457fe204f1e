//! Diagram exporters.
//!
//! An [`Exporter`] turns a [`Diagram`] into the bytes of one output file.
//! Layout is never computed here: the Graphviz exporter hands the DOT
//! description to the `dot` executable, the DOT exporter writes the
//! description itself.

pub mod graphviz;

use std::{fmt, str::FromStr};

use serde::Deserialize;

use cloudsketch_core::diagram::Diagram;

use crate::config::RenderConfig;

pub use graphviz::{DotExporter, GraphvizExporter};

/// File format of a rendered diagram.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raster image rendered by Graphviz (default)
    #[default]
    Png,
    /// Vector image rendered by Graphviz
    Svg,
    /// Graphviz source text, no backend required
    Dot,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Dot => "dot",
        }
    }

    /// Whether a browser can show the file inline in an `<img>` element.
    pub fn is_image(self) -> bool {
        matches!(self, Self::Png | Self::Svg)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "dot" | "gv" => Ok(Self::Dot),
            _ => Err(format!("invalid output format `{s}`, valid values: png, svg, dot")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Converts a diagram description into the contents of an output file.
pub trait Exporter {
    /// Format of the bytes returned by [`Exporter::export`].
    fn format(&self) -> OutputFormat;

    /// Checks that whatever the exporter delegates to is available.
    ///
    /// Called once before any file is written so a missing backend leaves
    /// no partial output behind.
    fn check_available(&self) -> Result<(), Error> {
        Ok(())
    }

    fn export(&self, diagram: &Diagram) -> Result<Vec<u8>, Error>;
}

/// Picks the exporter matching the configured format.
pub fn exporter_for(config: &RenderConfig) -> Box<dyn Exporter> {
    match config.format() {
        OutputFormat::Dot => Box::new(DotExporter::new(config.dpi())),
        format => Box::new(GraphvizExporter::new(format, config.dpi())),
    }
}

#[derive(Debug)]
pub enum Error {
    /// The rendering backend could not be started at all.
    MissingBackend(std::io::Error),
    Render(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBackend(err) => write!(f, "Rendering backend unavailable: {err}"),
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingBackend(err) | Self::Io(err) => Some(err),
            Self::Render(_) => None,
        }
    }
}
