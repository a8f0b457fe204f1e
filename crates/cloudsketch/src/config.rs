//! Configuration types for Cloudsketch generation.
//!
//! This module provides configuration structures that control how diagrams
//! are rendered and where the outputs are written. All types implement
//! [`serde::Deserialize`] for loading from external sources; every field has
//! a default, so an empty document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and output settings.
//! - [`RenderConfig`] - Output format and resolution.
//! - [`OutputConfig`] - Destination directory.
//!
//! # Example
//!
//! ```
//! # use cloudsketch::{config::AppConfig, export::OutputFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.render().format(), OutputFormat::Png);
//! assert_eq!(config.output().directory().to_str(), Some("."));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::export::OutputFormat;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, output: OutputConfig) -> Self {
        Self { render, output }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Replaces the configured output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.render.format = format;
        self
    }

    /// Replaces the configured output directory.
    pub fn with_output_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output.directory = directory.into();
        self
    }
}

/// Render settings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RenderConfig {
    /// Format of the diagram files.
    #[serde(default)]
    format: OutputFormat,

    /// Raster resolution passed to Graphviz as the graph `dpi` attribute.
    #[serde(default)]
    dpi: Option<u32>,
}

impl RenderConfig {
    /// Creates rendering settings.
    pub fn new(format: OutputFormat, dpi: Option<u32>) -> Self {
        Self { format, dpi }
    }

    /// Output format of the diagram files.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Raster resolution, if one was configured.
    pub fn dpi(&self) -> Option<u32> {
        self.dpi
    }
}

/// Output location settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving every generated file.
    #[serde(default = "default_directory")]
    directory: PathBuf,
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

impl OutputConfig {
    /// Creates output settings writing into `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory receiving every generated file.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.render().format(), OutputFormat::Png);
        assert_eq!(config.render().dpi(), None);
        assert_eq!(config.output().directory(), Path::new("."));
    }

    #[test]
    fn test_full_document() {
        let config: AppConfig = toml::from_str(
            r#"
            [render]
            format = "svg"
            dpi = 150

            [output]
            directory = "docs/diagrams"
            "#,
        )
        .unwrap();

        assert_eq!(config.render().format(), OutputFormat::Svg);
        assert_eq!(config.render().dpi(), Some(150));
        assert_eq!(config.output().directory(), Path::new("docs/diagrams"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[render]\nformat = \"gif\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_format(OutputFormat::Dot)
            .with_output_dir("out");

        assert_eq!(config.render().format(), OutputFormat::Dot);
        assert_eq!(config.output().directory(), Path::new("out"));
    }
}
