//! Cloudsketch - architecture diagrams and a companion report for the
//! webapp-demo CI/CD pipeline.
//!
//! Three diagrams are described declaratively in [`catalog`], converted to
//! Graphviz and laid out by the `dot` executable, then referenced from a
//! static HTML report written next to them.

pub mod catalog;
pub mod config;
pub mod export;
pub mod report;

mod error;

pub use cloudsketch_core::{color, diagram, identifier, kind, style};

pub use error::CloudsketchError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use catalog::Blueprint;
use config::AppConfig;
use export::Exporter;
use report::Figure;

/// What a written file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Diagram,
    Report,
}

/// A file written by [`Generator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    path: PathBuf,
    kind: ArtifactKind,
    label: &'static str,
    summary: &'static str,
}

impl Artifact {
    /// Location of the written file, including the output directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without the output directory.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether the file is a diagram or the report.
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Status-line label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Description shown in the summary of created files.
    pub fn summary(&self) -> &'static str {
        self.summary
    }
}

/// Generates every diagram and the report into the configured directory.
///
/// # Examples
///
/// ```rust,no_run
/// use cloudsketch::{Generator, config::AppConfig, export::OutputFormat};
///
/// let config = AppConfig::default()
///     .with_format(OutputFormat::Svg)
///     .with_output_dir("docs");
/// let generator = Generator::new(config);
///
/// let artifacts = generator
///     .generate(|artifact| println!("wrote {}", artifact.path().display()))
///     .expect("generation failed");
/// assert_eq!(artifacts.len(), 4);
/// ```
pub struct Generator {
    config: AppConfig,
    exporter: Box<dyn Exporter>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Generator {
    /// Create a generator using the exporter matching the configured format.
    pub fn new(config: AppConfig) -> Self {
        let exporter = export::exporter_for(config.render());
        Self { config, exporter }
    }

    /// Create a generator with an explicit exporter.
    ///
    /// The exporter's [`Exporter::format`] decides the diagram file
    /// extensions, regardless of the configured format.
    pub fn with_exporter(config: AppConfig, exporter: Box<dyn Exporter>) -> Self {
        Self { config, exporter }
    }

    /// Configuration this generator was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Verify the rendering backend can be started.
    ///
    /// # Errors
    ///
    /// Returns [`CloudsketchError::MissingBackend`] when it cannot.
    pub fn check_backend(&self) -> Result<(), CloudsketchError> {
        self.exporter.check_available()?;
        debug!(format:% = self.exporter.format(); "Rendering backend available");
        Ok(())
    }

    /// Validate, render and write a single diagram.
    ///
    /// # Errors
    ///
    /// Returns `CloudsketchError` for invalid diagrams, rendering failures,
    /// or I/O errors while writing the file.
    pub fn render_diagram(&self, blueprint: &Blueprint) -> Result<Artifact, CloudsketchError> {
        let diagram = blueprint.diagram();
        diagram.validate()?;

        info!(diagram = diagram.name(); "Rendering diagram");
        let bytes = self.exporter.export(diagram)?;

        let path = self
            .output_dir()
            .join(blueprint.file_name(self.exporter.format()));
        fs::write(&path, &bytes)?;
        info!(path:? = path, bytes = bytes.len(); "Diagram written");

        Ok(Artifact {
            path,
            kind: ArtifactKind::Diagram,
            label: blueprint.label(),
            summary: blueprint.summary(),
        })
    }

    /// Write the HTML report referencing `figures`.
    ///
    /// # Errors
    ///
    /// Returns [`CloudsketchError::Io`] if the file cannot be written.
    pub fn write_report(&self, figures: &[Figure]) -> Result<Artifact, CloudsketchError> {
        let path = self.output_dir().join(report::REPORT_FILE_NAME);
        fs::write(&path, report::render(figures)?)?;
        info!(path:? = path; "Report written");

        Ok(Artifact {
            path,
            kind: ArtifactKind::Report,
            label: "HTML report",
            summary: "Comprehensive HTML report",
        })
    }

    /// Generate every diagram, then the report.
    ///
    /// The backend is checked before anything is written, so a missing
    /// backend leaves the output directory untouched. `on_step` is called
    /// after each file is written. Existing files are overwritten.
    ///
    /// # Errors
    ///
    /// Stops at the first failure and returns it; files written by earlier
    /// steps are kept.
    pub fn generate(
        &self,
        mut on_step: impl FnMut(&Artifact),
    ) -> Result<Vec<Artifact>, CloudsketchError> {
        self.check_backend()?;

        let blueprints = catalog::blueprints()?;
        fs::create_dir_all(self.output_dir())?;

        let format = self.exporter.format();
        let mut artifacts = Vec::with_capacity(blueprints.len() + 1);
        let mut figures = Vec::with_capacity(blueprints.len());

        for blueprint in &blueprints {
            let artifact = self.render_diagram(blueprint)?;
            on_step(&artifact);

            figures.push(Figure::new(blueprint.summary(), artifact.file_name(), format));
            artifacts.push(artifact);
        }

        let report = self.write_report(&figures)?;
        on_step(&report);
        artifacts.push(report);

        info!(count = artifacts.len(); "Generation complete");
        Ok(artifacts)
    }

    fn output_dir(&self) -> &Path {
        self.config.output().directory()
    }
}
