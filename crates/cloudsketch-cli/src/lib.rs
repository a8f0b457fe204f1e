//! CLI logic for the Cloudsketch diagram generator.
//!
//! Generates the three diagrams and the HTML report in sequence, printing
//! one status line per written file followed by a summary.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use cloudsketch::{Artifact, ArtifactKind, CloudsketchError, Generator, export::OutputFormat};

/// Status line announcing a written file.
pub fn status_line(artifact: &Artifact) -> String {
    let verb = match artifact.kind() {
        ArtifactKind::Diagram => "created",
        ArtifactKind::Report => "generated",
    };
    format!("✅ {} {verb}: {}", artifact.label(), artifact.file_name())
}

const REPORT_HINT: &str = "  3. The HTML report contains all details about the pipeline";

/// Summary printed once every file is written.
///
/// DOT sources get a Graphviz command line instead of the image viewer hint.
pub fn summary(artifacts: &[Artifact], format: OutputFormat) -> String {
    let mut lines = vec![
        String::new(),
        "🎯 All diagrams and reports generated successfully!".to_string(),
        String::new(),
        "Files created:".to_string(),
    ];
    lines.extend(
        artifacts
            .iter()
            .map(|a| format!("  • {} - {}", a.file_name(), a.summary())),
    );

    let diagram = artifacts.iter().find(|a| a.kind() == ArtifactKind::Diagram);
    let report = artifacts
        .iter()
        .find(|a| a.kind() == ArtifactKind::Report)
        .map(Artifact::file_name)
        .unwrap_or_default();

    lines.push(String::new());
    lines.push("📋 To view the diagrams:".to_string());
    let extension = format.extension().to_uppercase();
    if format.is_image() {
        lines.push(format!("  1. Open the {extension} files in any image viewer"));
    } else {
        let stem = diagram
            .and_then(|a| a.path().file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "diagram".to_string());
        lines.push(format!(
            "  1. Render the {extension} files with Graphviz: dot -Tpng {stem}.dot -o {stem}.png"
        ));
    }
    lines.push(format!("  2. Open {report} in a web browser"));
    lines.push(REPORT_HINT.to_string());

    lines.join("\n")
}

/// Run the Cloudsketch CLI application
///
/// Loads the configuration, applies command-line overrides, then generates
/// every output file.
///
/// # Errors
///
/// Returns `CloudsketchError` for:
/// - Configuration loading errors
/// - A missing Graphviz installation
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), CloudsketchError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        app_config = app_config.with_format(format);
    }
    if let Some(dir) = &args.output_dir {
        app_config = app_config.with_output_dir(dir);
    }

    info!(
        format:% = app_config.render().format(),
        output_dir:? = app_config.output().directory();
        "Generating diagrams"
    );

    println!("🎨 Generating AWS CI/CD Pipeline Architecture Diagrams...");

    let generator = Generator::new(app_config);
    let artifacts = generator.generate(|artifact| println!("{}", status_line(artifact)))?;

    let format = generator.config().render().format();
    println!("{}", summary(&artifacts, format));

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use cloudsketch::{config::AppConfig, export::OutputFormat};

    use super::*;

    fn dot_artifacts(dir: &Path) -> Vec<Artifact> {
        let config = AppConfig::default()
            .with_format(OutputFormat::Dot)
            .with_output_dir(dir);
        Generator::new(config).generate(|_| {}).unwrap()
    }

    #[test]
    fn test_status_lines() {
        let dir = tempfile::tempdir().unwrap();
        let lines: Vec<String> = dot_artifacts(dir.path()).iter().map(status_line).collect();

        assert_eq!(
            lines,
            [
                "✅ Main architecture diagram created: webapp_demo_architecture.dot",
                "✅ Cost breakdown diagram created: aws_free_tier_costs.dot",
                "✅ Deployment flow diagram created: deployment_flow.dot",
                "✅ HTML report generated: pipeline_architecture_report.html",
            ]
        );
    }

    #[test]
    fn test_summary_lists_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let text = summary(&dot_artifacts(dir.path()), OutputFormat::Dot);

        for line in [
            "  • webapp_demo_architecture.dot - Main architecture diagram",
            "  • aws_free_tier_costs.dot - Cost breakdown visualization",
            "  • deployment_flow.dot - CI/CD deployment flow",
            "  • pipeline_architecture_report.html - Comprehensive HTML report",
            "  1. Render the DOT files with Graphviz: \
             dot -Tpng webapp_demo_architecture.dot -o webapp_demo_architecture.png",
        ] {
            assert!(text.contains(line), "missing `{line}` in:\n{text}");
        }
        assert!(!text.contains("image viewer"));
    }

    #[test]
    fn test_summary_for_images_points_to_viewer() {
        let dir = tempfile::tempdir().unwrap();
        let text = summary(&dot_artifacts(dir.path()), OutputFormat::Svg);

        assert!(text.contains("  1. Open the SVG files in any image viewer"));
        assert!(!text.contains("dot -Tpng"));
    }
}
