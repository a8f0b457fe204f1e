use std::{fs, path::Path};

use tempfile::tempdir;

use cloudsketch::export::OutputFormat;
use cloudsketch_cli::Args;

fn write_config(dir: &Path, body: &str) -> String {
    let path = dir.join("config.toml");
    fs::write(&path, body).expect("Failed to write config file");
    path.to_string_lossy().to_string()
}

fn sorted_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read output directory")
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn e2e_smoke_test_dot_outputs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("out");

    let args = Args {
        output_dir: Some(output_dir.clone()),
        format: Some(OutputFormat::Dot),
        config: Some(write_config(temp_dir.path(), "")),
        log_level: "off".to_string(),
    };

    cloudsketch_cli::run(&args).expect("DOT generation should succeed");

    assert_eq!(
        sorted_entries(&output_dir),
        [
            "aws_free_tier_costs.dot",
            "deployment_flow.dot",
            "pipeline_architecture_report.html",
            "webapp_demo_architecture.dot",
        ]
    );

    // Running again overwrites in place
    cloudsketch_cli::run(&args).expect("Second run should succeed");
    assert_eq!(sorted_entries(&output_dir).len(), 4);
}

#[test]
fn e2e_smoke_test_config_file_selects_format() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("from-config");
    let config = write_config(
        temp_dir.path(),
        &format!(
            "[render]\nformat = \"dot\"\n\n[output]\ndirectory = {:?}\n",
            output_dir.to_string_lossy()
        ),
    );

    let args = Args {
        output_dir: None,
        format: None,
        config: Some(config),
        log_level: "off".to_string(),
    };

    cloudsketch_cli::run(&args).expect("Generation from config file should succeed");

    assert!(output_dir.join("deployment_flow.dot").is_file());
    let report = output_dir.join("pipeline_architecture_report.html");
    assert!(report.is_file());
}

#[test]
fn e2e_smoke_test_missing_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let absent = temp_dir.path().join("absent.toml");

    let args = Args {
        output_dir: Some(temp_dir.path().join("out")),
        format: Some(OutputFormat::Dot),
        config: Some(absent.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    let err = cloudsketch_cli::run(&args).expect_err("Missing config file must fail");

    assert!(err.to_string().contains("Missing configuration file"));
    assert!(!temp_dir.path().join("out").exists());
}
