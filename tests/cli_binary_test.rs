//! Binary integration tests for CLI commands
//!
//! These tests run the actual model-select binary to exercise the CLI code paths.

use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn model_select_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_model-select"))
}

fn config_file(contents: &str) -> Result<NamedTempFile, std::io::Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_cli_help() -> TestResult {
    let output = model_select_bin().arg("--help").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Model selection dropdown"));
    assert!(stdout.contains("list"));
    Ok(())
}

#[test]
fn test_cli_version() -> TestResult {
    let output = model_select_bin().arg("--version").output()?;
    assert!(output.status.success());
    Ok(())
}

#[test]
fn test_cli_list_builtin_models() -> TestResult {
    let config = config_file("{}")?;
    let output = model_select_bin()
        .arg("list")
        .arg("--config")
        .arg(config.path())
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "claude-sonnet-4-5\tSonnet 4.5\nclaude-opus-4-5\tOpus 4.5\n"
    );
    Ok(())
}

#[test]
fn test_cli_list_configured_models_in_order() -> TestResult {
    let config = config_file(
        r#"{"models": [{"id": "b", "label": "Beta"}, {"id": "a", "label": "Alpha"}]}"#,
    )?;
    let output = model_select_bin()
        .args(["--config"])
        .arg(config.path())
        .arg("list")
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "b\tBeta\na\tAlpha\n");
    Ok(())
}

#[test]
fn test_cli_list_rejects_empty_registry() -> TestResult {
    let config = config_file(r#"{"models": []}"#)?;
    let output = model_select_bin()
        .arg("list")
        .arg("--config")
        .arg(config.path())
        .output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config"));
    Ok(())
}

#[test]
fn test_cli_unknown_subcommand_shows_help() -> TestResult {
    let output = model_select_bin().arg("bogus").output()?;
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    Ok(())
}
