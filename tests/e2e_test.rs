//! End-to-end tests for the depsite binary workflow.

mod common;

use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Tests full binary execution generates valid output.
#[test]
fn test_full_workflow_e2e() -> Result<()> {
    // Arrange
    let content = common::create_sample_site()?;
    let output = TempDir::new()?;

    // Act
    let status = Command::new(env!("CARGO_BIN_EXE_depsite"))
        .arg(content.path())
        .arg("-o")
        .arg(output.path())
        .args(["--title", "E2E Site", "--year", "2019", "--no-open"])
        .status()?;

    // Assert
    assert!(status.success(), "Binary should succeed");

    let home = fs::read_to_string(output.path().join("index.html"))?;
    assert!(home.contains(">E2E Site</a>"));
    assert!(home.contains("© E2E Site 2019, Built with"));
    assert!(output.path().join("about/index.html").exists());
    assert!(output.path().join("assets/site.css").exists());
    Ok(())
}

/// Tests an empty content directory warns on stderr by default.
#[test]
fn test_empty_content_dir_warns_e2e() -> Result<()> {
    // Arrange
    let content = common::create_content_dir()?;
    let output = TempDir::new()?;

    // Act
    let result = Command::new(env!("CARGO_BIN_EXE_depsite"))
        .arg(content.path())
        .arg("-o")
        .arg(output.path())
        .arg("--no-open")
        .env_remove("RUST_LOG")
        .output()?;

    // Assert
    assert!(result.status.success(), "Empty site should still build");
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("No Markdown pages found"),
        "Warning should reach stderr: {}",
        stderr
    );
    Ok(())
}

/// Tests binary rejects a missing content directory.
#[test]
fn test_missing_content_dir_e2e() -> Result<()> {
    // Arrange
    let output = TempDir::new()?;
    let missing = output.path().join("no-content-here");

    // Act
    let result = Command::new(env!("CARGO_BIN_EXE_depsite"))
        .arg(&missing)
        .arg("-o")
        .arg(output.path().join("public"))
        .arg("--no-open")
        .output()?;

    // Assert
    assert!(!result.status.success(), "Missing content should fail");
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("Content directory does not exist"),
        "Should explain failure: {}",
        stderr
    );
    Ok(())
}
