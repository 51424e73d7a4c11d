//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary content directories with
//! Markdown pages used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates an empty temporary content directory.
pub fn create_content_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes file to content directory, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(content_dir: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = content_dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Writes a page with `title` and optional `description` front matter.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_page(
    content_dir: &Path,
    path: &str,
    title: &str,
    description: Option<&str>,
    body: &str,
) -> Result<()> {
    let mut source = format!("---\ntitle: {}\n", title);
    if let Some(description) = description {
        source.push_str(&format!("description: {}\n", description));
    }
    source.push_str("---\n\n");
    source.push_str(body);
    write_file(content_dir, path, &source)
}

/// Creates a content directory with a home page, an about page and a post.
///
/// # Errors
///
/// Returns error if any page cannot be written
pub fn create_sample_site() -> Result<TempDir> {
    let dir = create_content_dir()?;
    write_file(dir.path(), "index.md", "Dependency checks, explained.\n")?;
    write_page(dir.path(), "about.md", "About", Some("Who we are"), "We check deps.\n")?;
    write_page(
        dir.path(),
        "posts/first-post/index.md",
        "First post",
        Some("Hello there"),
        "```rust\nfn main() {}\n```\n",
    )?;
    Ok(dir)
}
