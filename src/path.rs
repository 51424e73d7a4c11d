//! Route and path utilities for page generation

use anyhow::{Result, bail};
use std::path::{Component, Path, PathBuf};

/// Normalizes a site path prefix.
///
/// Surrounding slashes and whitespace are dropped so that both `blog/` and
/// `/blog` become `/blog`. An empty or slash-only prefix means the site is
/// served from the domain root.
///
/// # Arguments
///
/// * `prefix`: Raw prefix as configured
///
/// # Returns
///
/// Empty string or a prefix with one leading slash and no trailing slash
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Returns the pathname of the site home page.
pub fn root_path(prefix: &str) -> String {
    format!("{}/", prefix)
}

/// Applies the path prefix to a site internal link target.
///
/// Targets that are not root relative (external URLs, fragments, relative
/// paths) are returned unchanged.
pub fn with_prefix(prefix: &str, to: &str) -> String {
    if to.starts_with('/') && !to.starts_with("//") {
        format!("{}{}", prefix, to)
    } else {
        to.to_string()
    }
}

/// Maps a Markdown source path to the route pathname it is served at.
///
/// `index.md` files stand for their directory; every other file gets a
/// directory of its own named after the file stem.
///
/// # Arguments
///
/// * `relative`: Source path relative to the content directory
///
/// # Returns
///
/// Route pathname with leading and trailing slash, without path prefix
pub fn route_for(relative: &Path) -> String {
    let mut segments: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if let Some(stem) = relative.file_stem().map(|s| s.to_string_lossy())
        && stem != "index"
    {
        segments.push(stem.into_owned());
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

/// Maps a route pathname to the HTML file that serves it.
pub fn output_file_for(route: &str) -> PathBuf {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        PathBuf::from(trimmed).join("index.html")
    }
}

/// Calculates how many `../` prefixes lead from a route back to the site root.
pub fn route_depth(route: &str) -> usize {
    route.split('/').filter(|s| !s.is_empty()).count()
}

/// Validates that a content path stays inside the content directory.
///
/// # Errors
///
/// Returns error if path contains ".." or is absolute
pub fn validate_content_path(path: &Path) -> Result<()> {
    if path.is_absolute() || path.has_root() {
        bail!("Path is absolute, must be relative: {}", path.display());
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        bail!("Path contains directory traversal: {}", path.display());
    }
    Ok(())
}
