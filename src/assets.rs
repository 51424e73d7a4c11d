//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, css_for_theme_with_class_style};

use crate::markdown::HIGHLIGHT_CLASS_PREFIX;

const BASE: &str = include_str!("../assets/base.css");

/// Name of the bundled stylesheet inside the assets directory.
pub const SITE_CSS: &str = "site.css";

/// Syntect theme used for code blocks, close to Prism's "tomorrow night".
pub const CODE_THEME: &str = "base16-ocean.dark";

/// Writes the bundled stylesheet to the assets directory
///
/// # Errors
///
/// Returns error if the code theme is missing or the file cannot be written
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    let code_css = code_theme_css(CODE_THEME)?;
    write_bundled(assets_dir, SITE_CSS, &[BASE, &code_css])
}

/// Generates CSS for highlighted code blocks from a syntect theme.
///
/// # Errors
///
/// Returns error if the theme is unknown or CSS generation fails
pub fn code_theme_css(theme_name: &str) -> Result<String> {
    let themes = ThemeSet::load_defaults();
    let theme = themes
        .themes
        .get(theme_name)
        .with_context(|| format!("Unknown code theme: {}", theme_name))?;

    css_for_theme_with_class_style(
        theme,
        ClassStyle::SpacedPrefixed {
            prefix: HIGHLIGHT_CLASS_PREFIX,
        },
    )
    .with_context(|| format!("Failed to generate CSS for theme: {}", theme_name))
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
