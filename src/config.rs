//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::components::footer::Attribution;
use crate::components::layout::SiteContext;

/// Command line configuration for depsite.
#[derive(Debug, Clone, Parser)]
#[command(name = "depsite", version, about, long_about = None)]
pub struct Config {
    /// Content directory holding Markdown pages
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "public")]
    pub output: PathBuf,

    /// Site title shown in the header and footer
    #[arg(long, default_value = "DepChecker")]
    pub title: String,

    /// Path prefix when the site is served from a subdirectory
    #[arg(long, default_value = "")]
    pub path_prefix: String,

    /// Pin the footer year instead of reading the system clock
    #[arg(long)]
    pub year: Option<i32>,

    /// Name of the project credited in the footer
    #[arg(long, default_value = "Gatsby")]
    pub credit_name: String,

    /// Homepage of the project credited in the footer
    #[arg(long, default_value = "https://www.gatsbyjs.org")]
    pub credit_url: String,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist, the title is
    /// blank, or the output directory is the content directory.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        if self.title.trim().is_empty() {
            bail!("Site title must not be empty");
        }

        if self.output_is_content_dir() {
            bail!(
                "Output directory must differ from content directory: {}",
                self.output.display()
            );
        }

        Ok(())
    }

    /// Returns true if the output path names the content directory.
    ///
    /// Both paths are canonicalized, so `./content` and symlinked aliases
    /// match. An output path that does not exist yet cannot be the content
    /// directory, which does.
    fn output_is_content_dir(&self) -> bool {
        match (self.output.canonicalize(), self.content.canonicalize()) {
            (Ok(output), Ok(content)) => output == content,
            _ => self.output == self.content,
        }
    }

    /// Builds the site context the page shell renders with.
    pub fn site_context(&self) -> SiteContext {
        SiteContext::new(self.title.clone())
            .with_path_prefix(&self.path_prefix)
            .with_attribution(Attribution {
                name: self.credit_name.clone(),
                url: self.credit_url.clone(),
            })
    }

    /// Returns the clock used for footer years.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.year {
            Some(year) => Box::new(FixedClock(year)),
            None => Box::new(SystemClock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(content: PathBuf) -> Config {
        Config {
            content,
            output: PathBuf::from("public"),
            title: "DepChecker".to_string(),
            path_prefix: String::new(),
            year: None,
            credit_name: "Gatsby".to_string(),
            credit_url: "https://www.gatsbyjs.org".to_string(),
            no_open: true,
        }
    }

    #[test]
    fn test_parse_defaults() {
        // Act
        let config = <Config as Parser>::parse_from(["depsite"]);

        // Assert
        assert_eq!(config.content, PathBuf::from("content"));
        assert_eq!(config.output, PathBuf::from("public"));
        assert_eq!(config.title, "DepChecker");
        assert_eq!(config.path_prefix, "");
        assert_eq!(config.year, None);
        assert!(!config.no_open);
    }

    #[test]
    fn test_parse_all_flags() {
        // Act
        let config = <Config as Parser>::parse_from([
            "depsite",
            "pages",
            "-o",
            "dist",
            "--title",
            "Notes",
            "--path-prefix",
            "/blog/",
            "--year",
            "2019",
            "--no-open",
        ]);

        // Assert
        assert_eq!(config.content, PathBuf::from("pages"));
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.title, "Notes");
        assert_eq!(config.year, Some(2019));
        assert!(config.no_open);
        assert_eq!(config.site_context().path_prefix, "/blog");
    }

    #[test]
    fn test_validate_existing_content_dir() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let config = config_for(dir.path().to_path_buf());

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Existing directory should be valid");
    }

    #[test]
    fn test_validate_missing_content_dir() {
        // Arrange
        let config = config_for(PathBuf::from("/nonexistent/depsite/content"));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_blank_title() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let mut config = config_for(dir.path().to_path_buf());
        config.title = "   ".to_string();

        // Act & Assert
        assert!(config.validate().is_err(), "Blank title should be rejected");
    }

    #[test]
    fn test_validate_output_equals_content() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let mut config = config_for(dir.path().to_path_buf());
        config.output = dir.path().to_path_buf();

        // Act & Assert
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_output_aliases_content() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let content = dir.path().join("content");
        std::fs::create_dir(&content).expect("Should create content dir");
        let mut config = config_for(content.clone());
        config.output = content.join(".").join("..").join("content");

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Aliased output path should be rejected");
        assert!(result.unwrap_err().to_string().contains("must differ"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_output_symlink_to_content() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let content = dir.path().join("content");
        std::fs::create_dir(&content).expect("Should create content dir");
        let link = dir.path().join("public");
        std::os::unix::fs::symlink(&content, &link).expect("Should create symlink");
        let mut config = config_for(content);
        config.output = link;

        // Act & Assert
        assert!(config.validate().is_err(), "Symlinked output should be rejected");
    }

    #[test]
    fn test_validate_missing_output_dir() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let mut config = config_for(dir.path().to_path_buf());
        config.output = dir.path().join("public");

        // Act & Assert
        assert!(config.validate().is_ok(), "Fresh output dir should be valid");
    }

    #[test]
    fn test_site_context_from_config() {
        // Arrange
        let mut config = config_for(PathBuf::from("content"));
        config.credit_name = "depsite".to_string();
        config.credit_url = "https://example.com".to_string();

        // Act
        let site = config.site_context();

        // Assert
        assert_eq!(site.site_name, "DepChecker");
        assert_eq!(site.path_prefix, "");
        assert_eq!(site.attribution.name, "depsite");
        assert_eq!(site.attribution.url, "https://example.com");
    }

    #[test]
    fn test_clock_pinned_year() {
        // Arrange
        let mut config = config_for(PathBuf::from("content"));
        config.year = Some(2019);

        // Act & Assert
        assert_eq!(config.clock().year(), 2019);
    }
}
