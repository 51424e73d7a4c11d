//! Static site generation from a content directory.
//!
//! Every Markdown file under the content directory becomes one page. The
//! file's route decides where the page is written and which header variant
//! the shell renders. The home page additionally lists every other page.

use anyhow::{Context, Result, bail};
use maud::{Markup, PreEscaped, html};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::assets::{SITE_CSS, write_css_assets};
use crate::clock::Clock;
use crate::components::document::{DocumentHead, page_wrapper};
use crate::components::layout::{LayoutProps, Location, SiteContext, layout};
use crate::components::link::internal_link;
use crate::markdown::MarkdownRenderer;
use crate::path::{
    output_file_for, route_depth, route_for, validate_content_path, with_prefix,
};
use crate::style::Style;

/// One page loaded from the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Source path relative to the content directory
    pub source: PathBuf,
    /// Route pathname without path prefix
    pub route: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Rendered Markdown body
    pub body_html: String,
}

impl Page {
    /// Returns true for the page served at the site root.
    pub fn is_home(&self) -> bool {
        self.route == "/"
    }

    /// Title from front matter, falling back to the last route segment.
    pub fn display_title(&self) -> &str {
        if let Some(title) = &self.title {
            return title;
        }
        self.route
            .trim_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("Home")
    }
}

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of HTML pages written
    pub pages: usize,
    /// Path of the generated home page
    pub index: PathBuf,
}

/// Lists Markdown sources under the content directory.
///
/// Hidden entries and entries starting with `_` are skipped, directories
/// included. Paths are returned relative to the content directory in file
/// name order.
///
/// # Errors
///
/// Returns error if the directory cannot be walked
pub fn discover(content_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    let walker = WalkDir::new(content_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry.file_name()));

    for entry in walker {
        let entry = entry
            .with_context(|| format!("Failed to walk content directory: {}", content_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            debug!(path = %path.display(), "Skipping non-Markdown file");
            continue;
        }

        let relative = path
            .strip_prefix(content_dir)
            .with_context(|| format!("Path outside content directory: {}", path.display()))?;
        sources.push(relative.to_path_buf());
    }

    Ok(sources)
}

fn is_ignored(name: &std::ffi::OsStr) -> bool {
    name.to_str()
        .is_some_and(|n| n.starts_with('.') || n.starts_with('_'))
}

/// Reads and renders one Markdown source.
///
/// # Arguments
///
/// * `content_dir`: Content directory root
/// * `relative`: Source path relative to the content directory
/// * `renderer`: Markdown renderer configured for the site
///
/// # Errors
///
/// Returns error if the path escapes the content directory, the file cannot
/// be read, or rendering fails
pub fn load_page(
    content_dir: &Path,
    relative: &Path,
    renderer: &MarkdownRenderer<'_>,
) -> Result<Page> {
    validate_content_path(relative)?;

    let source = content_dir.join(relative);
    let content = fs::read_to_string(&source)
        .with_context(|| format!("Failed to read page: {}", source.display()))?;
    let rendered = renderer
        .render(&content)
        .with_context(|| format!("Failed to render page: {}", source.display()))?;

    Ok(Page {
        source: relative.to_path_buf(),
        route: route_for(relative),
        title: rendered.front_matter.title,
        description: rendered.front_matter.description,
        body_html: rendered.html,
    })
}

/// Renders a complete HTML document for a page
///
/// The page body goes through the shell with the page's prefixed route as
/// location. Home pages get a list of every other page after their body.
///
/// # Arguments
///
/// * `site`: Site configuration
/// * `page`: Page to render
/// * `pages`: All pages of the site, used for the home page listing
/// * `clock`: Source of the footer year
///
/// # Returns
///
/// Complete HTML document
pub fn render_page(site: &SiteContext, page: &Page, pages: &[Page], clock: &dyn Clock) -> Markup {
    let location = Location::new(with_prefix(&site.path_prefix, &page.route));

    let children = if page.is_home() {
        home_content(site, page, pages)
    } else {
        article_content(page)
    };

    let shell = layout(
        site,
        LayoutProps {
            location: &location,
            title: &site.site_name,
            children,
        },
        clock,
    );

    let document_title = if page.is_home() {
        site.site_name.clone()
    } else {
        format!("{} | {}", page.display_title(), site.site_name)
    };
    let stylesheets = [format!(
        "{}assets/{}",
        "../".repeat(route_depth(&page.route)),
        SITE_CSS
    )];

    page_wrapper(
        &DocumentHead {
            title: &document_title,
            description: page.description.as_deref(),
            stylesheets: &stylesheets,
        },
        shell,
    )
}

fn article_content(page: &Page) -> Markup {
    html! {
        article {
            @if let Some(title) = &page.title {
                h1 { (title) }
            }
            (PreEscaped(&page.body_html))
        }
    }
}

fn home_content(site: &SiteContext, page: &Page, pages: &[Page]) -> Markup {
    let link_style = Style::new().set("box-shadow", "none");
    let heading_style = Style::new().set("margin-bottom", site.typography.rhythm(0.25));
    let others: Vec<&Page> = pages.iter().filter(|p| !p.is_home()).collect();

    html! {
        (PreEscaped(&page.body_html))
        @if !others.is_empty() {
            ul class="page-list" {
                @for other in others {
                    li {
                        h3 style=(heading_style) {
                            (internal_link(&site.path_prefix, &other.route, &link_style, other.display_title()))
                        }
                        @if let Some(description) = &other.description {
                            p class="page-description" { (description) }
                        }
                    }
                }
            }
        }
    }
}

/// Builds the whole site
///
/// Loads every page, checks that routes are unique, writes the stylesheet
/// and one `index.html` per route. A home page is synthesized when the
/// content directory has no root `index.md`.
///
/// # Arguments
///
/// * `content_dir`: Directory holding Markdown pages
/// * `output_dir`: Directory receiving the generated site
/// * `site`: Site configuration
/// * `clock`: Source of the footer year
///
/// # Returns
///
/// Build summary
///
/// # Errors
///
/// Returns error if any page cannot be loaded, two sources map to the same
/// route, or writing output fails
pub fn build(
    content_dir: &Path,
    output_dir: &Path,
    site: &SiteContext,
    clock: &dyn Clock,
) -> Result<BuildReport> {
    let renderer = MarkdownRenderer::with_path_prefix(site.path_prefix.clone());

    let mut pages = Vec::new();
    let mut routes: HashMap<String, PathBuf> = HashMap::new();
    for relative in discover(content_dir)? {
        let page = load_page(content_dir, &relative, &renderer)?;
        if let Some(existing) = routes.insert(page.route.clone(), page.source.clone()) {
            bail!(
                "Pages {} and {} both map to route {}",
                existing.display(),
                page.source.display(),
                page.route
            );
        }
        pages.push(page);
    }

    if pages.is_empty() {
        warn!(content = %content_dir.display(), "No Markdown pages found");
    }

    if !pages.iter().any(Page::is_home) {
        debug!("No index.md, synthesizing home page");
        pages.insert(
            0,
            Page {
                source: PathBuf::new(),
                route: "/".to_string(),
                title: None,
                description: None,
                body_html: String::new(),
            },
        );
    }

    let assets_dir = output_dir.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    for page in &pages {
        let target = output_dir.join(output_file_for(&page.route));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let html = render_page(site, page, &pages, clock);
        fs::write(&target, html.into_string())
            .with_context(|| format!("Failed to write page: {}", target.display()))?;
        debug!(route = %page.route, path = %target.display(), "Wrote page");
    }

    info!(pages = pages.len(), output = %output_dir.display(), "Site generated");

    Ok(BuildReport {
        pages: pages.len(),
        index: output_dir.join("index.html"),
    })
}
