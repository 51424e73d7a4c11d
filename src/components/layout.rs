//! Page shell component
//!
//! The shell is the part every page shares: the site title header, the slot
//! holding page content, and the copyright footer. It is a pure function of
//! its inputs apart from the year printed in the footer, which comes from an
//! injected [`Clock`].

use maud::{Markup, html};

use super::footer::{Attribution, footer};
use super::header::{HeaderVariant, site_title};
use crate::clock::Clock;
use crate::path::{normalize_prefix, root_path};
use crate::style::Style;
use crate::typography::Typography;

/// Current navigation location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Pathname of the page being rendered, including the path prefix
    pub pathname: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }
}

/// Inputs of a single shell render.
///
/// `location` is a required reference: a render without a location cannot be
/// expressed, so callers guarantee it rather than the shell checking it.
#[derive(Debug, Clone)]
pub struct LayoutProps<'a> {
    pub location: &'a Location,
    pub title: &'a str,
    pub children: Markup,
}

/// Site wide settings the shell reads on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContext {
    /// Normalized path prefix, empty when served from the domain root
    pub path_prefix: String,
    /// Name printed in the copyright line
    pub site_name: String,
    pub attribution: Attribution,
    pub typography: Typography,
}

impl Default for SiteContext {
    fn default() -> Self {
        Self {
            path_prefix: String::new(),
            site_name: "DepChecker".to_string(),
            attribution: Attribution::default(),
            typography: Typography::default(),
        }
    }
}

impl SiteContext {
    /// Creates a context with default settings and the given site name.
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            ..Self::default()
        }
    }

    /// Sets the path prefix, normalizing it.
    pub fn with_path_prefix(mut self, prefix: &str) -> Self {
        self.path_prefix = normalize_prefix(prefix);
        self
    }

    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = attribution;
        self
    }

    /// Pathname of the home page, the path prefix plus a trailing slash.
    pub fn root_path(&self) -> String {
        root_path(&self.path_prefix)
    }
}

/// Renders the page shell around already rendered content
///
/// Chooses the header variant by comparing `props.location.pathname` with
/// the site root path, then composes header, content and footer inside a
/// centered container whose width and padding follow the vertical rhythm.
/// The content is inserted unmodified.
///
/// # Arguments
///
/// * `site`: Site configuration
/// * `props`: Location, title and content of the page
/// * `clock`: Source of the footer year
///
/// # Returns
///
/// Container markup holding header, main and footer
///
/// # Examples
///
/// ```
/// use depsite::components::layout::{LayoutProps, Location, SiteContext, layout};
/// use depsite::FixedClock;
/// use maud::html;
///
/// let location = Location::new("/");
/// let page = layout(
///     &SiteContext::default(),
///     LayoutProps { location: &location, title: "DepChecker", children: html! { p { "Hi" } } },
///     &FixedClock(2019),
/// );
/// assert!(page.into_string().contains("<h1 "));
/// ```
pub fn layout(site: &SiteContext, props: LayoutProps<'_>, clock: &dyn Clock) -> Markup {
    let variant = HeaderVariant::for_location(props.location, &site.root_path());
    let container = container_style(site);

    html! {
        div style=(container) {
            header { (site_title(site, variant, props.title)) }
            main { (props.children) }
            (footer(&site.site_name, clock.year(), &site.attribution))
        }
    }
}

fn container_style(site: &SiteContext) -> Style {
    let rhythm = |lines| site.typography.rhythm(lines);
    Style::new()
        .set("margin-left", "auto")
        .set("margin-right", "auto")
        .set("max-width", rhythm(24.0))
        .set("padding", format!("{} {}", rhythm(1.5), rhythm(3.0 / 4.0)))
}
