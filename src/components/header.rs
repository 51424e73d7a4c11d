//! Site header component

use maud::{Markup, html};

use super::layout::{Location, SiteContext};
use super::link::internal_link;
use crate::style::Style;

/// Accent color of the site title.
pub const ACCENT_COLOR: &str = "rgba(21, 126, 223, 1)";

/// Header rendering chosen for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    /// Large accent colored title on the site root
    Home,
    /// Smaller title on every other page
    Page,
}

impl HeaderVariant {
    /// Picks the variant by comparing the pathname with the root path.
    ///
    /// The comparison is exact: `/about` and `/about/` are both pages, and a
    /// root path of `/blog/` does not match `/blog`.
    pub fn for_location(location: &Location, root_path: &str) -> Self {
        if location.pathname == root_path {
            Self::Home
        } else {
            Self::Page
        }
    }
}

/// Renders the site title heading for a header variant
///
/// Both variants link the title to the site root with link decoration
/// removed. The home variant is an `h1` on the large type scale step with the
/// accent color on the heading and the link. The page variant is an `h3`
/// whose link inherits its color from the surrounding text.
///
/// # Arguments
///
/// * `site`: Site configuration supplying typography and path prefix
/// * `variant`: Header variant to render
/// * `title`: Site title used as link label
///
/// # Returns
///
/// Heading markup (without the enclosing `header` element)
pub fn site_title(site: &SiteContext, variant: HeaderVariant, title: &str) -> Markup {
    match variant {
        HeaderVariant::Home => {
            let heading = Style::new()
                .spread(&site.typography.scale(1.5))
                .set("margin-bottom", site.typography.rhythm(0.5))
                .set("margin-top", "0")
                .set("color", ACCENT_COLOR);
            html! {
                h1 style=(heading) {
                    (internal_link(&site.path_prefix, "/", &title_link_style(ACCENT_COLOR), title))
                }
            }
        }
        HeaderVariant::Page => {
            let heading = Style::new()
                .set("font-family", "Montserrat, sans-serif")
                .set("margin-top", "0")
                .set("color", ACCENT_COLOR);
            html! {
                h3 style=(heading) {
                    (internal_link(&site.path_prefix, "/", &title_link_style("inherit"), title))
                }
            }
        }
    }
}

fn title_link_style(color: &str) -> Style {
    Style::new()
        .set("box-shadow", "none")
        .set("text-decoration", "none")
        .set("color", color)
        .set("border", "none")
}
