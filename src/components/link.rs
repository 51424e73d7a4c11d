//! Internal link component

use maud::{Markup, html};

use crate::path::with_prefix;
use crate::style::Style;

/// Renders a link to a page of this site
///
/// The target is a route pathname such as `/` or `/about/`; the site path
/// prefix is applied before it lands in `href`, so pages keep working when
/// the site is served from a subdirectory.
///
/// # Arguments
///
/// * `prefix`: Normalized site path prefix
/// * `to`: Route pathname of the target page
/// * `style`: Inline style for the anchor
/// * `label`: Link text
///
/// # Returns
///
/// Anchor markup
pub fn internal_link(prefix: &str, to: &str, style: &Style, label: &str) -> Markup {
    let href = with_prefix(prefix, to);
    html! {
        @if style.is_empty() {
            a href=(href) { (label) }
        } @else {
            a href=(href) style=(style) { (label) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_link_without_prefix() {
        // Arrange
        let style = Style::new().set("text-decoration", "none");

        // Act
        let html = internal_link("", "/", &style, "Home").into_string();

        // Assert
        assert_eq!(
            html,
            r#"<a href="/" style="text-decoration: none">Home</a>"#
        );
    }

    #[test]
    fn test_internal_link_applies_prefix() {
        // Act
        let html = internal_link("/blog", "/about/", &Style::new(), "About").into_string();

        // Assert
        assert_eq!(html, r#"<a href="/blog/about/">About</a>"#);
    }

    #[test]
    fn test_internal_link_escapes_label() {
        // Act
        let html = internal_link("", "/", &Style::new(), "<Deps & Co>").into_string();

        // Assert
        assert!(html.contains("&lt;Deps &amp; Co&gt;"), "Label should be escaped: {}", html);
    }
}
