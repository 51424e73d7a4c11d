//! Page footer component

use maud::{Markup, html};

/// External project credited in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub name: String,
    pub url: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            name: "Gatsby".to_string(),
            url: "https://www.gatsbyjs.org".to_string(),
        }
    }
}

/// Renders the copyright footer
///
/// # Arguments
///
/// * `site_name`: Name shown after the copyright sign
/// * `year`: Calendar year shown in the copyright line
/// * `attribution`: Project linked after "Built with"
///
/// # Returns
///
/// Footer markup
pub fn footer(site_name: &str, year: i32, attribution: &Attribution) -> Markup {
    html! {
        footer style="opacity: 0.7" {
            "© " (site_name) " " (year) ", Built with"
            " "
            a href=(attribution.url) { (attribution.name) }
        }
    }
}
