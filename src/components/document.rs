//! HTML document wrapper component

use maud::{DOCTYPE, Markup, html};

/// Head metadata of a generated document.
#[derive(Debug, Clone, Default)]
pub struct DocumentHead<'a> {
    /// Full document title
    pub title: &'a str,
    pub description: Option<&'a str>,
    /// Stylesheet hrefs, relative to the document
    pub stylesheets: &'a [String],
}

/// Wraps page markup with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head and body structure across all
/// pages. The wrapper handles viewport configuration, charset, description
/// and stylesheet loading while the caller provides the rendered shell.
///
/// # Arguments
///
/// * `head`: Title, description and stylesheets for the head section
/// * `body`: Page markup placed directly inside `body`
///
/// # Returns
///
/// Complete HTML document
pub fn page_wrapper(head: &DocumentHead<'_>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (head.title) }
                @if let Some(description) = head.description {
                    meta name="description" content=(description);
                }
                @for stylesheet in head.stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                (body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_structure() {
        // Arrange
        let stylesheets = vec!["../assets/site.css".to_string()];
        let head = DocumentHead {
            title: "About | DepChecker",
            description: Some("What it is"),
            stylesheets: &stylesheets,
        };

        // Act
        let html = page_wrapper(&head, html! { div { "shell" } }).into_string();

        // Assert
        assert!(html.starts_with("<!DOCTYPE html>"), "Should start with doctype");
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>About | DepChecker</title>"));
        assert!(html.contains(r#"<meta name="description" content="What it is">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="../assets/site.css">"#));
        assert!(html.contains("<body><div>shell</div></body>"));
    }

    #[test]
    fn test_page_wrapper_without_description() {
        // Arrange
        let head = DocumentHead {
            title: "Home",
            ..DocumentHead::default()
        };

        // Act
        let html = page_wrapper(&head, html! {}).into_string();

        // Assert
        assert!(!html.contains("name=\"description\""));
        assert!(!html.contains("stylesheet"));
    }
}
