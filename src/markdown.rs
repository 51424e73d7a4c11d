//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! Pages are written in Markdown with an optional `---` delimited front
//! matter block. The renderer uses comrak with GFM extensions, reads `title`
//! and `description` from the front matter, prefixes root relative links
//! with the site path prefix, and highlights fenced code blocks with syntect
//! using CSS classes.

use anyhow::{Context, Result};
use comrak::nodes::NodeValue;
use comrak::{Arena, Options, format_html, parse_document};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::path::with_prefix;

/// CSS class prefix of highlighted code spans.
pub const HIGHLIGHT_CLASS_PREFIX: &str = "hl-";

/// Metadata read from a page's front matter block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl FrontMatter {
    /// Parses `key: value` lines between the `---` delimiters.
    ///
    /// Unknown keys are ignored. Values may be wrapped in single or double
    /// quotes.
    pub fn parse(block: &str) -> Self {
        let mut front_matter = Self::default();
        for line in block.lines() {
            let line = line.trim();
            if line.is_empty() || line == "---" || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = unquote(value.trim());
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                "title" => front_matter.title = Some(value.to_string()),
                "description" => front_matter.description = Some(value.to_string()),
                _ => {}
            }
        }
        front_matter
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Output of rendering one Markdown document.
#[derive(Debug, Clone, Default)]
pub struct RenderedMarkdown {
    pub front_matter: FrontMatter,
    pub html: String,
}

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Provides GFM extensions including tables, strikethrough, autolinks,
/// task lists and footnotes. Uses syntect for code block syntax highlighting
/// when a language is specified.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
    path_prefix: String,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures GFM extensions, smart punctuation, `---` front matter and
    /// raw HTML passthrough (content is authored by the site owner).
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.front_matter_delimiter = Some("---".to_string());

        options.parse.smart = true;

        options.render.unsafe_ = true;

        let syntax_set = SyntaxSet::load_defaults_newlines();

        Self {
            options,
            syntax_set,
            path_prefix: String::new(),
        }
    }

    /// Creates renderer that prefixes root relative links.
    ///
    /// # Arguments
    ///
    /// * `prefix`: Normalized site path prefix
    pub fn with_path_prefix(prefix: impl Into<String>) -> Self {
        let mut renderer = Self::new();
        renderer.path_prefix = prefix.into();
        renderer
    }

    /// Renders markdown content to HTML.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown source, optionally starting with front matter
    ///
    /// # Returns
    ///
    /// Front matter and rendered body HTML
    ///
    /// # Errors
    ///
    /// Returns error if HTML formatting or syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<RenderedMarkdown> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);

        let mut front_matter = FrontMatter::default();
        for node in root.children() {
            if let NodeValue::FrontMatter(block) = &node.data.borrow().value {
                front_matter = FrontMatter::parse(block);
            }
        }

        let mut buffer = Vec::with_capacity(content.len() * 2);
        format_html(root, &self.options, &mut buffer).context("Failed to format markdown")?;
        let mut html = String::from_utf8(buffer).context("Rendered markdown is not UTF8")?;

        if !self.path_prefix.is_empty() {
            html = self.prefix_links(&html);
        }

        let html = self.highlight_code_blocks(&html)?;

        Ok(RenderedMarkdown { front_matter, html })
    }

    /// Prefixes root relative `href` and `src` attribute values.
    fn prefix_links(&self, html: &str) -> String {
        let mut result = String::with_capacity(html.len());
        let mut pos = 0;

        loop {
            let next = ["href=\"", "src=\""]
                .iter()
                .filter_map(|attr| find_attribute(html, pos, attr))
                .min();

            let Some(value_start) = next else {
                result.push_str(&html[pos..]);
                break;
            };

            let value_end = match html[value_start..].find('"') {
                Some(p) => value_start + p,
                None => {
                    result.push_str(&html[pos..]);
                    break;
                }
            };

            result.push_str(&html[pos..value_start]);
            result.push_str(&with_prefix(
                &self.path_prefix,
                &html[value_start..value_end],
            ));
            pos = value_end;
        }

        result
    }

    /// Post-processes HTML to apply syntax highlighting with CSS classes.
    ///
    /// Finds code blocks with language-* classes from comrak's output and
    /// replaces the escaped text with syntect highlighted spans.
    ///
    /// # Errors
    ///
    /// Returns error if highlighting fails
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        const OPEN: &str = "<code class=\"language-";

        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(code_start) = html[search_pos..].find(OPEN) {
            let code_start = search_pos + code_start;
            let lang_start = code_start + OPEN.len();

            let Some(lang_len) = html[lang_start..].find('"') else {
                search_pos = code_start + 1;
                continue;
            };
            let lang_end = lang_start + lang_len;
            let language = &html[lang_start..lang_end];

            let Some(open_len) = html[lang_end..].find('>') else {
                search_pos = code_start + 1;
                continue;
            };
            let content_start = lang_end + open_len + 1;

            let Some(content_len) = html[content_start..].find("</code>") else {
                search_pos = code_start + 1;
                continue;
            };
            let content_end = content_start + content_len;

            let code = html_decode(&html[content_start..content_end]);
            let highlighted = self
                .highlight_code(&code, language)
                .with_context(|| format!("Failed to highlight {} code block", language))?;

            result.push_str(&html[last_end..code_start]);
            result.push_str(OPEN);
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str("</code>");

            last_end = content_end + "</code>".len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);
        Ok(result)
    }

    /// Highlights code with syntect, falling back to escaped text for
    /// unknown languages.
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let Some(syntax) = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        else {
            return Ok(html_escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed {
                prefix: HIGHLIGHT_CLASS_PREFIX,
            },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the start of the next value of `attr` at or after `from`.
///
/// The attribute name must follow whitespace, so `data-href="` and
/// `srcset` style lookalikes are skipped.
fn find_attribute(html: &str, from: usize, attr: &str) -> Option<usize> {
    let mut search = from;
    while let Some(p) = html[search..].find(attr) {
        let start = search + p;
        if html[..start]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace)
        {
            return Some(start + attr.len());
        }
        search = start + attr.len();
    }
    None
}

/// Reverses the entity escaping comrak applies inside code blocks.
fn html_decode(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
