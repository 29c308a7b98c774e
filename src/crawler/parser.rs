//! HTML parser for extracting page elements
//!
//! This module extracts from a document:
//! - The page title
//! - The text of every h1/h2/h3 heading
//! - Every anchor `href`
//! - Every image `src`
//!
//! Values are recorded as they appear in the markup (entities decoded). Links
//! are not resolved against the page URL and nothing is trimmed or filtered.

use crate::record::NO_TITLE;
use scraper::{ElementRef, Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// The page title (from the first <title> tag)
    pub title: Option<String>,

    /// Heading texts in document order
    pub headings: Vec<String>,

    /// Anchor hrefs in document order
    pub links: Vec<String>,

    /// Image sources in document order
    pub images: Vec<String>,
}

impl ParsedPage {
    /// Returns the title, or the fallback used when the document has none
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }
}

/// Parses HTML content and extracts title, headings, links and images
///
/// # Extraction Rules
///
/// | Field | Source | Missing |
/// |-------|--------|---------|
/// | title | text of the first `<title>` | `None` |
/// | headings | text of every `<h1>`, `<h2>`, `<h3>` | skipped |
/// | links | `href` of every `<a>` | `<a>` without `href` skipped |
/// | images | `src` of every `<img>` | `<img>` without `src` skipped |
///
/// # Example
///
/// ```
/// use page_harvest::crawler::parse_html;
///
/// let html = r#"<html><head><title>Test</title></head><body><h1>Hi</h1><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.headings, vec!["Hi".to_string()]);
/// assert_eq!(parsed.links, vec!["/page".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        headings: extract_texts(&document, "h1, h2, h3"),
        links: extract_attrs(&document, "a[href]", "href"),
        images: extract_attrs(&document, "img[src]", "src"),
    }
}

/// Extracts the text of the first <title> element
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(element_text)
}

/// Collects the text content of every element matching `selector`
fn extract_texts(document: &Html, selector: &str) -> Vec<String> {
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).map(element_text).collect(),
        Err(_) => Vec::new(),
    }
}

/// Collects `attr` from every element matching `selector`
fn extract_attrs(document: &Html, selector: &str, attr: &str) -> Vec<String> {
    match Selector::parse(selector) {
        Ok(selector) => document
            .select(&selector)
            .filter_map(|element| element.value().attr(attr))
            .map(str::to_string)
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.title, Some("Test Page".to_string()));
        assert_eq!(parsed.title_or_default(), "Test Page");
    }

    #[test]
    fn test_title_keeps_whitespace() {
        let html = r#"<html><head><title>  Test Page  </title></head><body></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.title, Some("  Test Page  ".to_string()));
    }

    #[test]
    fn test_no_title() {
        let html = r#"<html><head></head><body></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.title, None);
        assert_eq!(parsed.title_or_default(), "No title found");
    }

    #[test]
    fn test_first_title_wins() {
        let html = r#"<html><head><title>First</title><title>Second</title></head></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.title, Some("First".to_string()));
    }

    #[test]
    fn test_headings_in_document_order() {
        let html = r#"
            <html><body>
                <h2>Second level</h2>
                <h1>Top</h1>
                <h4>Ignored</h4>
                <div><h3>Nested <em>third</em></h3></div>
                <h1>Another top</h1>
            </body></html>
        "#;
        let parsed = parse_html(html);
        assert_eq!(
            parsed.headings,
            vec!["Second level", "Top", "Nested third", "Another top"]
        );
    }

    #[test]
    fn test_heading_entities_decoded() {
        let html = r#"<html><body><h1>Fish &amp; Chips &lt;3</h1></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.headings, vec!["Fish & Chips <3"]);
    }

    #[test]
    fn test_non_ascii_text() {
        let html = r#"<html><head><title>Übersicht – 概要</title></head><body><h1>Café</h1></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.title.as_deref(), Some("Übersicht – 概要"));
        assert_eq!(parsed.headings, vec!["Café"]);
    }

    #[test]
    fn test_links_recorded_verbatim() {
        let html = r##"
            <html><body>
                <a href="/relative">Relative</a>
                <a href="https://other.com/page">Absolute</a>
                <a href="mailto:test@example.com">Mail</a>
                <a href="#section">Fragment</a>
                <a href="">Empty</a>
            </body></html>
        "##;
        let parsed = parse_html(html);
        assert_eq!(
            parsed.links,
            vec![
                "/relative",
                "https://other.com/page",
                "mailto:test@example.com",
                "#section",
                "",
            ]
        );
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = r#"<html><body><a name="top">Anchor</a><a href="/a">A</a></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.links, vec!["/a"]);
    }

    #[test]
    fn test_images() {
        let html = r#"
            <html><body>
                <img src="/logo.png" alt="logo">
                <img alt="no source">
                <img src="https://cdn.example.com/a.jpg">
            </body></html>
        "#;
        let parsed = parse_html(html);
        assert_eq!(parsed.images, vec!["/logo.png", "https://cdn.example.com/a.jpg"]);
    }

    #[test]
    fn test_empty_document() {
        let parsed = parse_html("");
        assert_eq!(parsed, ParsedPage::default());
    }
}
