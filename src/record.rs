//! The per-URL result record
//!
//! One `PageRecord` is produced for every input URL, in input order. A record
//! for a page that could not be fetched only carries the URL and the `"Error"`
//! title; its list fields are absent rather than empty.

use serde::{Deserialize, Serialize};

/// Title recorded when a fetch fails
pub const ERROR_TITLE: &str = "Error";

/// Title recorded when a document has no `<title>` element
pub const NO_TITLE: &str = "No title found";

/// Scraped data for a single requested URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// The URL exactly as it was requested
    pub url: String,

    /// Document title, [`NO_TITLE`] or [`ERROR_TITLE`]
    pub title: String,

    /// Text of every h1/h2/h3 element, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headings: Option<Vec<String>>,

    /// Every anchor `href`, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,

    /// Every image `src`, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl PageRecord {
    /// Creates a record for a successfully fetched page
    pub fn success(
        url: impl Into<String>,
        title: impl Into<String>,
        headings: Vec<String>,
        links: Vec<String>,
        images: Vec<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            headings: Some(headings),
            links: Some(links),
            images: Some(images),
        }
    }

    /// Creates the degraded record for a URL whose fetch failed
    pub fn failed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: ERROR_TITLE.to_string(),
            headings: None,
            links: None,
            images: None,
        }
    }

    /// Returns true if this is the degraded record of a failed fetch
    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE
            && self.headings.is_none()
            && self.links.is_none()
            && self.images.is_none()
    }

    pub fn headings(&self) -> &[String] {
        self.headings.as_deref().unwrap_or_default()
    }

    pub fn links(&self) -> &[String] {
        self.links.as_deref().unwrap_or_default()
    }

    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_record_has_no_lists() {
        let record = PageRecord::failed("https://bad.invalid/");
        assert_eq!(record.title, "Error");
        assert!(record.is_error());
        assert!(record.headings().is_empty());
        assert!(record.links().is_empty());
        assert!(record.images().is_empty());
    }

    #[test]
    fn test_success_record_with_error_title_is_not_error() {
        // A page may legitimately be titled "Error"
        let record = PageRecord::success("https://example.com", "Error", vec![], vec![], vec![]);
        assert!(!record.is_error());
    }

    #[test]
    fn test_failed_record_omits_list_fields_in_json() {
        let record = PageRecord::failed("https://bad.invalid/");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"url":"https://bad.invalid/","title":"Error"}"#);
    }

    #[test]
    fn test_success_record_keeps_empty_lists_in_json() {
        let record = PageRecord::success("https://example.com", "Home", vec![], vec![], vec![]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"url":"https://example.com","title":"Home","headings":[],"links":[],"images":[]}"#
        );
    }
}
