//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests, including:
//! - Building the shared HTTP client
//! - A single GET per URL (no retries)
//! - Turning the response into a `PageRecord`
//!
//! Any transport failure and any non-success status are treated the same way:
//! the URL gets the degraded `"Error"` record and a diagnostic is logged.

use crate::config::ScraperConfig;
use crate::crawler::parser::parse_html;
use crate::record::PageRecord;
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// The client follows redirects with reqwest's default policy and decodes
/// gzip/brotli bodies.
///
/// # Example
///
/// ```no_run
/// use page_harvest::config::ScraperConfig;
/// use page_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&ScraperConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ScraperConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the body of a URL
///
/// # Returns
///
/// * `Ok(String)` - The body of a 2xx response
/// * `Err(HarvestError::Status)` - The server answered with a non-success status
/// * `Err(HarvestError::Http)` - The request or body read failed
pub async fn fetch_url(client: &Client, url: &str) -> Result<String, HarvestError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })
}

/// Fetches a page and extracts its record
///
/// Never fails: a fetch failure is logged and converted into
/// [`PageRecord::failed`].
pub async fn fetch_page(client: &Client, url: &str) -> PageRecord {
    tracing::debug!("Fetching {}", url);

    match fetch_url(client, url).await {
        Ok(body) => {
            let parsed = parse_html(&body);
            tracing::debug!(
                "Parsed {}: {} headings, {} links, {} images",
                url,
                parsed.headings.len(),
                parsed.links.len(),
                parsed.images.len()
            );
            let title = parsed.title_or_default().to_string();
            PageRecord::success(url, title, parsed.headings, parsed.links, parsed.images)
        }
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", url, e);
            PageRecord::failed(url)
        }
    }
}
