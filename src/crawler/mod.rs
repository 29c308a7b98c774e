//! Crawler module for page fetching and processing
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching (one attempt per URL)
//! - HTML parsing and element extraction
//! - Bounded concurrent fetching and export dispatch

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_scrape, Coordinator, HarvestReport};
pub use fetcher::{build_http_client, fetch_page, fetch_url};
pub use parser::{parse_html, ParsedPage};
