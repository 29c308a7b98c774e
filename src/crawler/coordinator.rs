//! Scrape coordinator - fetch orchestration and export dispatch
//!
//! This module contains the run logic:
//! - Dispatching one fetch per URL over a bounded worker pool
//! - Collecting records in input order once every fetch has finished
//! - Handing the records to every exporter

use crate::config::{validate, Config, ScraperConfig};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::output::{default_exporters, export_all, ExportOutcome};
use crate::record::PageRecord;
use crate::HarvestError;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Outcome of a complete scrape-and-export run
#[derive(Debug)]
pub struct HarvestReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// One record per input URL, in input order
    pub records: Vec<PageRecord>,

    /// One outcome per exporter, in the order they ran
    pub outcomes: Vec<ExportOutcome>,
}

impl HarvestReport {
    /// Returns the outcomes of the exporters that wrote their file
    pub fn written(&self) -> impl Iterator<Item = &ExportOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    /// Returns the outcomes of the exporters that failed
    pub fn failed_exports(&self) -> impl Iterator<Item = &ExportOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn all_exports_succeeded(&self) -> bool {
        self.outcomes.iter().all(ExportOutcome::is_success)
    }

    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}

/// Fetches pages over a worker pool of fixed size
pub struct Coordinator {
    client: Client,
    max_workers: usize,
}

impl Coordinator {
    /// Creates a coordinator with a freshly built HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(HarvestError)` - The HTTP client could not be built
    pub fn new(config: &ScraperConfig) -> Result<Self, HarvestError> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config.max_workers))
    }

    /// Creates a coordinator around an existing client
    pub fn with_client(client: Client, max_workers: usize) -> Self {
        Self {
            client,
            max_workers: max_workers.max(1),
        }
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Fetches every URL and returns the records in input order
    ///
    /// Each URL runs in its own task; a semaphore keeps at most `max_workers`
    /// requests in flight. Handles are joined in input order, so `records[i]`
    /// always belongs to `urls[i]` whatever order the fetches complete in. A
    /// task that dies is recorded as a failed fetch.
    pub async fn scrape_all(&self, urls: &[String]) -> Vec<PageRecord> {
        let semaphore = Arc::new(Semaphore::new(self.max_workers));
        let mut handles = Vec::with_capacity(urls.len());

        for url in urls {
            let client = self.client.clone();
            let semaphore = Arc::clone(&semaphore);
            let url = url.clone();

            handles.push(tokio::spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        tracing::warn!("Failed to fetch {}: worker pool closed ({})", url, e);
                        return PageRecord::failed(url);
                    }
                };
                fetch_page(&client, &url).await
            }));
        }

        let mut records = Vec::with_capacity(urls.len());
        for (url, handle) in urls.iter().zip(handles) {
            match handle.await {
                Ok(record) => records.push(record),
                Err(e) => {
                    let error = HarvestError::Task {
                        url: url.clone(),
                        message: e.to_string(),
                    };
                    tracing::warn!("Failed to fetch {}: {}", url, error);
                    records.push(PageRecord::failed(url.as_str()));
                }
            }
        }

        records
    }
}

/// Runs a complete scrape: fetch every configured URL, then export
///
/// Exporters run after all fetches have joined, in the order CSV, JSON, XLSX.
/// A failing exporter is recorded in the report and does not stop the ones
/// after it.
///
/// # Returns
///
/// * `Ok(HarvestReport)` - The run completed (individual fetches or exports may have failed)
/// * `Err(HarvestError)` - The configuration is invalid or the HTTP client could not be built
pub async fn run_scrape(config: Config) -> Result<HarvestReport, HarvestError> {
    validate(&config)?;

    let started_at = Utc::now();
    let coordinator = Coordinator::new(&config.scraper)?;

    tracing::info!(
        "Scraping {} URLs with up to {} workers",
        config.urls.len(),
        coordinator.max_workers()
    );

    let records = coordinator.scrape_all(&config.urls).await;

    let failed = records.iter().filter(|r| r.is_error()).count();
    tracing::info!(
        "Fetched {} pages ({} succeeded, {} failed)",
        records.len(),
        records.len() - failed,
        failed
    );

    let exporters = default_exporters(&config.output);
    let outcomes = export_all(&records, &exporters);

    let report = HarvestReport {
        started_at,
        finished_at: Utc::now(),
        records,
        outcomes,
    };

    tracing::info!("Run completed in {:.2}s", report.duration_seconds());

    Ok(report)
}
