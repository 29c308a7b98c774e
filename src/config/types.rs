use serde::Deserialize;

/// Main configuration structure for Page-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// URLs to scrape, in output order
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Fetching behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Maximum number of pages fetched at the same time
    #[serde(rename = "max-workers")]
    pub max_workers: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
            request_timeout_secs: 30,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Pool size used when none is configured: CPU count + 4, capped at 32
fn default_max_workers() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (cpus + 4).min(32)
}

/// Output artifact configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV export
    #[serde(rename = "csv-path")]
    pub csv_path: String,

    /// Path to the JSON export
    #[serde(rename = "json-path")]
    pub json_path: String,

    /// Path to the XLSX export
    #[serde(rename = "xlsx-path")]
    pub xlsx_path: String,

    /// Name of the single worksheet in the XLSX export
    #[serde(rename = "sheet-title")]
    pub sheet_title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "scraped_data.csv".to_string(),
            json_path: "scraped_data.json".to_string(),
            xlsx_path: "scraped_data.xlsx".to_string(),
            sheet_title: "Scraped Data".to_string(),
        }
    }
}
