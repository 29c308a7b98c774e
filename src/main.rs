//! Page-Harvest main entry point
//!
//! This is the command-line interface for the Page-Harvest scraper.

use anyhow::{bail, Context};
use clap::Parser;
use page_harvest::config::{load_config_with_hash, validate, warn_unparsable_urls, Config};
use page_harvest::crawler::run_scrape;
use page_harvest::output::{print_statistics, read_records, HarvestStatistics};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Page-Harvest: a concurrent page scraper
///
/// Page-Harvest fetches a list of pages concurrently, extracts their title,
/// headings, links and images, and saves the results as CSV, JSON and XLSX.
#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(version)]
#[command(about = "A concurrent page scraper", long_about = None)]
struct Cli {
    /// URLs to scrape, appended after any URLs from the config file
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of concurrent fetches
    #[arg(long, value_name = "N")]
    workers: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Path of the CSV export
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,

    /// Path of the JSON export
    #[arg(long, value_name = "PATH")]
    json: Option<String>,

    /// Path of the XLSX export
    #[arg(long, value_name = "PATH")]
    xlsx: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the effective configuration and URL list without fetching anything
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics for a previously written JSON export and exit
    #[arg(long, value_name = "JSON", conflicts_with = "dry_run")]
    stats: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Some(path) = &cli.stats {
        return handle_stats(path);
    }

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_harvest=info,warn"),
            1 => EnvFilter::new("page_harvest=debug,info"),
            2 => EnvFilter::new("page_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    config.urls.extend(cli.urls.iter().cloned());

    if let Some(workers) = cli.workers {
        config.scraper.max_workers = workers;
    }
    if let Some(timeout) = cli.timeout {
        config.scraper.request_timeout_secs = timeout;
    }
    if let Some(csv) = &cli.csv {
        config.output.csv_path = csv.clone();
    }
    if let Some(json) = &cli.json {
        config.output.json_path = json.clone();
    }
    if let Some(xlsx) = &cli.xlsx {
        config.output.xlsx_path = xlsx.clone();
    }

    validate(&config).context("invalid configuration")?;

    if config.urls.is_empty() {
        tracing::warn!("No URLs given; the exports will contain no records");
    }
    warn_unparsable_urls(&config.urls);

    Ok(config)
}

/// Handles the --dry-run mode: shows what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== Page-Harvest Dry Run ===\n");

    println!("Scraper Configuration:");
    println!("  Max workers: {}", config.scraper.max_workers);
    println!("  Request timeout: {}s", config.scraper.request_timeout_secs);
    println!("  User agent: {}", config.scraper.user_agent);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);
    println!("  JSON: {}", config.output.json_path);
    println!(
        "  XLSX: {} (sheet '{}')",
        config.output.xlsx_path, config.output.sheet_title
    );

    println!("\nURLs ({}):", config.urls.len());
    for url in &config.urls {
        println!("  - {}", url);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would fetch {} URLs", config.urls.len());
}

/// Handles the --stats mode: summarizes an existing JSON export
fn handle_stats(path: &std::path::Path) -> anyhow::Result<()> {
    println!("JSON export: {}\n", path.display());

    let records =
        read_records(path).with_context(|| format!("failed to read {}", path.display()))?;
    print_statistics(&HarvestStatistics::from_records(&records));

    Ok(())
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config, quiet: bool) -> anyhow::Result<()> {
    let report = run_scrape(config).await.context("scrape failed")?;

    for outcome in report.written() {
        println!(
            "✓ Scraped data saved to '{}' ({})",
            outcome.path.display(),
            outcome.exporter
        );
    }
    for outcome in report.failed_exports() {
        if let Some(e) = &outcome.error {
            eprintln!(
                "✗ Failed to save '{}' ({}): {}",
                outcome.path.display(),
                outcome.exporter,
                e
            );
        }
    }

    if !quiet {
        println!();
        print_statistics(&HarvestStatistics::from_records(&report.records));
    }

    if !report.all_exports_succeeded() {
        let failed = report.failed_exports().count();
        bail!("{} of {} exports failed", failed, report.outcomes.len());
    }

    Ok(())
}
