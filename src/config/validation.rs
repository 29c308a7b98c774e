use crate::config::types::{Config, OutputConfig, ScraperConfig};
use crate::ConfigError;
use url::Url;

/// Characters Excel refuses in a worksheet name
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Longest worksheet name Excel accepts
const MAX_SHEET_TITLE_LEN: usize = 31;

/// Validates the entire configuration
///
/// URLs are not checked here. Every entry is attempted and a bad one yields an
/// error record.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Logs a warning for every URL that will not parse as an absolute URL
///
/// Returns the number of such entries.
pub fn warn_unparsable_urls(urls: &[String]) -> usize {
    let mut count = 0;
    for url in urls {
        if let Err(e) = Url::parse(url) {
            tracing::warn!("URL '{}' does not parse ({}); it will be recorded as an error", url, e);
            count += 1;
        }
    }
    count
}

/// Validates fetching configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.max_workers < 1 || config.max_workers > 100 {
        return Err(ConfigError::Validation(format!(
            "max_workers must be between 1 and 100, got {}",
            config.max_workers
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    let paths = [
        ("csv_path", &config.csv_path),
        ("json_path", &config.json_path),
        ("xlsx_path", &config.xlsx_path),
    ];

    for (name, path) in &paths {
        if path.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    for (i, (name, path)) in paths.iter().enumerate() {
        if let Some((other, _)) = paths[i + 1..].iter().find(|(_, p)| p == path) {
            return Err(ConfigError::Validation(format!(
                "{} and {} both point to '{}'",
                name, other, path
            )));
        }
    }

    validate_sheet_title(&config.sheet_title)
}

/// Validates the worksheet name against Excel's naming rules
fn validate_sheet_title(title: &str) -> Result<(), ConfigError> {
    if title.is_empty() {
        return Err(ConfigError::Validation(
            "sheet_title cannot be empty".to_string(),
        ));
    }

    if title.chars().count() > MAX_SHEET_TITLE_LEN {
        return Err(ConfigError::Validation(format!(
            "sheet_title must be at most {} characters, got '{}'",
            MAX_SHEET_TITLE_LEN, title
        )));
    }

    if let Some(c) = title.chars().find(|c| FORBIDDEN_SHEET_CHARS.contains(c)) {
        return Err(ConfigError::Validation(format!(
            "sheet_title '{}' contains forbidden character '{}'",
            title, c
        )));
    }

    Ok(())
}
