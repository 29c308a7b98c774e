//! Statistics over a scraped record set
//!
//! This module summarizes a run (or a previously written JSON export) for
//! display on the terminal.

use crate::record::PageRecord;

/// Scrape statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestStatistics {
    /// Number of records (one per input URL)
    pub total_pages: u64,

    /// Pages fetched and parsed
    pub succeeded: u64,

    /// Pages whose fetch failed
    pub failed: u64,

    /// Pages without a <title> element
    pub untitled: u64,

    pub total_headings: u64,
    pub total_links: u64,
    pub total_images: u64,

    /// URLs whose fetch failed, in input order
    pub failed_urls: Vec<String>,
}

impl HarvestStatistics {
    /// Computes statistics from a record set
    pub fn from_records(records: &[PageRecord]) -> Self {
        let mut stats = Self::default();

        for record in records {
            stats.total_pages += 1;

            if record.is_error() {
                stats.failed += 1;
                stats.failed_urls.push(record.url.clone());
                continue;
            }

            stats.succeeded += 1;
            if record.title == crate::record::NO_TITLE {
                stats.untitled += 1;
            }
            stats.total_headings += record.headings().len() as u64;
            stats.total_links += record.links().len() as u64;
            stats.total_images += record.images().len() as u64;
        }

        stats
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_pages == 0 {
            return 0.0;
        }
        (self.succeeded as f64 / self.total_pages as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &HarvestStatistics) {
    println!("=== Scrape Statistics ===\n");

    println!("Overview:");
    println!("  Total pages: {}", stats.total_pages);
    println!("  Succeeded: {}", stats.succeeded);
    println!("  Failed: {}", stats.failed);
    println!("  Without title: {}", stats.untitled);
    println!();

    println!("Extracted Elements:");
    println!("  Headings: {}", stats.total_headings);
    println!("  Links: {}", stats.total_links);
    println!("  Images: {}", stats.total_images);
    println!();

    if !stats.failed_urls.is_empty() {
        println!("Failed URLs ({}):", stats.failed_urls.len());
        for url in &stats.failed_urls {
            println!("  - {}", url);
        }
        println!();
    }

    println!(
        "Success Rate: {:.1}% ({} / {} pages successfully scraped)",
        stats.success_rate(),
        stats.succeeded,
        stats.total_pages
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_from_records() {
        let records = vec![
            PageRecord::success(
                "https://a.example",
                "A",
                vec!["h1".to_string(), "h2".to_string()],
                vec!["/x".to_string(), "/y".to_string(), "/z".to_string()],
                vec![],
            ),
            PageRecord::success(
                "https://b.example",
                "No title found",
                vec![],
                vec!["/w".to_string()],
                vec!["/img.png".to_string()],
            ),
            PageRecord::failed("https://bad.invalid/"),
        ];

        let stats = HarvestStatistics::from_records(&records);

        assert_eq!(stats.total_pages, 3);
        assert_eq!(stats.succeeded, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.untitled, 1);
        assert_eq!(stats.total_headings, 2);
        assert_eq!(stats.total_links, 4);
        assert_eq!(stats.total_images, 1);
        assert_eq!(stats.failed_urls, vec!["https://bad.invalid/"]);
    }

    #[test]
    fn test_success_rate() {
        let stats = HarvestStatistics {
            total_pages: 4,
            succeeded: 3,
            failed: 1,
            ..Default::default()
        };
        assert!((stats.success_rate() - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_success_rate_zero_pages() {
        let stats = HarvestStatistics::from_records(&[]);
        assert_eq!(stats.success_rate(), 0.0);
    }
}
