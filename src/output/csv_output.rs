//! CSV export
//!
//! One header row, then one row per record. List fields are written in full,
//! rendered as a JSON array; a failed fetch leaves them as empty cells.

use crate::output::traits::{ensure_parent_dir, ExportResult, Exporter};
use crate::record::PageRecord;
use std::path::{Path, PathBuf};

/// Column names of the CSV export
pub const CSV_HEADER: [&str; 5] = ["url", "title", "headings", "links", "images"];

/// Writes records as comma-separated values
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Exporter for CsvExporter {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn export(&self, records: &[PageRecord]) -> ExportResult<()> {
        ensure_parent_dir(&self.path)?;

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(CSV_HEADER)?;

        for record in records {
            let headings = render_list(record.headings.as_deref())?;
            let links = render_list(record.links.as_deref())?;
            let images = render_list(record.images.as_deref())?;

            writer.write_record([
                record.url.as_str(),
                record.title.as_str(),
                headings.as_str(),
                links.as_str(),
                images.as_str(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Renders a list field for a single CSV cell
fn render_list(items: Option<&[String]>) -> ExportResult<String> {
    match items {
        Some(items) => Ok(serde_json::to_string(items)?),
        None => Ok(String::new()),
    }
}
