//! Output module for exporting scraped records
//!
//! This module handles:
//! - Writing the record set as CSV, JSON and XLSX
//! - Running the exporters so that one failing sink does not stop the others
//! - Summarizing a record set as statistics

mod csv_output;
mod json_output;
pub mod stats;
mod traits;
mod xlsx_output;

pub use csv_output::{CsvExporter, CSV_HEADER};
pub use json_output::{read_records, write_records, JsonExporter};
pub use stats::{print_statistics, HarvestStatistics};
pub use traits::{ExportError, ExportOutcome, ExportResult, Exporter};
pub use xlsx_output::{spreadsheet_row, summarize_list, XlsxExporter, MAX_LIST_ITEMS, XLSX_HEADER};

use crate::config::OutputConfig;
use crate::record::PageRecord;

/// Builds the configured exporters in run order: CSV, JSON, XLSX
pub fn default_exporters(config: &OutputConfig) -> Vec<Box<dyn Exporter>> {
    vec![
        Box::new(CsvExporter::new(&config.csv_path)),
        Box::new(JsonExporter::new(&config.json_path)),
        Box::new(XlsxExporter::new(&config.xlsx_path, config.sheet_title.as_str())),
    ]
}

/// Runs every exporter over the same record set
///
/// Exporters run sequentially in the given order. A failure is logged and
/// recorded in its outcome; the remaining exporters still run.
///
/// # Returns
///
/// One outcome per exporter, in the same order
pub fn export_all(records: &[PageRecord], exporters: &[Box<dyn Exporter>]) -> Vec<ExportOutcome> {
    exporters
        .iter()
        .map(|exporter| {
            let path = exporter.path().to_path_buf();
            let error = match exporter.export(records) {
                Ok(()) => {
                    tracing::info!(
                        "{} export: {} records written to {}",
                        exporter.name(),
                        records.len(),
                        path.display()
                    );
                    None
                }
                Err(e) => {
                    tracing::error!(
                        "{} export to {} failed: {}",
                        exporter.name(),
                        path.display(),
                        e
                    );
                    Some(e)
                }
            };

            ExportOutcome {
                exporter: exporter.name(),
                path,
                error,
            }
        })
        .collect()
}
