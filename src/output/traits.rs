//! Exporter trait and associated types
//!
//! This module defines the interface shared by every output sink and the
//! outcome recorded for each one after a run.

use crate::record::PageRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Trait for output sinks
///
/// An exporter serializes the full record set to one file. Exporters are run
/// one after another once every fetch has finished, and never see partial
/// results.
pub trait Exporter: Send + Sync {
    /// Short format name used in diagnostics (e.g. "CSV")
    fn name(&self) -> &'static str;

    /// File the exporter writes to
    fn path(&self) -> &Path;

    /// Writes `records` to [`Exporter::path`], replacing any existing file
    fn export(&self, records: &[PageRecord]) -> ExportResult<()>;
}

/// Result of running one exporter
#[derive(Debug)]
pub struct ExportOutcome {
    /// Format name of the exporter
    pub exporter: &'static str,

    /// File the exporter targeted
    pub path: PathBuf,

    /// The error, if the export failed
    pub error: Option<ExportError>,
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Creates the parent directory of `path` if it does not exist yet
pub(crate) fn ensure_parent_dir(path: &Path) -> ExportResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
