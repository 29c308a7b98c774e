//! JSON export
//!
//! The record set is written as a top-level array with four-space indentation.
//! Non-ASCII text is written as UTF-8, not escaped. Failed fetches keep their
//! short `{"url", "title"}` shape.

use crate::output::traits::{ensure_parent_dir, ExportResult, Exporter};
use crate::record::PageRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes records as an indented JSON array
#[derive(Debug, Clone)]
pub struct JsonExporter {
    path: PathBuf,
}

impl JsonExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Exporter for JsonExporter {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn export(&self, records: &[PageRecord]) -> ExportResult<()> {
        ensure_parent_dir(&self.path)?;

        let mut writer = BufWriter::new(File::create(&self.path)?);
        write_records(&mut writer, records)?;
        writer.flush()?;
        Ok(())
    }
}

/// Serializes records to `writer` in the export layout
pub fn write_records<W: Write>(writer: W, records: &[PageRecord]) -> ExportResult<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}

/// Reads a JSON export back into records
///
/// # Example
///
/// ```no_run
/// use page_harvest::output::read_records;
/// use std::path::Path;
///
/// let records = read_records(Path::new("scraped_data.json")).unwrap();
/// println!("{} pages", records.len());
/// ```
pub fn read_records(path: &Path) -> ExportResult<Vec<PageRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let records = serde_json::from_reader(reader)?;
    Ok(records)
}
