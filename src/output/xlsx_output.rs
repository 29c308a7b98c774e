//! XLSX export
//!
//! A single worksheet with a bold header row. Unlike the CSV and JSON exports,
//! list fields are cut to their first [`MAX_LIST_ITEMS`] entries and joined
//! into one display string per cell. Every cell is cut to [`MAX_CELL_CHARS`].

use crate::output::traits::{ensure_parent_dir, ExportResult, Exporter};
use crate::record::PageRecord;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

/// Column names of the spreadsheet export
pub const XLSX_HEADER: [&str; 5] = ["URL", "Title", "Headings", "Links", "Images"];

/// Entries kept per list field in a spreadsheet cell
pub const MAX_LIST_ITEMS: usize = 5;

/// Longest text Excel stores in a single cell, in characters
pub const MAX_CELL_CHARS: usize = 32_767;

/// Separator between list entries in a spreadsheet cell
const LIST_SEPARATOR: &str = ", ";

/// Writes records to a single-sheet workbook
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    path: PathBuf,
    sheet_title: String,
}

impl XlsxExporter {
    pub fn new(path: impl Into<PathBuf>, sheet_title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet_title: sheet_title.into(),
        }
    }
}

impl Exporter for XlsxExporter {
    fn name(&self) -> &'static str {
        "XLSX"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn export(&self, records: &[PageRecord]) -> ExportResult<()> {
        ensure_parent_dir(&self.path)?;

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet_title.as_str())?;

        for (col, header) in XLSX_HEADER.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = (i + 1) as u32;
            for (col, value) in spreadsheet_row(record).iter().enumerate() {
                worksheet.write_string(row, col as u16, value.as_str())?;
            }
        }

        workbook.save(&self.path)?;
        Ok(())
    }
}

/// Builds the cell values of one spreadsheet row
pub fn spreadsheet_row(record: &PageRecord) -> [String; 5] {
    [
        record.url.clone(),
        record.title.clone(),
        summarize_list(record.headings()),
        summarize_list(record.links()),
        summarize_list(record.images()),
    ]
    .map(fit_cell)
}

/// Cuts a value to at most [`MAX_CELL_CHARS`] characters
fn fit_cell(mut value: String) -> String {
    if let Some((end, _)) = value.char_indices().nth(MAX_CELL_CHARS) {
        value.truncate(end);
    }
    value
}

/// Joins the first [`MAX_LIST_ITEMS`] entries of a list field
pub fn summarize_list(items: &[String]) -> String {
    items
        .iter()
        .take(MAX_LIST_ITEMS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Reader, Xlsx};

    fn strings(prefix: &str, n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{}{}", prefix, i)).collect()
    }

    #[test]
    fn test_summarize_list_truncates_to_five() {
        assert_eq!(summarize_list(&strings("h", 7)), "h1, h2, h3, h4, h5");
        assert_eq!(summarize_list(&strings("h", 2)), "h1, h2");
        assert_eq!(summarize_list(&[]), "");
    }

    #[test]
    fn test_spreadsheet_row() {
        let record = PageRecord::success(
            "https://example.com",
            "Example",
            strings("Heading ", 6),
            strings("/link", 3),
            vec![],
        );

        let row = spreadsheet_row(&record);
        assert_eq!(row[0], "https://example.com");
        assert_eq!(row[1], "Example");
        assert_eq!(
            row[2],
            "Heading 1, Heading 2, Heading 3, Heading 4, Heading 5"
        );
        assert_eq!(row[3], "/link1, /link2, /link3");
        assert_eq!(row[4], "");
    }

    #[test]
    fn test_failed_record_row() {
        let row = spreadsheet_row(&PageRecord::failed("https://bad.invalid/"));
        assert_eq!(row, ["https://bad.invalid/", "Error", "", "", ""].map(String::from));
    }

    /// Reads back the sheet names and every row of the named sheet as text
    fn read_workbook(path: &Path, sheet: &str) -> (Vec<String>, Vec<Vec<String>>) {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let names = workbook.sheet_names();
        let range = workbook.worksheet_range(sheet).unwrap();
        let rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        (names, rows)
    }

    #[test]
    fn test_fit_cell_cuts_on_char_boundary() {
        let value = "é".repeat(MAX_CELL_CHARS + 10);
        let cut = fit_cell(value);
        assert_eq!(cut.chars().count(), MAX_CELL_CHARS);
        assert!(cut.chars().all(|c| c == 'é'));

        assert_eq!(fit_cell("short".to_string()), "short");
        let exact = "x".repeat(MAX_CELL_CHARS);
        assert_eq!(fit_cell(exact.clone()), exact);
    }

    #[test]
    fn test_spreadsheet_row_caps_long_cells() {
        let record = PageRecord::success(
            "https://example.com",
            "t".repeat(MAX_CELL_CHARS + 1),
            vec![],
            strings(&"/very-long-link-".repeat(2_000), 5),
            vec![],
        );

        let row = spreadsheet_row(&record);
        assert_eq!(row[1].chars().count(), MAX_CELL_CHARS);
        assert_eq!(row[3].chars().count(), MAX_CELL_CHARS);
        assert!(row[3].starts_with("/very-long-link-"));
    }

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xlsx");
        let records = vec![
            PageRecord::success("https://example.com", "Example", strings("h", 8), vec![], vec![]),
            PageRecord::failed("https://bad.invalid/"),
        ];

        XlsxExporter::new(&path, "Pages")
            .export(&records)
            .unwrap();

        let (names, rows) = read_workbook(&path, "Pages");
        assert_eq!(names, vec!["Pages"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], XLSX_HEADER);
        assert_eq!(
            rows[1],
            ["https://example.com", "Example", "h1, h2, h3, h4, h5", "", ""]
        );
        assert_eq!(rows[2], ["https://bad.invalid/", "Error", "", "", ""]);
    }

    #[test]
    fn test_export_inline_image_longer_than_cell_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xlsx");
        let inline_image = format!("data:image/png;base64,{}", "A".repeat(40_000));
        let records = vec![PageRecord::success(
            "https://example.com",
            "Inline",
            vec![],
            vec![],
            vec![inline_image],
        )];

        XlsxExporter::new(&path, "Scraped Data")
            .export(&records)
            .unwrap();

        let (_, rows) = read_workbook(&path, "Scraped Data");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][4].chars().count(), MAX_CELL_CHARS);
        assert!(rows[1][4].starts_with("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_export_rejects_invalid_sheet_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xlsx");

        let result = XlsxExporter::new(&path, "bad/name").export(&[]);
        assert!(matches!(result, Err(crate::output::ExportError::Xlsx(_))));
        assert!(!path.exists());
    }
}
