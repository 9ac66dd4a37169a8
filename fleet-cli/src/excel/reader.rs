//! Reads a vehicle worksheet into header-keyed rows

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, Xlsx, open_workbook};

use super::value::CellValue;

/// One data row, keyed by column header. Cells that read as empty are not
/// stored, so a missing key means the cell was blank (or the column short).
#[derive(Debug, Clone, Default)]
pub struct SheetRow {
    cells: HashMap<String, CellValue>,
}

impl SheetRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The tabular content of a single worksheet.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl SheetTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read one worksheet of an .xlsx workbook as a header-keyed table.
///
/// The first row is taken as headers and every following row becomes a
/// [`SheetRow`]. Rows without a single non-empty cell are skipped. When
/// `sheet` is `None` the first worksheet in the workbook is read.
pub fn read_sheet_table<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<SheetTable> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                bail!(
                    "Sheet '{}' not found in {} (available: {:?})",
                    name,
                    path.display(),
                    workbook.sheet_names()
                );
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .with_context(|| format!("No sheets found in {}", path.display()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let mut raw_rows = range.rows();

    // Headers come from the first row; non-string header cells are ignored
    let headers: Vec<String> = match raw_rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|c| match c {
                Data::String(s) => s.clone(),
                _ => String::new(),
            })
            .collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for raw_row in raw_rows {
        let mut row = SheetRow::new();

        for (col_idx, cell) in raw_row.iter().enumerate() {
            let header = headers.get(col_idx).map(|s| s.as_str()).unwrap_or("");
            if header.is_empty() {
                continue;
            }

            let value = CellValue::from_cell(cell);
            if value.is_null() {
                continue;
            }

            row.insert(header, value);
        }

        // Skip empty rows
        if row.is_blank() {
            continue;
        }

        rows.push(row);
    }

    log::debug!(
        "Read {} data rows from sheet '{}' of {}",
        rows.len(),
        sheet_name,
        path.display()
    );

    Ok(SheetTable {
        sheet_name,
        headers,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    fn write_workbook(dir: &TempDir, rows: &[Vec<&str>]) -> std::path::PathBuf {
        let path = dir.path().join("vehicles.xlsx");
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if !cell.is_empty() {
                    worksheet.write_string(r as u32, c as u16, *cell).unwrap();
                }
            }
        }
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_read_sheet_table_headers_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_workbook(
            &dir,
            &[
                vec!["Vehicle No", "Model", "Fuel"],
                vec!["KA-01-1234", "Tata Ace", "Diesel"],
                vec!["", "", ""],
                vec!["KA-02-9999", "", "CNG"],
            ],
        );

        let table = read_sheet_table(&path, None).unwrap();
        assert_eq!(table.headers, vec!["Vehicle No", "Model", "Fuel"]);
        assert!(table.has_column("Vehicle No"));
        assert!(!table.has_column("Capacity"));

        // The all-blank row is dropped
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0].get("Model"),
            Some(&CellValue::Text("Tata Ace".to_string()))
        );
        assert_eq!(table.rows[1].get("Model"), None);
        assert_eq!(
            table.rows[1].get("Fuel"),
            Some(&CellValue::Text("CNG".to_string()))
        );
    }

    #[test]
    fn test_read_sheet_table_missing_sheet() {
        let dir = TempDir::new().unwrap();
        let path = write_workbook(&dir, &[vec!["Vehicle No"]]);

        let err = read_sheet_table(&path, Some("Fleet")).unwrap_err();
        assert!(err.to_string().contains("Sheet 'Fleet' not found"));
    }

    #[test]
    fn test_read_sheet_table_headers_only() {
        let dir = TempDir::new().unwrap();
        let path = write_workbook(&dir, &[vec!["Vehicle No", "Model"]]);

        let table = read_sheet_table(&path, None).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.headers.len(), 2);
    }
}
