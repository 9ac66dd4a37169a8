//! Normalized cell values read from vehicle spreadsheets

use calamine::Data;
use chrono::NaiveDateTime;

/// A single spreadsheet cell after normalization.
///
/// Empty cells and empty strings collapse to `Null`, and native Excel
/// date cells are decoded eagerly so downstream code never sees raw
/// serial numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Convert a raw calamine cell into a normalized value.
    pub fn from_cell(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Null,
            Data::String(s) if s.is_empty() => CellValue::Null,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => CellValue::DateTime(naive),
                None => CellValue::Null,
            },
            // ISO strings are rare in these workbooks; keep them as text so
            // the date parser can still have a look at them
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) => CellValue::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Render the cell as it reads in the sheet. Whole floats drop their
    /// fractional part, so a numeric cell holding `4.0` becomes `"4"`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(dt) => dt.to_string(),
        }
    }

    /// Whole-number view of the cell, truncating floats toward zero.
    /// Returns `None` for anything that does not read as a number.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) => Some(*f as i64),
            CellValue::Bool(b) => Some(i64::from(*b)),
            CellValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
