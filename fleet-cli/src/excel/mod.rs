//! Excel workbook reading

pub mod reader;
pub mod value;

pub use reader::{SheetRow, SheetTable, read_sheet_table};
pub use value::CellValue;
