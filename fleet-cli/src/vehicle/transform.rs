//! Spreadsheet row to vehicle record mapping

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};

use crate::config::VehicleDefaults;
use crate::excel::{CellValue, SheetRow, SheetTable};

use super::dates::parse_date_cell;
use super::record::VehicleRecord;

/// The one column that must exist in the sheet. Every other column falls
/// back to an empty or zero value when absent.
pub const VEHICLE_NUMBER_COLUMN: &str = "Vehicle No";

/// Transform every row of a sheet into vehicle records.
///
/// A sheet with no data rows yields an empty batch without further checks;
/// a sheet that has rows but no `Vehicle No` column is an error, as is any
/// row whose numeric columns hold non-numeric text. Failures carry the
/// 1-based spreadsheet row number.
pub fn transform_table(table: &SheetTable, defaults: &VehicleDefaults) -> Result<Vec<VehicleRecord>> {
    if table.is_empty() {
        return Ok(Vec::new());
    }

    if !table.has_column(VEHICLE_NUMBER_COLUMN) {
        bail!(
            "Required column '{}' not found in sheet '{}' (columns: {:?})",
            VEHICLE_NUMBER_COLUMN,
            table.sheet_name,
            table.headers
        );
    }

    table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            // +2: headers occupy row 1 of the sheet
            transform_row(row, defaults)
                .with_context(|| format!("Failed to transform row {}", idx + 2))
        })
        .collect()
}

/// Map a single row to a vehicle record.
///
/// Text columns coerce to strings (blank when missing), fuel type is
/// lowercased, and the two numeric columns truncate toward zero. Date
/// columns degrade to `None` when unparseable; they never error.
pub fn transform_row(row: &SheetRow, defaults: &VehicleDefaults) -> Result<VehicleRecord> {
    let now = Utc::now();

    Ok(VehicleRecord {
        vehicle_number: text_field(row, VEHICLE_NUMBER_COLUMN).trim().to_string(),
        model: text_field(row, "Model"),
        make: text_field(row, "Make"),
        company_name: text_field(row, "Company Name"),
        branch: text_field(row, "Location"),
        status: defaults.status.clone(),
        year: defaults.year,
        color: defaults.color.clone(),
        fuel_type: text_field(row, "Fuel").to_lowercase(),
        seating_capacity: int_field(row, "Capacity")?,
        cargo_length: int_field(row, "C. LENGTH")?,
        engine_number: text_field(row, "Engine No"),
        chassis_number: text_field(row, "Chassis No"),
        vehicle_details: text_field(row, "Veh. Details"),
        ac_model: text_field(row, "AC Model"),
        registration_date: date_field(row, "REG. DATE"),
        insurance_expiry: date_field(row, "Insurance F"),
        // Not tracked in the sheets yet, inserted as nulls for the app
        fitness_expiry: None,
        puc_expiry: None,
        created_at: now,
        updated_at: now,
    })
}

fn text_field(row: &SheetRow, column: &str) -> String {
    row.get(column).map(CellValue::to_text).unwrap_or_default()
}

fn int_field(row: &SheetRow, column: &str) -> Result<i64> {
    match row.get(column) {
        None => Ok(0),
        Some(value) => value.to_int().with_context(|| {
            format!(
                "Column '{}' holds a non-numeric value: '{}'",
                column,
                value.to_text()
            )
        }),
    }
}

fn date_field(row: &SheetRow, column: &str) -> Option<DateTime<Utc>> {
    row.get(column)
        .and_then(parse_date_cell)
        .map(|dt| dt.and_utc())
}
