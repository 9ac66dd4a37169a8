//! Import command handler: workbook to vehicles collection

use anyhow::{Context, Result};
use colored::*;
use mongodb::bson::Document;

use crate::cli::ImportArgs;
use crate::config::{MongoConfig, VehicleDefaults};
use crate::db::FleetDb;
use crate::excel::read_sheet_table;
use crate::vehicle::{VehicleRecord, transform_table};

/// Handle the import command end to end.
///
/// Reads and transforms before any connection is made, so a workbook with
/// no usable rows never touches the database.
pub async fn handle_import_command(args: ImportArgs) -> Result<()> {
    let mongo = MongoConfig::resolve(args.uri, args.database, args.collection);
    let defaults = VehicleDefaults {
        status: args.default_status,
        year: args.default_year,
        color: args.default_color,
    };

    // Read the workbook
    log::info!("Reading workbook {}", args.file.display());
    let table = read_sheet_table(&args.file, args.sheet.as_deref())?;
    println!(
        "Columns in sheet '{}': {:?}",
        table.sheet_name, table.headers
    );

    // Transform rows into vehicle records
    let records = transform_table(&table, &defaults)?;

    if records.is_empty() {
        log::warn!("No vehicle rows found in sheet '{}'", table.sheet_name);
        println!("{}", "No vehicle records found to import.".yellow());
        return Ok(());
    }

    let documents: Vec<Document> = records.iter().map(VehicleRecord::to_document).collect();

    if args.dry_run {
        println!(
            "{}",
            format!(
                "Dry run: {} vehicle records ready for {}/{}",
                documents.len(),
                mongo.database,
                mongo.collection
            )
            .cyan()
        );
        let sample = serde_json::to_string_pretty(&records[0])
            .context("Failed to render sample record")?;
        println!("Sample record:\n{}", sample);
        return Ok(());
    }

    // Insert the batch
    log::info!("Connecting to {}", mongo.redacted_uri());
    let db = FleetDb::connect(&mongo).await?;
    let inserted = db.insert_vehicles(&documents).await?;

    println!(
        "{}",
        format!("Inserted {} vehicle records successfully!", inserted).green()
    );
    if let Some(sample) = documents.first() {
        println!("Sample document: {}", sample);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
    use tempfile::TempDir;

    // Exercises the full pre-insert pipeline against a real workbook:
    // read, transform, encode. The three rows cover the three date
    // outcomes (typed shape, native date cell, unparseable text).
    #[test]
    fn test_workbook_to_documents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vehicles.xlsx");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let date_format = Format::new().set_num_format("dd/mm/yyyy");

        let headers = [
            "Vehicle No",
            "Model",
            "Fuel",
            "Capacity",
            "REG. DATE",
            "Insurance F",
        ];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header).unwrap();
        }

        worksheet.write_string(1, 0, "KA-01-1111").unwrap();
        worksheet.write_string(1, 1, "Tata Ace").unwrap();
        worksheet.write_string(1, 2, "Diesel").unwrap();
        worksheet.write_number(1, 3, 2.0).unwrap();
        worksheet.write_string(1, 4, "Aug-24").unwrap();
        worksheet.write_string(1, 5, "04-Jul-25").unwrap();

        worksheet.write_string(2, 0, "KA-02-2222").unwrap();
        worksheet
            .write_datetime_with_format(
                2,
                4,
                &ExcelDateTime::from_ymd(2023, 3, 17).unwrap(),
                &date_format,
            )
            .unwrap();

        worksheet.write_string(3, 0, "KA-03-3333").unwrap();
        worksheet.write_string(3, 4, "expired").unwrap();

        workbook.save(&path).unwrap();

        let table = read_sheet_table(&path, None).unwrap();
        let records = transform_table(&table, &VehicleDefaults::default()).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].vehicle_number, "KA-01-1111");
        assert_eq!(records[0].fuel_type, "diesel");
        assert_eq!(records[0].seating_capacity, 2);
        assert_eq!(
            records[0].registration_date.map(|d| d.date_naive()),
            NaiveDate::from_ymd_opt(2024, 8, 1)
        );
        assert_eq!(
            records[0].insurance_expiry.map(|d| d.date_naive()),
            NaiveDate::from_ymd_opt(2025, 7, 4)
        );

        // Native Excel date passes through
        assert_eq!(
            records[1].registration_date.map(|d| d.date_naive()),
            NaiveDate::from_ymd_opt(2023, 3, 17)
        );

        // Unparseable text degrades to no date
        assert_eq!(records[2].registration_date, None);

        let documents: Vec<Document> = records.iter().map(VehicleRecord::to_document).collect();
        assert_eq!(documents.len(), 3);
        assert_eq!(
            documents[0].get_str("vehicleNumber").unwrap(),
            "KA-01-1111"
        );
        assert!(documents[2].is_null("registrationDate"));
    }

    #[test]
    fn test_workbook_with_headers_only_yields_empty_batch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Vehicle No").unwrap();
        workbook.save(&path).unwrap();

        let table = read_sheet_table(&path, None).unwrap();
        let records = transform_table(&table, &VehicleDefaults::default()).unwrap();
        assert!(records.is_empty());
    }

    // The URI here cannot even parse, so reaching Ok means the handler
    // returned on the empty batch before any connection was attempted.
    #[tokio::test]
    async fn test_import_empty_workbook_never_connects() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Vehicle No").unwrap();
        workbook.save(&path).unwrap();

        let args = ImportArgs {
            file: path,
            sheet: None,
            uri: Some("bogus://example.invalid".to_string()),
            database: "mainffc".to_string(),
            collection: "vehicles".to_string(),
            default_status: "active".to_string(),
            default_year: 2024,
            default_color: "White".to_string(),
            dry_run: false,
        };

        handle_import_command(args).await.unwrap();
    }
}
