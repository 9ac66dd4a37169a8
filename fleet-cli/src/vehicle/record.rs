//! The vehicle document shape written to the vehicles collection

use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, Document, doc};
use serde::Serialize;

/// One vehicle master record, built from one spreadsheet row.
///
/// Serializes with camelCase keys to match the fleet application's
/// collection schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub vehicle_number: String,
    pub model: String,
    pub make: String,
    pub company_name: String,
    pub branch: String,
    pub status: String,
    pub year: i32,
    pub color: String,
    pub fuel_type: String,
    pub seating_capacity: i64,
    pub cargo_length: i64,
    pub engine_number: String,
    pub chassis_number: String,
    pub vehicle_details: String,
    pub ac_model: String,
    pub registration_date: Option<DateTime<Utc>>,
    pub insurance_expiry: Option<DateTime<Utc>>,
    pub fitness_expiry: Option<DateTime<Utc>>,
    pub puc_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VehicleRecord {
    /// Encode as the BSON document to insert. Every key is always present;
    /// dates that did not parse become explicit nulls.
    pub fn to_document(&self) -> Document {
        doc! {
            "vehicleNumber": self.vehicle_number.as_str(),
            "model": self.model.as_str(),
            "make": self.make.as_str(),
            "companyName": self.company_name.as_str(),
            "branch": self.branch.as_str(),
            "status": self.status.as_str(),
            "year": self.year,
            "color": self.color.as_str(),
            "fuelType": self.fuel_type.as_str(),
            "seatingCapacity": self.seating_capacity,
            "cargoLength": self.cargo_length,
            "engineNumber": self.engine_number.as_str(),
            "chassisNumber": self.chassis_number.as_str(),
            "vehicleDetails": self.vehicle_details.as_str(),
            "acModel": self.ac_model.as_str(),
            "registrationDate": bson_date(self.registration_date),
            "insuranceExpiry": bson_date(self.insurance_expiry),
            "fitnessExpiry": bson_date(self.fitness_expiry),
            "pucExpiry": bson_date(self.puc_expiry),
            "createdAt": Bson::DateTime(self.created_at.into()),
            "updatedAt": Bson::DateTime(self.updated_at.into()),
        }
    }
}

fn bson_date(value: Option<DateTime<Utc>>) -> Bson {
    match value {
        Some(dt) => Bson::DateTime(dt.into()),
        None => Bson::Null,
    }
}
