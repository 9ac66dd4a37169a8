//! Vehicle domain: record shape, date parsing, row transformation

pub mod dates;
pub mod record;
pub mod transform;

pub use record::VehicleRecord;
pub use transform::transform_table;
