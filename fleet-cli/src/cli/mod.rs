//! Command-line interface definitions

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config;

#[derive(Parser)]
#[command(
    name = "fleet-cli",
    version,
    about = "Import fleet vehicle masters from Excel into MongoDB"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import vehicle rows from an Excel workbook into the vehicles collection
    Import(ImportArgs),
    /// Verify connectivity to the fleet database
    Check(CheckArgs),
}

#[derive(Args)]
pub struct ImportArgs {
    /// Path to the .xlsx workbook holding one vehicle per row
    pub file: PathBuf,

    /// Worksheet to read; defaults to the first sheet in the workbook
    #[arg(long)]
    pub sheet: Option<String>,

    /// MongoDB connection string; falls back to $MONGO_URI, then localhost
    #[arg(long)]
    pub uri: Option<String>,

    /// Database name
    #[arg(long, default_value = config::DEFAULT_DATABASE)]
    pub database: String,

    /// Collection name
    #[arg(long, default_value = config::DEFAULT_COLLECTION)]
    pub collection: String,

    /// Status stamped onto every imported vehicle
    #[arg(long, default_value = config::DEFAULT_STATUS)]
    pub default_status: String,

    /// Model year recorded when the sheet has no year column
    #[arg(long, default_value_t = config::DEFAULT_YEAR)]
    pub default_year: i32,

    /// Color recorded when the sheet has no color column
    #[arg(long, default_value = config::DEFAULT_COLOR)]
    pub default_color: String,

    /// Transform and report without touching the database
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// MongoDB connection string; falls back to $MONGO_URI, then localhost
    #[arg(long)]
    pub uri: Option<String>,

    /// Database name
    #[arg(long, default_value = config::DEFAULT_DATABASE)]
    pub database: String,
}
