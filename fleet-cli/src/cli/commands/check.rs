//! Connectivity check against the fleet database

use anyhow::{Context, Result};
use colored::*;

use crate::cli::CheckArgs;
use crate::config::{DEFAULT_COLLECTION, MongoConfig};
use crate::db::FleetDb;

/// Connect, list collections, and report what the database holds.
pub async fn handle_check_command(args: CheckArgs) -> Result<()> {
    let mongo = MongoConfig::resolve(args.uri, args.database, DEFAULT_COLLECTION.to_string());

    log::info!("Testing connection to {}", mongo.redacted_uri());
    let db = FleetDb::connect(&mongo).await?;
    let collections = db
        .collection_names()
        .await
        .with_context(|| format!("Could not reach database '{}'", mongo.database))?;

    println!(
        "{}",
        format!("Connected to database '{}'.", mongo.database).green()
    );
    if collections.is_empty() {
        println!("No collections yet.");
    } else {
        println!("Collections:");
        for name in collections {
            println!("  {}", name);
        }
    }

    Ok(())
}
