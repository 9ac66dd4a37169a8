//! MongoDB access for the fleet database

use anyhow::{Context, Result};
use mongodb::bson::Document;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use crate::config::MongoConfig;

/// Handle to the fleet database and its vehicles collection.
pub struct FleetDb {
    database: Database,
    vehicles: Collection<Document>,
}

impl FleetDb {
    /// Connect to the configured deployment.
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let options = ClientOptions::parse(&config.uri)
            .await
            .with_context(|| format!("Invalid MongoDB connection string: {}", config.uri))?;
        let client = Client::with_options(options).context("Failed to create MongoDB client")?;

        let database = client.database(&config.database);
        let vehicles = database.collection::<Document>(&config.collection);

        Ok(Self { database, vehicles })
    }

    /// Insert a batch of vehicle documents in one call. Returns the number
    /// of documents the server acknowledged.
    pub async fn insert_vehicles(&self, documents: &[Document]) -> Result<usize> {
        let result = self
            .vehicles
            .insert_many(documents, None)
            .await
            .context("Failed to insert vehicle documents")?;

        Ok(result.inserted_ids.len())
    }

    /// List the collections present in the database. Doubles as the
    /// connectivity check: it fails fast when the deployment is unreachable.
    pub async fn collection_names(&self) -> Result<Vec<String>> {
        self.database
            .list_collection_names(None)
            .await
            .context("Failed to list collections")
    }
}
