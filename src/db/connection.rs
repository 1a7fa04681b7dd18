use std::sync::Arc;

use mongodb::{bson::doc, options::ClientOptions, Client};
use tracing::info;

use crate::config::{Config, StoreKind};
use crate::db::{memory::MemoryStore, mongo::MongoStore, Datastore};
use crate::utils::error::{AppError, AppResult};

pub async fn init_db(mongo_uri: &str, db_name: &str) -> AppResult<MongoStore> {
    let mut client_options = ClientOptions::parse(mongo_uri)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to parse MongoDB URI: {}", e)))?;

    client_options.app_name = Some("PollingApp".to_string());

    let client = Client::with_options(client_options)
        .map_err(|e| AppError::DatabaseError(format!("Failed to initialize MongoDB client: {}", e)))?;

    let db = client.database(db_name);
    db.run_command(doc! { "ping": 1 }).await?;

    info!(database = db_name, "Database connection successful");

    let store = MongoStore::new(client, db);
    store.ensure_indexes().await?;

    Ok(store)
}

/// Builds the backend selected by `STORE`.
pub async fn init_store(config: &Config) -> AppResult<Arc<dyn Datastore>> {
    match config.store {
        StoreKind::Mongo => {
            let uri = config
                .mongo_uri
                .as_deref()
                .ok_or_else(|| AppError::InternalError("MONGO_URI must be set in .env".to_string()))?;
            let name = config
                .db_name
                .as_deref()
                .ok_or_else(|| AppError::InternalError("DB_NAME must be set in .env".to_string()))?;

            Ok(Arc::new(init_db(uri, name).await?))
        }
        StoreKind::Memory => {
            info!("Using in-memory store; data is lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
