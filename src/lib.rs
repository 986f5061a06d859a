// Core modules
pub mod api;
pub mod auth;
pub mod db;
pub mod store;
pub mod types;

// Re-export key types and functions
pub use api::{ApiError, AppState, create_router};
pub use auth::{AuthError, AuthenticatedUser, generate_api_key, get_api_key};
pub use db::{DatabaseConfig, create_connection, ensure_schema};
pub use store::{InMemoryUserStore, StoreError, SurrealUserStore, User, UserStore};
pub use types::{ApiKey, UserId};

use std::sync::Arc;
use anyhow::Result;
use tracing::info;

/// Connect to the database, make sure the schema exists, and return a
/// SurrealDB-backed user store.
pub async fn create_store(config: DatabaseConfig) -> Result<Arc<dyn UserStore>> {
    info!("Using database url: {}", config.url);

    let db = create_connection(config).await?;
    ensure_schema(&db).await?;

    Ok(Arc::new(SurrealUserStore::new(db)))
}
