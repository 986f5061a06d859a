use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;
use tracing::debug;

pub type Db = Surreal<Any>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: env::var("SURREALDB_URL").unwrap_or_else(|_| "memory".to_string()),
            namespace: env::var("SURREALDB_NAMESPACE").unwrap_or_else(|_| "notely".to_string()),
            database: env::var("SURREALDB_DATABASE").unwrap_or_else(|_| "notely".to_string()),
            username: env::var("SURREALDB_USERNAME").ok(),
            password: env::var("SURREALDB_PASSWORD").ok(),
        }
    }
}

pub async fn create_connection(config: DatabaseConfig) -> Result<Db> {
    let db = surrealdb::engine::any::connect(config.url).await?;

    // Sign in if credentials are provided
    if let (Some(username), Some(password)) = (config.username, config.password) {
        db.signin(Root {
            username: &username,
            password: &password,
        })
        .await?;
    }

    db.use_ns(config.namespace).use_db(config.database).await?;

    Ok(db)
}

pub async fn ensure_schema(db: &Db) -> Result<()> {
    let schema_queries = vec![
        "DEFINE TABLE IF NOT EXISTS user SCHEMAFULL;
         DEFINE FIELD IF NOT EXISTS user_id ON TABLE user TYPE string;
         DEFINE FIELD IF NOT EXISTS name ON TABLE user TYPE string;
         DEFINE FIELD IF NOT EXISTS api_key ON TABLE user TYPE string;
         DEFINE FIELD IF NOT EXISTS created_at ON TABLE user TYPE string;
         DEFINE FIELD IF NOT EXISTS updated_at ON TABLE user TYPE string;",
        // One user per id, one user per API key
        "DEFINE INDEX IF NOT EXISTS user_user_id ON TABLE user COLUMNS user_id UNIQUE;
         DEFINE INDEX IF NOT EXISTS user_api_key ON TABLE user COLUMNS api_key UNIQUE;",
    ];

    for query in schema_queries {
        db.query(query).await?.check()?;
    }

    debug!("Database schema ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "memory".to_string(),
            namespace: "test".to_string(),
            database: "test".to_string(),
            username: None,
            password: None,
        }
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = create_connection(memory_config()).await.unwrap();
        ensure_schema(&db).await.unwrap();
        ensure_schema(&db).await.unwrap();
    }
}
