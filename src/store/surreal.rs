//! SurrealDB-backed user store.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::generate_api_key;
use crate::db::{Db, UserCreate, UserRecord};
use crate::store::{StoreError, User, UserStore};
use crate::types::{ApiKey, UserId};

/// User store for database operations.
#[derive(Clone)]
pub struct SurrealUserStore {
    db: Db,
}

impl SurrealUserStore {
    /// Create a new user store. The schema must already exist.
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    async fn insert(&self, create: UserCreate) -> Result<(), StoreError> {
        let created_at = create.created_at.to_rfc3339();

        let query = r#"
            CREATE user CONTENT {
                user_id: $user_id,
                name: $name,
                api_key: $api_key,
                created_at: $created_at,
                updated_at: $created_at
            }
        "#;

        self.db
            .query(query)
            .bind(("user_id", create.user_id.into_inner()))
            .bind(("name", create.name))
            .bind(("api_key", create.api_key.into_inner()))
            .bind(("created_at", created_at))
            .await?
            .check()?;

        Ok(())
    }

    async fn find_one(
        &self,
        query: &'static str,
        field: &'static str,
        value: String,
    ) -> Result<User, StoreError> {
        let mut res = self.db.query(query).bind((field, value)).await?;

        let users: Vec<UserRecord> = res.take(0)?;
        let record = users.into_iter().next().ok_or(StoreError::NotFound)?;

        User::try_from(record)
            .map_err(|e| StoreError::Backend(format!("Invalid timestamp: {}", e)))
    }
}

#[async_trait]
impl UserStore for SurrealUserStore {
    async fn create_user(&self, name: &str) -> Result<UserId, StoreError> {
        let user_id = UserId::new(Uuid::new_v4().to_string());

        let create = UserCreate {
            user_id: user_id.clone(),
            name: name.to_string(),
            api_key: generate_api_key(),
            created_at: Utc::now(),
        };

        self.insert(create).await?;

        info!("Created user {}", user_id);
        Ok(user_id)
    }

    async fn get_user(&self, api_key: &ApiKey) -> Result<User, StoreError> {
        let query = r#"
            SELECT user_id, name, api_key, created_at, updated_at FROM user
            WHERE api_key = $api_key
            LIMIT 1
        "#;

        let user = self
            .find_one(query, "api_key", api_key.as_str().to_string())
            .await?;

        debug!("Resolved API key to user {}", user.id);
        Ok(user)
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, StoreError> {
        let query = r#"
            SELECT user_id, name, api_key, created_at, updated_at FROM user
            WHERE user_id = $user_id
            LIMIT 1
        "#;

        self.find_one(query, "user_id", id.as_str().to_string()).await
    }
}
