//! User storage.
//!
//! [`UserStore`] is the capability the HTTP layer depends on. Two
//! implementations are provided:
//!
//! - [`SurrealUserStore`]: persistent storage in the `user` table
//! - [`InMemoryUserStore`]: process-local maps, for tests and throwaway runs

mod memory;
mod surreal;

pub use memory::InMemoryUserStore;
pub use surreal::SurrealUserStore;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ApiKey, UserId};

/// A user and the API key that identifies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub api_key: ApiKey,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User storage errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No user matches the lookup
    NotFound,
    /// The backing store failed (constraint violation, connectivity, decoding)
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "user not found"),
            Self::Backend(msg) => write!(f, "store error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Create and look up users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user with a fresh id and API key, returning the id.
    async fn create_user(&self, name: &str) -> Result<UserId, StoreError>;

    /// Find the user owning `api_key` (exact, case-sensitive match).
    async fn get_user(&self, api_key: &ApiKey) -> Result<User, StoreError>;

    /// Find a user by id.
    async fn get_user_by_id(&self, id: &UserId) -> Result<User, StoreError>;
}
