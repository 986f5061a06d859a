//! In-memory user store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::generate_api_key;
use crate::store::{StoreError, User, UserStore};
use crate::types::{ApiKey, UserId};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    by_api_key: HashMap<ApiKey, UserId>,
}

/// User store holding everything in process memory.
#[derive(Default)]
pub struct InMemoryUserStore {
    tables: RwLock<Tables>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_user(&self, name: &str) -> Result<UserId, StoreError> {
        let now = Utc::now();
        let user = User {
            id: UserId::new(Uuid::new_v4().to_string()),
            name: name.to_string(),
            api_key: generate_api_key(),
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        if tables.users.contains_key(&user.id) || tables.by_api_key.contains_key(&user.api_key) {
            return Err(StoreError::Backend("unique constraint violated".to_string()));
        }

        let id = user.id.clone();
        tables.by_api_key.insert(user.api_key.clone(), id.clone());
        tables.users.insert(id.clone(), user);
        Ok(id)
    }

    async fn get_user(&self, api_key: &ApiKey) -> Result<User, StoreError> {
        let tables = self.tables.read().await;
        tables
            .by_api_key
            .get(api_key)
            .and_then(|id| tables.users.get(id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, StoreError> {
        let tables = self.tables.read().await;
        tables.users.get(id).cloned().ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = InMemoryUserStore::new();
        assert!(store.is_empty().await);

        let id = store.create_user("alice").await.unwrap();
        let created = store.get_user_by_id(&id).await.unwrap();

        let user = store.get_user(&created.api_key).await.unwrap();
        assert_eq!(user.name, "alice");
        assert_eq!(user, created);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_key() {
        let store = InMemoryUserStore::new();
        store.create_user("alice").await.unwrap();

        let result = store.get_user(&ApiKey::new("nonexistent_key")).await;
        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_concurrent_creates() {
        let store = Arc::new(InMemoryUserStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create_user(&format!("user{i}")).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.len().await, 16);
    }
}
