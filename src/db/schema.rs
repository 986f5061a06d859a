use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::User;
use crate::types::{ApiKey, UserId};

/// Persisted user row in the `user` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Generated user identifier (UUID v4)
    pub user_id: String,
    /// Display name given at creation
    pub name: String,
    /// Generated API key, unique across the table
    pub api_key: String,
    /// RFC 3339 creation time
    pub created_at: String,
    /// RFC 3339 last update time
    pub updated_at: String,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub user_id: UserId,
    pub name: String,
    pub api_key: ApiKey,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = chrono::ParseError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(record.user_id),
            name: record.name,
            api_key: ApiKey::new(record.api_key),
            created_at: DateTime::parse_from_rfc3339(&record.created_at)?.with_timezone(&Utc),
            updated_at: DateTime::parse_from_rfc3339(&record.updated_at)?.with_timezone(&Utc),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_into_user() {
        let record = UserRecord {
            user_id: "id-1".to_string(),
            name: "alice".to_string(),
            api_key: "key-1".to_string(),
            created_at: "2024-01-02T03:04:05+00:00".to_string(),
            updated_at: "2024-01-02T03:04:05+00:00".to_string(),
        };

        let user = User::try_from(record).unwrap();
        assert_eq!(user.id.as_str(), "id-1");
        assert_eq!(user.name, "alice");
        assert_eq!(user.api_key.as_str(), "key-1");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_user_record_bad_timestamp() {
        let record = UserRecord {
            user_id: "id-1".to_string(),
            name: "alice".to_string(),
            api_key: "key-1".to_string(),
            created_at: "yesterday".to_string(),
            updated_at: "2024-01-02T03:04:05+00:00".to_string(),
        };

        assert!(User::try_from(record).is_err());
    }
}
