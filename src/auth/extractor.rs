//! Authentication extractor for HTTP requests.

use axum::extract::{FromRef, FromRequestParts};
use http::request::Parts;
use sha2::{Digest, Sha256};
use tracing::debug;
use uuid::Uuid;

use crate::api::{ApiError, AppState};
use crate::auth::header::get_api_key;
use crate::store::User;
use crate::types::ApiKey;

/// The user resolved from the request's `Authorization` header.
///
/// Use as a handler argument to require authentication; the request is
/// rejected with an [`ApiError`] before the handler runs otherwise.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let key = ApiKey::new(get_api_key(&parts.headers)?);
        let user = state.store.get_user(&key).await?;

        debug!("Request authenticated for user {}", user.id);
        Ok(Self(user))
    }
}

/// Generate a fresh API key: the hex SHA-256 digest of 32 random bytes.
pub fn generate_api_key() -> ApiKey {
    let mut bytes = [0u8; 32];
    bytes[..16].copy_from_slice(Uuid::new_v4().as_bytes());
    bytes[16..].copy_from_slice(Uuid::new_v4().as_bytes());

    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    ApiKey::new(format!("{:x}", result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_api_key_is_sha256_hex() {
        let key = generate_api_key();
        assert_eq!(key.as_str().len(), 64);
        assert!(
            key.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_generate_api_key_is_random() {
        let key1 = generate_api_key();
        let key2 = generate_api_key();
        assert_ne!(key1, key2);
    }
}
