//! HTTP error responses.

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};

use crate::auth::AuthError;
use crate::store::StoreError;

/// Errors returned by API handlers, rendered as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request body or parameters are invalid
    BadRequest(String),
    /// The `Authorization` header is missing or malformed
    Auth(AuthError),
    /// The store lookup failed
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "{}", msg),
            Self::Auth(err) => write!(f, "{}", err),
            Self::Store(StoreError::NotFound) => write!(f, "couldn't get user"),
            Self::Store(StoreError::Backend(_)) => write!(f, "internal server error"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Store(StoreError::Backend(msg)) => error!("Request failed: {}", msg),
            other => warn!("Request rejected ({}): {}", status.as_u16(), other),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
