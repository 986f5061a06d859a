// REST API endpoints

mod error;

pub use error::ApiError;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::AuthenticatedUser;
use crate::store::{User, UserStore};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/healthz", get(handler_readiness))
        .route("/v1/users", get(get_current_user).post(create_user))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn handler_readiness() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct CreateUserRequest {
    name: String,
}

async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    let id = state.store.create_user(name).await?;
    let user = state.store.get_user_by_id(&id).await?;

    info!("User {} registered via API", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

/// Return the user that owns the request's API key.
async fn get_current_user(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}
