// ============================
// gatekey-backend-lib/src/router.rs
// ============================
//! Axum router construction.
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::MessageResponse;
use crate::storage::UserStore;
use crate::AppState;

/// Build the application router.
pub fn create_router<S: UserStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/user/{id}", get(handlers::users::get_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open route: health check.
async fn health() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "OK".to_string(),
    })
}
