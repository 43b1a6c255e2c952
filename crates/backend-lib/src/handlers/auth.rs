// ============================
// gatekey-backend-lib/src/handlers/auth.rs
// ============================
//! POST /auth/register and POST /auth/login.
use std::sync::Arc;

use axum::{extract::State, Json};

use crate::error::AppError;
use crate::models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::storage::UserStore;
use crate::AppState;

/// Handle `POST /auth/register`.
///
/// # Errors
///
/// Returns `422` on a validation failure or a duplicate email, `500` if the
/// store write fails.
pub async fn register<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = state.auth.register(body).await?;
    Ok(Json(response))
}

/// Handle `POST /auth/login`.
///
/// # Errors
///
/// Returns `422` on a validation failure, an unknown email, or a wrong
/// password, `500` on an internal failure.
pub async fn login<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = state.auth.login(body).await?;
    Ok(Json(response))
}
