// ============================
// gatekey-backend-lib/src/handlers/users.rs
// ============================
//! GET /user/{id} — bearer-guarded public profile lookup.
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::auth::guard;
use crate::error::AppError;
use crate::models::PublicUser;
use crate::storage::UserStore;
use crate::AppState;

/// Handle `GET /user/{id}`.
///
/// The guard runs before the body: a missing token is `401`, an invalid
/// token is `400`. The verified caller identity is available to the
/// handler, not discarded.
///
/// # Errors
///
/// Returns `404` if no user has the requested id.
pub async fn get_user<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<PublicUser>, AppError> {
    let caller = guard::authorize(&headers, state.auth.tokens())?;
    tracing::debug!(%caller, user = %id, "profile lookup");

    let user = state.auth.get_user(&id).await?;
    Ok(Json(user))
}
