// ============================
// gatekey-backend-lib/src/auth/guard.rs
// ============================
//! Bearer-token access guard.
use axum::http::{header, HeaderMap};

use super::token::TokenService;
use crate::error::AppError;

/// Extract the raw token from an `Authorization: Bearer <token>` header value.
pub fn extract_bearer(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Verify the request's bearer credential and return the subject user id.
///
/// A missing or shapeless `Authorization` header fails with `Unauthorized`
/// (401); a present but unverifiable token fails with `InvalidToken` (400).
/// The verified identity is returned so the protected handler receives it
/// as input instead of discarding it.
pub fn authorize(headers: &HeaderMap, tokens: &TokenService) -> Result<String, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer)
        .ok_or(AppError::Unauthorized)?;

    tokens.verify(token)
}
