// ============================
// gatekey-backend-lib/src/auth/service.rs
// ============================
//! Registration and login flows composing the hasher, the token service
//! and the credential store.
use super::{password, token::TokenService};
use crate::error::AppError;
use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, NewUser, PublicUser, RegisterRequest,
};
use crate::storage::UserStore;

/// Authentication flows over a credential store.
pub struct AuthService<S> {
    store: S,
    tokens: TokenService,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(store: S, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    /// Token service accessor, used by the access guard.
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Register a new user.
    ///
    /// Validation is fail-fast in request-field order; nothing touches the
    /// store until every check passes. Success is reported only after the
    /// record is persisted.
    pub async fn register(&self, req: RegisterRequest) -> Result<MessageResponse, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }
        if req.email.trim().is_empty() {
            return Err(AppError::Validation("email is required".to_string()));
        }
        if req.password.is_empty() {
            return Err(AppError::Validation("password is required".to_string()));
        }
        if req.password != req.confirm_password {
            return Err(AppError::Validation(
                "the passwords do not match".to_string(),
            ));
        }

        // Friendly pre-check; the store's own uniqueness constraint is the
        // backstop under concurrent registration.
        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::Conflict("email already in use".to_string()));
        }

        // bcrypt is CPU-bound; keep it off the async dispatcher.
        let plain = req.password;
        let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&plain))
            .await?
            .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

        let user = self
            .store
            .insert(NewUser {
                name: req.name,
                email: req.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(MessageResponse {
            message: "user created successfully".to_string(),
        })
    }

    /// Log a user in, issuing a bearer token on success.
    ///
    /// The plaintext password is never logged, stored, or echoed.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        if req.password.is_empty() {
            return Err(AppError::Validation("password is required".to_string()));
        }
        if req.email.trim().is_empty() {
            return Err(AppError::Validation("email is required".to_string()));
        }

        let user = self
            .store
            .find_by_email(&req.email)
            .await?
            .ok_or(AppError::NoSuchUser)?;

        let plain = req.password;
        let hash = user.password_hash.clone();
        let password_ok =
            tokio::task::spawn_blocking(move || password::verify_password(&hash, &plain)).await?;

        if !password_ok {
            return Err(AppError::InvalidCredential);
        }

        let token = self.tokens.issue(&user.id)?;
        tracing::info!(user_id = %user.id, "login successful");

        Ok(LoginResponse {
            message: "login successful".to_string(),
            token,
        })
    }

    /// Fetch the public projection of a user by id.
    pub async fn get_user(&self, id: &str) -> Result<PublicUser, AppError> {
        let user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        Ok(PublicUser::from(&user))
    }
}
