// ============================
// gatekey-backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the gatekey authentication server.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod storage;

use std::sync::Arc;

use crate::auth::{AuthService, TokenService};
use crate::config::Settings;
use crate::storage::UserStore;

/// Application state shared across all handlers
pub struct AppState<S> {
    /// Authentication flows (registration, login, guarded lookup)
    pub auth: AuthService<S>,
    /// Settings loaded once at startup
    pub settings: Arc<Settings>,
}

impl<S: UserStore> AppState<S> {
    /// Create a new application state.
    ///
    /// The token service is built here from the configured signing secret,
    /// so state construction is the only place the secret is read.
    pub fn new(store: S, settings: Settings) -> Self {
        let tokens = TokenService::new(&settings.secret_key);
        Self {
            auth: AuthService::new(store, tokens),
            settings: Arc::new(settings),
        }
    }
}
