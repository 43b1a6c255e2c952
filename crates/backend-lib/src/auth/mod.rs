// ============================
// gatekey-backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod guard;
pub mod password;
mod service;
pub mod token;

pub use guard::{authorize, extract_bearer};
pub use password::{hash_password, verify_password, HASH_COST};
pub use service::AuthService;
pub use token::TokenService;
