// ============================
// gatekey-backend-lib/src/handlers/mod.rs
// ============================
//! HTTP handlers for the gatekey authentication server.

pub mod auth;
pub mod users;
