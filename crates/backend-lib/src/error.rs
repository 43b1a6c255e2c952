// ============================
// gatekey-backend-lib/src/error.rs
// ============================
//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Missing bearer token")]
    Unauthorized,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid password")]
    InvalidCredential,

    #[error("User does not exist")]
    NoSuchUser,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Login and registration failures all surface as 422, matching
            // the public API contract. NoSuchUser is deliberately not a 404:
            // the login route never reveals resource-level detail.
            AppError::Validation(_)
            | AppError::Conflict(_)
            | AppError::InvalidCredential
            | AppError::NoSuchUser => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VAL_001",
            AppError::Conflict(_) => "CONF_001",
            AppError::Unauthorized => "AUTH_001",
            AppError::InvalidToken => "AUTH_002",
            AppError::InvalidCredential => "AUTH_003",
            AppError::NoSuchUser => "AUTH_004",
            AppError::NotFound(_) => "NF_001",
            AppError::Storage(_) => "STORE_001",
            AppError::Internal(_) => "INT_001",
            AppError::Io(_) => "IO_001",
            AppError::Json(_) => "JSON_001",
        }
    }

    /// Get a sanitized message for 500-class errors. Client-caused errors
    /// keep their full message; backend detail never leaves the process.
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::Storage(_) | AppError::Internal(_) | AppError::Io(_) => {
                "An internal server error occurred".to_string()
            },
            AppError::Json(_) => "Invalid request format".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Server-side failures are logged in full and reported opaquely.
        if status.is_server_error() {
            tracing::error!(code = error_code, error = %self, "request failed");
        }
        let message = self.sanitized_message();

        let body = serde_json::json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Internal(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("background task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_app_error_display() {
        let validation_error = AppError::Validation("name is required".to_string());
        assert_eq!(
            validation_error.to_string(),
            "Validation error: name is required"
        );

        let io_error = AppError::Io(IoError::new(ErrorKind::NotFound, "File not found"));
        assert!(io_error.to_string().contains("IO error"));

        assert_eq!(AppError::Unauthorized.to_string(), "Missing bearer token");
        assert_eq!(AppError::InvalidToken.to_string(), "Invalid token");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::Validation("email is required".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Conflict("email already in use".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidCredential.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::NoSuchUser.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::NotFound("user not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Storage("disk full".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_error_codes() {
        assert_eq!(
            AppError::Validation("test".to_string()).error_code(),
            "VAL_001"
        );
        assert_eq!(AppError::Unauthorized.error_code(), "AUTH_001");
        assert_eq!(AppError::InvalidToken.error_code(), "AUTH_002");
        assert_eq!(AppError::InvalidCredential.error_code(), "AUTH_003");
        assert_eq!(AppError::NoSuchUser.error_code(), "AUTH_004");
        assert_eq!(
            AppError::Internal("test".to_string()).error_code(),
            "INT_001"
        );
    }

    #[test]
    fn test_sanitized_messages_hide_internals() {
        // 500-class detail must never reach the client
        let storage = AppError::Storage("disk /var/lib full".to_string());
        assert!(!storage.sanitized_message().contains("/var/lib"));

        let internal = AppError::Internal("secret key misconfigured".to_string());
        assert!(!internal.sanitized_message().contains("secret"));

        // Client-caused errors keep the full message
        let validation = AppError::Validation("name is required".to_string());
        assert!(validation.sanitized_message().contains("name is required"));
    }

    #[test]
    fn test_app_error_into_response() {
        let error = AppError::NotFound("user not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response_headers = response.headers();
        assert!(response_headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("application/json"));
    }

    #[test]
    fn test_error_from_impls() {
        let io_err = IoError::new(ErrorKind::PermissionDenied, "Permission denied");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));

        let json_err: serde_json::Error =
            serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));

        let string_err = "String error".to_string();
        let app_err: AppError = string_err.into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
