//! Error types module
//!
//! This module provides the core error types used throughout the Pictor
//! application. All errors are unified under the `AppError` enum which can
//! represent database, storage, validation, and auth errors.

use std::io;

use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// This trait allows errors to self-describe their HTTP response characteristics
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON parsing error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
/// Reduces duplication in the ErrorMetadata impl; client_message stays per-variant
/// for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::Database(_) => (500, "DATABASE_ERROR", true, LogLevel::Error),
        AppError::Persistence(_) => (500, "PERSISTENCE_ERROR", true, LogLevel::Error),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, LogLevel::Error),
        AppError::UnsupportedFormat(_) => (422, "UNSUPPORTED_FORMAT", false, LogLevel::Debug),
        AppError::Validation(_) => (422, "VALIDATION_ERROR", false, LogLevel::Debug),
        AppError::Unauthenticated(_) => (401, "UNAUTHENTICATED", false, LogLevel::Debug),
        AppError::Unauthorized(_) => (403, "UNAUTHORIZED", false, LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", false, LogLevel::Debug),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Database(_) => "Failed to access database".to_string(),
            AppError::Persistence(_) => "Failed to persist record".to_string(),
            AppError::Storage(_) => "Failed to access storage".to_string(),
            AppError::UnsupportedFormat(ref msg) => msg.clone(),
            AppError::Validation(ref msg) => msg.clone(),
            AppError::Unauthenticated(ref msg) => msg.clone(),
            AppError::Unauthorized(ref msg) => msg.clone(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_database() {
        let err = AppError::from(sqlx::Error::PoolClosed);
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
        assert_eq!(err.client_message(), "Failed to access database");
        assert!(err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_error_metadata_not_found() {
        let err = AppError::NotFound("Not found".to_string());
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.client_message(), "Not found");
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_validation() {
        let err = AppError::Validation("file is required".to_string());
        assert_eq!(err.http_status_code(), 422);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.client_message(), "file is required");
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_auth_split() {
        let unauthenticated = AppError::Unauthenticated("Missing authorization header".to_string());
        assert_eq!(unauthenticated.http_status_code(), 401);
        assert_eq!(unauthenticated.error_code(), "UNAUTHENTICATED");

        let unauthorized = AppError::Unauthorized("Missing scope: write:media".to_string());
        assert_eq!(unauthorized.http_status_code(), 403);
        assert_eq!(unauthorized.error_code(), "UNAUTHORIZED");
    }

    #[test]
    fn test_sensitive_errors_mask_details() {
        let err = AppError::Storage("connection refused to s3.internal:9000".to_string());
        assert!(err.is_sensitive());
        assert!(!err.client_message().contains("s3.internal"));

        let err = AppError::Persistence("insert failed unexpectedly".to_string());
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "Failed to persist record");
    }
}
