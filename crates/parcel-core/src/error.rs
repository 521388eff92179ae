//! Error types module
//!
//! All failures of the URL-issuing function are unified under [`AppError`]. There are
//! exactly two tiers visible to callers: validation failures (400, stable message) and
//! internal failures (500, fixed generic message). The underlying cause of an internal
//! failure is only ever logged.

use crate::constants::{REQUIRED_FIELDS_MESSAGE, SIGNING_FAILED_MESSAGE};

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "SIGNING_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{}", REQUIRED_FIELDS_MESSAGE)]
    MissingFields,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

impl AppError {
    /// Get the error type name for logs
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingFields => "MissingFields",
            AppError::MalformedBody(_) => "MalformedBody",
            AppError::Configuration(_) => "Configuration",
            AppError::Signing(_) => "Signing",
        }
    }

    /// True for failures caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::MissingFields)
    }

    /// Full message for logs, including the cause a client never sees
    pub fn detailed_message(&self) -> String {
        self.to_string()
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        if self.is_validation() {
            400
        } else {
            500
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingFields => "MISSING_FIELDS",
            AppError::MalformedBody(_) => "MALFORMED_BODY",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Signing(_) => "SIGNING_ERROR",
        }
    }

    fn client_message(&self) -> String {
        if self.is_validation() {
            REQUIRED_FIELDS_MESSAGE.to_string()
        } else {
            SIGNING_FAILED_MESSAGE.to_string()
        }
    }

    fn log_level(&self) -> LogLevel {
        if self.is_validation() {
            LogLevel::Debug
        } else {
            LogLevel::Error
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedBody(err.to_string())
    }
}
