//! Error types module
//!
//! All failures that can reach a client are unified under `AppError`. Each
//! variant describes its own HTTP presentation through `ErrorMetadata`, so the
//! API layer can render every error as the same JSON envelope.

use std::io;

/// Prefix of the client message for storage and internal failures
pub const UPLOAD_FAILED_PREFIX: &str = "upload failed: ";

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for requests rejected by transport limits
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message, placed in the envelope's `message` field
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client input rejected before any side effect
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Whole request exceeded the transport cap
    #[error("Request too large: {0}")]
    PayloadTooLarge(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short error type name for structured logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Detail text appended to the "upload failed" prefix
    fn failure_detail(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::Storage(msg)
            | AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::PayloadTooLarge(_) => 413,
            AppError::Storage(_) | AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) | AppError::PayloadTooLarge(msg) => msg.clone(),
            _ => format!("{}{}", UPLOAD_FAILED_PREFIX, self.failure_detail()),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::PayloadTooLarge(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
