//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`. Every error is rendered as the
//! same JSON envelope the success path uses, with `success: false` and the
//! client message of the underlying `AppError`.

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use inkdrop_core::{AppError, ErrorMetadata, LogLevel, UploadResponse};
use inkdrop_processing::ValidationError;
use inkdrop_storage::StorageError;

use crate::response::JsonEnvelope;

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from inkdrop-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        HttpAppError(AppError::InvalidInput(err.to_string()))
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let message = match err {
            StorageError::UploadFailed(msg) => msg,
            StorageError::AlreadyExists(key) => format!("file {} already exists", key),
            StorageError::InvalidKey(key) => format!("invalid storage key {}", key),
            StorageError::IoError(e) => e.to_string(),
        };
        HttpAppError(AppError::Storage(message))
    }
}

/// The body is not a multipart form at all (wrong content type, missing boundary).
impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "invalid multipart request: {}",
            rejection.body_text()
        )))
    }
}

/// Map a failure raised while reading the multipart stream.
///
/// `max_request_bytes` is only used to phrase the 413 message.
pub fn multipart_error(err: MultipartError, max_request_bytes: u64) -> AppError {
    let status = err.status();
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!(
            "request too large, max {}MB",
            max_request_bytes / crate::constants::BYTES_PER_MB
        ))
    } else if status.is_server_error() {
        AppError::Internal(err.body_text())
    } else {
        AppError::InvalidInput(format!("invalid multipart request: {}", err.body_text()))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Upload rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Upload rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, "Upload failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let error = self.0;
        log_error(&error);

        let status = StatusCode::from_u16(error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        JsonEnvelope::new(status, UploadResponse::failure(error.client_message())).into_response()
    }
}
