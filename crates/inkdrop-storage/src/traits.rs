//! Storage abstraction trait
//!
//! This module defines the Storage trait that storage backends implement.

use async_trait::async_trait;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Handlers only see this trait, so tests can swap in a different backend
/// without touching request handling.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload a file from a reader and return (storage_key, public_url)
    ///
    /// The target directory is created on demand. The reader is consumed until
    /// EOF; when `content_length` is given, a short copy is an error. Filesystem
    /// failures surface as `StorageError::IoError`.
    async fn upload_stream(
        &self,
        filename: &str,
        content_length: Option<u64>,
        reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<(String, String)>;
}
