//! Inkdrop Core Library
//!
//! This crate provides the configuration, error types, and response models
//! shared by the Inkdrop storage, processing, and API crates.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{BaseConfig, Config, UploadConfig};
pub use error::{AppError, ErrorMetadata, LogLevel, UPLOAD_FAILED_PREFIX};
pub use models::{UploadResponse, UPLOAD_SUCCEEDED};
pub use storage_types::CollisionPolicy;
