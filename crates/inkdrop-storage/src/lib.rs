//! Inkdrop Storage Library
//!
//! This crate provides the storage abstraction and the local filesystem
//! implementation that receives uploaded images.
//!
//! # Storage key format
//!
//! A storage key is the bare generated filename (`<millis>_<hex><ext>`). Keys
//! must not contain path separators or `..`.

pub mod factory;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use inkdrop_core::CollisionPolicy;
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
