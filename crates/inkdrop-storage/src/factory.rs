use crate::{LocalStorage, Storage};
use inkdrop_core::Config;
use std::sync::Arc;

/// Create the storage backend described by the configuration
pub fn create_storage(config: &Config) -> Arc<dyn Storage> {
    Arc::new(LocalStorage::new(
        config.upload_path(),
        config.public_base_path(),
        config.collision_policy(),
    ))
}
