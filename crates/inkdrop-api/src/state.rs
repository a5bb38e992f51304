use inkdrop_core::Config;
use inkdrop_processing::ImageValidator;
use inkdrop_storage::Storage;
use std::sync::Arc;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub validator: ImageValidator,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        let validator = ImageValidator::from_config(&config);
        Self {
            config,
            storage,
            validator,
        }
    }
}
