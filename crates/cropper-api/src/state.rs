//! Shared application state handed to every handler

use crate::services::{ConfigurationService, CropService};
use cropper_core::Config;
use cropper_db::ConfigurationStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Backing store, also used by the health check
    pub configurations: Arc<dyn ConfigurationStore>,
    pub configuration_service: ConfigurationService,
    pub crop_service: CropService,
}

impl AppState {
    pub fn new(config: Config, configurations: Arc<dyn ConfigurationStore>) -> Self {
        let configuration_service = ConfigurationService::new(configurations.clone());
        let crop_service = CropService::new(configurations.clone(), config.preview_scale_down());

        Self {
            config,
            configurations,
            configuration_service,
            crop_service,
        }
    }
}
