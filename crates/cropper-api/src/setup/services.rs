//! Service initialization and application state setup

use crate::state::AppState;
use cropper_core::Config;
use cropper_db::{ConfigurationRepository, ConfigurationStore};
use sqlx::PgPool;
use std::sync::Arc;

/// Build the application state on top of the Postgres-backed store
pub fn initialize_services(config: &Config, pool: PgPool) -> Arc<AppState> {
    let store: Arc<dyn ConfigurationStore> = Arc::new(ConfigurationRepository::new(pool));
    tracing::info!(
        preview_scale_down = config.preview_scale_down(),
        "Services initialized"
    );
    Arc::new(AppState::new(config.clone(), store))
}
