//! Storage abstraction for configuration presets
//!
//! Handlers and services hold an `Arc<dyn ConfigurationStore>`, so the Postgres repository
//! can be replaced by the in-memory store in tests.

use async_trait::async_trait;
use cropper_core::{
    models::{Configuration, ConfigurationInput},
    AppError,
};

use crate::db::ConfigurationRepository;

#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// Persist a new configuration, assigning its id and timestamps
    async fn create(&self, input: ConfigurationInput) -> Result<Configuration, AppError>;

    /// Returns `None` when no configuration has this id
    async fn update(
        &self,
        id: i32,
        input: ConfigurationInput,
    ) -> Result<Option<Configuration>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<Configuration>, AppError>;

    /// All configurations, ordered by id
    async fn list(&self) -> Result<Vec<Configuration>, AppError>;

    /// Returns whether a configuration existed
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

#[async_trait]
impl ConfigurationStore for ConfigurationRepository {
    async fn create(&self, input: ConfigurationInput) -> Result<Configuration, AppError> {
        ConfigurationRepository::create(self, input).await
    }

    async fn update(
        &self,
        id: i32,
        input: ConfigurationInput,
    ) -> Result<Option<Configuration>, AppError> {
        ConfigurationRepository::update(self, id, input).await
    }

    async fn get(&self, id: i32) -> Result<Option<Configuration>, AppError> {
        ConfigurationRepository::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<Configuration>, AppError> {
        ConfigurationRepository::list(self).await
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        ConfigurationRepository::delete(self, id).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        ConfigurationRepository::health_check(self).await
    }
}
