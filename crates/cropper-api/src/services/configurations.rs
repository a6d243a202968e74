//! Configuration preset management on top of a `ConfigurationStore`

use cropper_core::models::{ConfigurationForm, ConfigurationResponse};
use cropper_core::validation::validate_configuration;
use cropper_core::AppError;
use cropper_db::ConfigurationStore;
use std::sync::Arc;

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Configuration with ID {} not found", id))
}

#[derive(Clone)]
pub struct ConfigurationService {
    store: Arc<dyn ConfigurationStore>,
}

impl ConfigurationService {
    pub fn new(store: Arc<dyn ConfigurationStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self, form))]
    pub async fn create(&self, form: ConfigurationForm) -> Result<ConfigurationResponse, AppError> {
        let input = validate_configuration(form)?;
        let configuration = self.store.create(input).await?;

        tracing::info!(configuration_id = configuration.id, "Configuration created with ID");
        Ok(configuration.into())
    }

    /// Existence is checked before the form is validated, so an unknown id is a 404 even
    /// when the form is also invalid.
    #[tracing::instrument(skip(self, form))]
    pub async fn update(
        &self,
        id: i32,
        form: ConfigurationForm,
    ) -> Result<ConfigurationResponse, AppError> {
        if self.store.get(id).await?.is_none() {
            return Err(not_found(id));
        }

        let input = validate_configuration(form)?;
        let configuration = self
            .store
            .update(id, input)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(configuration_id = configuration.id, "Configuration updated with ID");
        Ok(configuration.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<ConfigurationResponse, AppError> {
        self.store
            .get(id)
            .await?
            .map(ConfigurationResponse::from)
            .ok_or_else(|| not_found(id))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ConfigurationResponse>, AppError> {
        let configurations = self.store.list().await?;
        Ok(configurations
            .into_iter()
            .map(ConfigurationResponse::from)
            .collect())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(configuration_id = id, "Configuration deleted with ID");
        Ok(())
    }
}
