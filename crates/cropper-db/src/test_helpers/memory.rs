//! In-memory configuration store for testing without a database

use async_trait::async_trait;
use chrono::Utc;
use cropper_core::{
    models::{Configuration, ConfigurationInput},
    AppError,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::store::ConfigurationStore;

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, Configuration>,
}

/// `ConfigurationStore` backed by a map. Ids start at 1 and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryConfigurationStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryConfigurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|inner| inner.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("configuration store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ConfigurationStore for InMemoryConfigurationStore {
    async fn create(&self, input: ConfigurationInput) -> Result<Configuration, AppError> {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let now = Utc::now();
        let (logo_image_data, logo_image_content_type) = match input.logo {
            Some(logo) => (Some(logo.data), logo.content_type),
            None => (None, String::new()),
        };

        let configuration = Configuration {
            id: inner.next_id,
            scale_down: input.scale_down,
            logo_position: input.logo_position.as_str().to_string(),
            logo_image_data,
            logo_image_content_type,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(configuration.id, configuration.clone());
        Ok(configuration)
    }

    async fn update(
        &self,
        id: i32,
        input: ConfigurationInput,
    ) -> Result<Option<Configuration>, AppError> {
        let mut inner = self.lock()?;
        let Some(existing) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };

        existing.scale_down = input.scale_down;
        existing.logo_position = input.logo_position.as_str().to_string();
        if let Some(logo) = input.logo {
            existing.logo_image_data = Some(logo.data);
            existing.logo_image_content_type = logo.content_type;
        }
        existing.updated_at = Utc::now();

        Ok(Some(existing.clone()))
    }

    async fn get(&self, id: i32) -> Result<Option<Configuration>, AppError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Configuration>, AppError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
