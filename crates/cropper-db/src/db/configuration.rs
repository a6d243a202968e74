//! Repository for configuration presets

use cropper_core::{
    models::{Configuration, ConfigurationInput},
    AppError,
};
use sqlx::{PgPool, Postgres};

const CONFIGURATION_COLUMNS: &str = "id, scale_down, logo_position, logo_image_data, \
     logo_image_content_type, created_at, updated_at";

/// Repository for managing configuration presets
#[derive(Clone)]
pub struct ConfigurationRepository {
    pool: PgPool,
}

impl ConfigurationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a configuration; id and timestamps are assigned by the database.
    #[tracing::instrument(skip(self, input), fields(db.table = "configurations", db.operation = "insert"))]
    pub async fn create(&self, input: ConfigurationInput) -> Result<Configuration, AppError> {
        let (logo_data, logo_content_type) = match input.logo {
            Some(logo) => (Some(logo.data), logo.content_type),
            None => (None, String::new()),
        };

        let configuration = sqlx::query_as::<Postgres, Configuration>(&format!(
            r#"
            INSERT INTO configurations (scale_down, logo_position, logo_image_data, logo_image_content_type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING {CONFIGURATION_COLUMNS}
            "#
        ))
        .bind(input.scale_down)
        .bind(input.logo_position.as_str())
        .bind(logo_data)
        .bind(logo_content_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(configuration)
    }

    /// Replace scalar fields, and the logo only when a new one is given.
    /// Returns `None` if the id does not exist.
    #[tracing::instrument(skip(self, input), fields(db.table = "configurations", db.operation = "update", db.record_id = id))]
    pub async fn update(
        &self,
        id: i32,
        input: ConfigurationInput,
    ) -> Result<Option<Configuration>, AppError> {
        let (replace_logo, logo_data, logo_content_type) = match input.logo {
            Some(logo) => (true, Some(logo.data), logo.content_type),
            None => (false, None, String::new()),
        };

        let configuration = sqlx::query_as::<Postgres, Configuration>(&format!(
            r#"
            UPDATE configurations
            SET scale_down = $1,
                logo_position = $2,
                logo_image_data = CASE WHEN $3 THEN $4 ELSE logo_image_data END,
                logo_image_content_type = CASE WHEN $3 THEN $5 ELSE logo_image_content_type END,
                updated_at = NOW()
            WHERE id = $6
            RETURNING {CONFIGURATION_COLUMNS}
            "#
        ))
        .bind(input.scale_down)
        .bind(input.logo_position.as_str())
        .bind(replace_logo)
        .bind(logo_data)
        .bind(logo_content_type)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(configuration)
    }

    #[tracing::instrument(skip(self), fields(db.table = "configurations", db.operation = "select", db.record_id = id))]
    pub async fn get(&self, id: i32) -> Result<Option<Configuration>, AppError> {
        let configuration = sqlx::query_as::<Postgres, Configuration>(&format!(
            "SELECT {CONFIGURATION_COLUMNS} FROM configurations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(configuration)
    }

    #[tracing::instrument(skip(self), fields(db.table = "configurations", db.operation = "select"))]
    pub async fn list(&self) -> Result<Vec<Configuration>, AppError> {
        let configurations = sqlx::query_as::<Postgres, Configuration>(&format!(
            "SELECT {CONFIGURATION_COLUMNS} FROM configurations ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(configurations)
    }

    /// Returns whether a row was deleted.
    #[tracing::instrument(skip(self), fields(db.table = "configurations", db.operation = "delete", db.record_id = id))]
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM configurations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
