//! Startup configuration checks

use anyhow::Result;
use cropper_core::Config;

const HIGH_POOL_SIZE: u32 = 100;

/// Fail fast on misconfiguration and warn about settings that are legal but suspicious.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if !config.is_production() && config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
    }

    if config.db_max_connections() > HIGH_POOL_SIZE {
        tracing::warn!(
            db_max_connections = config.db_max_connections(),
            "DB_MAX_CONNECTIONS is very high - ensure the database accepts this many connections"
        );
    }

    if config.jwt_issuer().is_none() {
        tracing::debug!("JWT_ISSUER not set - token issuer is not checked");
    }

    Ok(())
}
