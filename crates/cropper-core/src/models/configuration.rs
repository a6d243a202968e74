//! Configuration presets: scale factor, logo position and optional logo image

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;

/// Where a logo is anchored on a generated crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl LogoPosition {
    /// Positions a configuration may be saved with
    pub const CONFIGURABLE: [LogoPosition; 4] = [
        LogoPosition::TopLeft,
        LogoPosition::TopRight,
        LogoPosition::BottomLeft,
        LogoPosition::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogoPosition::TopLeft => "top-left",
            LogoPosition::TopRight => "top-right",
            LogoPosition::BottomLeft => "bottom-left",
            LogoPosition::BottomRight => "bottom-right",
            LogoPosition::Center => "center",
        }
    }

    /// Parse a stored position, falling back to top-left for anything unrecognized.
    pub fn parse_or_default(value: &str) -> LogoPosition {
        value.parse().unwrap_or(LogoPosition::TopLeft)
    }

    pub fn is_configurable(&self) -> bool {
        Self::CONFIGURABLE.contains(self)
    }
}

impl FromStr for LogoPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top-left" => Ok(LogoPosition::TopLeft),
            "top-right" => Ok(LogoPosition::TopRight),
            "bottom-left" => Ok(LogoPosition::BottomLeft),
            "bottom-right" => Ok(LogoPosition::BottomRight),
            "center" => Ok(LogoPosition::Center),
            other => Err(format!("Unknown logo position: {}", other)),
        }
    }
}

impl Display for LogoPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Persisted configuration preset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Configuration {
    pub id: i32,
    pub scale_down: f32,
    /// Lower-cased position string
    pub logo_position: String,
    pub logo_image_data: Option<Vec<u8>>,
    pub logo_image_content_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Configuration {
    pub fn has_logo_image(&self) -> bool {
        self.logo_image_data.is_some()
    }

    pub fn position(&self) -> LogoPosition {
        LogoPosition::parse_or_default(&self.logo_position)
    }
}

/// Configuration as returned by the API; logo bytes are never serialized
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    /// Configuration identifier
    pub id: i32,
    /// Final output scale applied after the logo overlay
    pub scale_down: f32,
    /// One of top-left, top-right, bottom-left, bottom-right
    pub logo_position: String,
    /// Whether a logo image is stored with this configuration
    pub has_logo_image: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Configuration> for ConfigurationResponse {
    fn from(config: Configuration) -> Self {
        ConfigurationResponse {
            id: config.id,
            scale_down: config.scale_down,
            has_logo_image: config.has_logo_image(),
            logo_position: config.logo_position,
            created_at: config.created_at,
            updated_at: config.updated_at,
        }
    }
}

/// An uploaded file as received from a multipart form
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

impl UploadedFile {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Raw create/update form, before validation
#[derive(Debug, Clone, Default)]
pub struct ConfigurationForm {
    pub scale_down: f32,
    pub logo_position: String,
    pub logo_image: Option<UploadedFile>,
}

/// Logo bytes accepted for storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// Validated values written by the configuration store
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationInput {
    pub scale_down: f32,
    pub logo_position: LogoPosition,
    /// `None` leaves the stored logo untouched on update
    pub logo: Option<LogoImage>,
}
