//! Crop rectangles and per-rectangle results

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

use super::configuration::UploadedFile;

/// Content type of every generated crop
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Pixel-space rectangle, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CropRectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CropRectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Display for CropRectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "(x={}, y={}, width={}, height={})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// A source image plus the rectangles to cut from it, as read from a multipart form
#[derive(Debug, Clone, Default)]
pub struct CropRequest {
    pub image: Option<UploadedFile>,
    /// In request order
    pub rectangles: Vec<CropRectangle>,
}

/// Outcome for one requested rectangle: image data or an error, never both
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropResult {
    pub coordinates: CropRectangle,
    /// Base64-encoded PNG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub has_logo_overlay: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CropResult {
    pub fn success(coordinates: CropRectangle, png: &[u8], has_logo_overlay: bool) -> Self {
        Self {
            coordinates,
            image_data: Some(general_purpose::STANDARD.encode(png)),
            content_type: Some(PNG_CONTENT_TYPE.to_string()),
            has_logo_overlay,
            error: None,
        }
    }

    pub fn failure(coordinates: CropRectangle, error: impl Into<String>) -> Self {
        Self {
            coordinates,
            image_data: None,
            content_type: None,
            has_logo_overlay: false,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
