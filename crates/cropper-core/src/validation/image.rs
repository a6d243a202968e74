//! Source image and crop batch rules

use crate::error::AppError;
use crate::models::{CropRectangle, UploadedFile};

pub const MIN_PREVIEW_RECTANGLES: usize = 3;
pub const MIN_GENERATE_RECTANGLES: usize = 1;

/// Case-insensitive prefix match, so `image/png; charset=binary` passes.
pub fn is_png_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("image/png")
}

/// Returns the upload back once it is known to be a non-empty PNG.
pub fn validate_source_image(file: Option<UploadedFile>) -> Result<UploadedFile, AppError> {
    let file = match file {
        Some(file) if !file.is_empty() => file,
        _ => return Err(AppError::InvalidInput("No image provided".to_string())),
    };

    match file.content_type.as_deref() {
        Some(content_type) if is_png_content_type(content_type) => Ok(file),
        _ => Err(AppError::InvalidInput(
            "Only PNG images are supported".to_string(),
        )),
    }
}

pub fn validate_preview_rectangles(rectangles: &[CropRectangle]) -> Result<(), AppError> {
    if rectangles.len() < MIN_PREVIEW_RECTANGLES {
        return Err(AppError::InvalidInput(
            "At least 3 crop coordinates are required".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_generate_rectangles(rectangles: &[CropRectangle]) -> Result<(), AppError> {
    if rectangles.len() < MIN_GENERATE_RECTANGLES {
        return Err(AppError::InvalidInput(
            "At least one crop coordinate is required".to_string(),
        ));
    }
    Ok(())
}
