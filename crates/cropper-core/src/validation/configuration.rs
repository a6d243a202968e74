//! Configuration preset rules

use crate::error::AppError;
use crate::models::{ConfigurationForm, ConfigurationInput, LogoImage, LogoPosition, UploadedFile};
use crate::validation::image::is_png_content_type;

/// Largest accepted final output scale
pub const MAX_SCALE_DOWN: f32 = 0.25;

/// Scale must lie in `(0, 0.25]`.
pub fn validate_scale_down(scale_down: f32) -> Result<(), AppError> {
    if !(scale_down > 0.0 && scale_down <= MAX_SCALE_DOWN) {
        return Err(AppError::InvalidInput(
            "ScaleDown must be between 0.01 and 0.25".to_string(),
        ));
    }
    Ok(())
}

/// Only the four corners may be saved; `center` is rejected here.
pub fn validate_logo_position(position: &str) -> Result<LogoPosition, AppError> {
    position
        .parse::<LogoPosition>()
        .ok()
        .filter(LogoPosition::is_configurable)
        .ok_or_else(|| {
            AppError::InvalidInput(
                "LogoPosition must be one of: top-left, top-right, bottom-left, bottom-right"
                    .to_string(),
            )
        })
}

/// An empty upload counts as no logo at all.
pub fn validate_logo_image(file: Option<UploadedFile>) -> Result<Option<LogoImage>, AppError> {
    let Some(file) = file.filter(|f| !f.is_empty()) else {
        return Ok(None);
    };

    match file.content_type {
        Some(ref content_type) if is_png_content_type(content_type) => Ok(Some(LogoImage {
            content_type: content_type.clone(),
            data: file.data,
        })),
        _ => Err(AppError::InvalidInput(
            "Logo image must be a PNG file".to_string(),
        )),
    }
}

/// Validate a create/update form into values the store can write.
pub fn validate_configuration(form: ConfigurationForm) -> Result<ConfigurationInput, AppError> {
    validate_scale_down(form.scale_down)?;
    let logo_position = validate_logo_position(&form.logo_position)?;
    let logo = validate_logo_image(form.logo_image)?;

    Ok(ConfigurationInput {
        scale_down: form.scale_down,
        logo_position,
        logo,
    })
}
