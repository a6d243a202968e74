//! Validation modules
//!
//! Business rules applied before anything is cropped or persisted. Every rejection is an
//! `AppError::InvalidInput`.

pub mod configuration;
pub mod image;

pub use configuration::{
    validate_configuration, validate_logo_image, validate_logo_position, validate_scale_down,
    MAX_SCALE_DOWN,
};
pub use image::{
    is_png_content_type, validate_generate_rectangles, validate_preview_rectangles,
    validate_source_image, MIN_GENERATE_RECTANGLES, MIN_PREVIEW_RECTANGLES,
};
