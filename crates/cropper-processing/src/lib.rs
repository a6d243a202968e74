//! Cropper Image Processing Library
//!
//! Pure transforms over PNG byte buffers: crop, preview and logo overlay.

pub mod error;
pub mod image;

pub use error::{ProcessingError, ProcessingResult};
pub use self::image::{
    crop, crop_preview, decode_png, encode_png, logo_anchor, logo_dimensions, resolve_dimensions,
    scaled_dimensions,
    ImageCropper, LogoOverlay, DEFAULT_LOGO_SCALE_DOWN, DEFAULT_PREVIEW_SCALE_DOWN,
};

pub use ::image::DynamicImage;
