//! Image transforms
//!
//! - `codec`: PNG decode/encode
//! - `crop`: rectangle crop and downscaled preview
//! - `logo`: logo overlay with corner/center anchoring

pub mod codec;
pub mod crop;
pub mod logo;

pub use codec::{decode_png, encode_png};
pub use crop::{
    crop, crop_preview, resolve_dimensions, scaled_dimensions, ImageCropper,
    DEFAULT_PREVIEW_SCALE_DOWN,
};
pub use logo::{logo_anchor, logo_dimensions, LogoOverlay, DEFAULT_LOGO_SCALE_DOWN};
