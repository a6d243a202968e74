//! Logo overlay
//!
//! The logo is resized to a tenth of the base width (aspect preserved), anchored with a
//! fixed margin, and composited at full opacity. The composite is then scaled down by the
//! configuration's factor when that factor is below 1.

use crate::error::{ProcessingError, ProcessingResult};
use crate::image::codec::encode_png;
use crate::image::crop::{resolve_dimensions, ImageCropper};
use bytes::Bytes;
use cropper_core::models::LogoPosition;
use image::{imageops, imageops::FilterType, DynamicImage, GenericImageView};

/// Final scale applied when the caller has none
pub const DEFAULT_LOGO_SCALE_DOWN: f32 = 1.0;

const LOGO_WIDTH_RATIO: f64 = 0.1;
const LOGO_MARGIN: i64 = 10;

/// Target logo size for a base image `base_width` pixels wide.
pub fn logo_dimensions(base_width: u32, logo_width: u32, logo_height: u32) -> (u32, u32) {
    let width = (base_width as f64 * LOGO_WIDTH_RATIO) as u32;
    if logo_width == 0 {
        return (width, 0);
    }
    let height = (logo_height as u64 * width as u64 / logo_width as u64) as u32;
    (width, height)
}

/// Top-left point of the logo on the base image. May be negative on tiny bases;
/// the overlay clips.
pub fn logo_anchor(
    position: LogoPosition,
    base_width: u32,
    base_height: u32,
    logo_width: u32,
    logo_height: u32,
) -> (i64, i64) {
    let (bw, bh) = (base_width as i64, base_height as i64);
    let (lw, lh) = (logo_width as i64, logo_height as i64);

    match position {
        LogoPosition::TopLeft => (LOGO_MARGIN, LOGO_MARGIN),
        LogoPosition::TopRight => (bw - lw - LOGO_MARGIN, LOGO_MARGIN),
        LogoPosition::BottomLeft => (LOGO_MARGIN, bh - lh - LOGO_MARGIN),
        LogoPosition::BottomRight => (bw - lw - LOGO_MARGIN, bh - lh - LOGO_MARGIN),
        LogoPosition::Center => ((bw - lw) / 2, (bh - lh) / 2),
    }
}

pub struct LogoOverlay;

impl LogoOverlay {
    /// Composite `logo` onto `base`, then apply the final scale.
    ///
    /// A logo whose width rounds to zero cannot be drawn and fails the overlay; a zero
    /// height alone is derived from the logo's aspect ratio.
    pub fn apply(
        base: &DynamicImage,
        logo: &DynamicImage,
        position: LogoPosition,
        scale_down: f32,
    ) -> ProcessingResult<DynamicImage> {
        let (base_width, base_height) = base.dimensions();
        let (logo_width, logo_height) = logo.dimensions();
        let (target_width, target_height) = logo_dimensions(base_width, logo_width, logo_height);
        let (target_width, target_height) =
            resolve_dimensions(logo_width, logo_height, target_width, target_height).ok_or(
                ProcessingError::LogoTooSmall {
                    width: base_width,
                    height: base_height,
                },
            )?;

        let resized = logo
            .resize_exact(target_width, target_height, FilterType::Triangle)
            .to_rgba8();
        let (x, y) = logo_anchor(
            position,
            base_width,
            base_height,
            target_width,
            target_height,
        );
        tracing::debug!(
            logo_width = target_width,
            logo_height = target_height,
            x,
            y,
            position = %position,
            "Placing logo"
        );
        let mut composite = base.to_rgba8();
        imageops::overlay(&mut composite, &resized, x, y);

        let composite = DynamicImage::ImageRgba8(composite);
        if scale_down < 1.0 {
            ImageCropper::scale(&composite, scale_down)
        } else {
            Ok(composite)
        }
    }

    /// Overlay and encode as PNG.
    pub fn apply_png(
        base: &DynamicImage,
        logo: &DynamicImage,
        position: LogoPosition,
        scale_down: f32,
    ) -> ProcessingResult<Bytes> {
        let composite = Self::apply(base, logo, position, scale_down)?;
        encode_png(&composite)
    }
}
