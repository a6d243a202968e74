//! Rectangle crop and downscaled preview

use crate::error::{ProcessingError, ProcessingResult};
use crate::image::codec::encode_png;
use bytes::Bytes;
use cropper_core::models::CropRectangle;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Scale used for previews when none is configured
pub const DEFAULT_PREVIEW_SCALE_DOWN: f32 = 0.05;

/// Dimensions of `width x height` scaled by `scale`, truncated toward zero.
pub fn scaled_dimensions(width: u32, height: u32, scale: f32) -> (u32, u32) {
    (
        (width as f32 * scale) as u32,
        (height as f32 * scale) as u32,
    )
}

/// Resize target with a zero side filled in from the source aspect ratio.
///
/// The derived side is rounded to nearest (ties to even) and never below 1. `None` when
/// both sides are zero or the source is empty.
pub fn resolve_dimensions(
    source_width: u32,
    source_height: u32,
    width: u32,
    height: u32,
) -> Option<(u32, u32)> {
    if source_width == 0 || source_height == 0 {
        return None;
    }
    match (width, height) {
        (0, 0) => None,
        (0, h) => Some((aspect_side(source_width, h, source_height), h)),
        (w, 0) => Some((w, aspect_side(source_height, w, source_width))),
        (w, h) => Some((w, h)),
    }
}

fn aspect_side(source_side: u32, known: u32, known_source: u32) -> u32 {
    let side = (source_side as u64 * known as u64) as f32 / known_source as f32;
    side.round_ties_even().max(1.0) as u32
}

pub struct ImageCropper;

impl ImageCropper {
    /// Clamp the rectangle's size to the image and return the pixel region `(x, y, w, h)`.
    ///
    /// Width and height overrunning the right/bottom edge are shortened, not rejected. A
    /// negative origin, or an origin at or past the edge, leaves nothing to crop and fails.
    pub fn clamp(
        rect: &CropRectangle,
        image_width: u32,
        image_height: u32,
    ) -> ProcessingResult<(u32, u32, u32, u32)> {
        if rect.x < 0 || rect.y < 0 {
            return Err(ProcessingError::OutOfBounds);
        }

        let (x, y) = (rect.x as i64, rect.y as i64);
        let (img_w, img_h) = (image_width as i64, image_height as i64);
        let width = (rect.width as i64).min(img_w - x);
        let height = (rect.height as i64).min(img_h - y);

        if width <= 0 || height <= 0 || x + width > img_w || y + height > img_h {
            return Err(ProcessingError::OutOfBounds);
        }

        Ok((x as u32, y as u32, width as u32, height as u32))
    }

    /// Crop without encoding
    pub fn crop_image(img: &DynamicImage, rect: &CropRectangle) -> ProcessingResult<DynamicImage> {
        let (width, height) = img.dimensions();
        let (x, y, w, h) = Self::clamp(rect, width, height)?;
        Ok(img.crop_imm(x, y, w, h))
    }

    /// Resize by a uniform factor. A side that truncates to zero is derived from the
    /// aspect ratio; fails only when both do.
    pub fn scale(img: &DynamicImage, scale: f32) -> ProcessingResult<DynamicImage> {
        let (width, height) = img.dimensions();
        let (target_w, target_h) = scaled_dimensions(width, height, scale);
        let (target_w, target_h) = resolve_dimensions(width, height, target_w, target_h)
            .ok_or(ProcessingError::EmptyOutput {
                width: target_w,
                height: target_h,
            })?;
        Ok(img.resize_exact(target_w, target_h, FilterType::Triangle))
    }
}

/// Crop `img` to `rect` and encode the result as PNG.
pub fn crop(img: &DynamicImage, rect: &CropRectangle) -> ProcessingResult<Bytes> {
    let cropped = ImageCropper::crop_image(img, rect)?;
    encode_png(&cropped)
}

/// Crop, then shrink both sides by `scale_down`.
pub fn crop_preview(
    img: &DynamicImage,
    rect: &CropRectangle,
    scale_down: f32,
) -> ProcessingResult<Bytes> {
    let cropped = ImageCropper::crop_image(img, rect)?;
    let preview = ImageCropper::scale(&cropped, scale_down)?;
    encode_png(&preview)
}
