//! Test fixtures: PNG images and multipart forms.

use axum_test::multipart::{MultipartForm, Part};
use base64::{engine::general_purpose, Engine as _};
use cropper_core::models::{CropRectangle, CropResult};
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Solid-colour PNG of the given size.
pub fn create_test_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("Failed to encode PNG");
    buffer
}

pub fn png_part(data: Vec<u8>, file_name: &str) -> Part {
    Part::bytes(data).file_name(file_name).mime_type("image/png")
}

/// `image` plus indexed `cropCoordinates[i].*` fields.
pub fn crop_form(image: Part, rectangles: &[CropRectangle]) -> MultipartForm {
    let form = MultipartForm::new().add_part("image", image);
    rectangles
        .iter()
        .enumerate()
        .fold(form, |form, (index, rect)| {
            add_rectangle(form, index, rect)
        })
}

pub fn add_rectangle(form: MultipartForm, index: usize, rect: &CropRectangle) -> MultipartForm {
    form.add_text(format!("cropCoordinates[{}].x", index), rect.x)
        .add_text(format!("cropCoordinates[{}].y", index), rect.y)
        .add_text(format!("cropCoordinates[{}].width", index), rect.width)
        .add_text(format!("cropCoordinates[{}].height", index), rect.height)
}

pub fn configuration_form(scale_down: &str, logo_position: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("scaleDown", scale_down)
        .add_text("logoPosition", logo_position)
}

/// Dimensions of the PNG carried by a successful crop result.
pub fn result_dimensions(result: &CropResult) -> (u32, u32) {
    let encoded = result.image_data.as_deref().expect("Result has no image data");
    let data = general_purpose::STANDARD
        .decode(encoded)
        .expect("Invalid base64");
    image::load_from_memory(&data)
        .expect("Invalid PNG")
        .dimensions()
}
