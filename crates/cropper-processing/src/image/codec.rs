use crate::error::{ProcessingError, ProcessingResult};
use bytes::Bytes;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::Cursor;

/// Decode an image fully into memory. The format is sniffed from the bytes.
pub fn decode_png(data: &[u8]) -> ProcessingResult<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ProcessingError::Decode(e.to_string()))?;

    reader
        .decode()
        .map_err(|e| ProcessingError::Decode(e.to_string()))
}

pub fn encode_png(img: &DynamicImage) -> ProcessingResult<Bytes> {
    let (width, height) = img.dimensions();
    let mut buffer = Vec::with_capacity((width as usize) * (height as usize) * 4);
    let mut cursor = Cursor::new(&mut buffer);
    img.write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| ProcessingError::Encode(e.to_string()))?;

    Ok(Bytes::from(buffer))
}
