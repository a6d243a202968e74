use thiserror::Error;

/// Failure of a single transform. The `Display` text is what a crop result reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("Crop coordinates are outside image boundaries")]
    OutOfBounds,

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Scaled image would be empty ({width}x{height})")]
    EmptyOutput { width: u32, height: u32 },

    #[error("Image is too small for a logo overlay ({width}x{height})")]
    LogoTooSmall { width: u32, height: u32 },
}

pub type ProcessingResult<T> = Result<T, ProcessingError>;
