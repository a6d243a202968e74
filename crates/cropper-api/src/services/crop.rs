//! Crop orchestration
//!
//! Validates a crop request, resolves the optional configuration and runs every rectangle
//! through the image transforms on a blocking thread. A failing rectangle never fails the
//! batch: it is logged and reported as an error entry in its own position.

use bytes::Bytes;
use cropper_core::models::{Configuration, CropRectangle, CropRequest, CropResult, LogoPosition};
use cropper_core::validation::{
    validate_generate_rectangles, validate_preview_rectangles, validate_source_image,
};
use cropper_core::AppError;
use cropper_db::ConfigurationStore;
use cropper_processing::{
    crop, crop_preview, decode_png, DynamicImage, ImageCropper, LogoOverlay, ProcessingResult,
};
use std::sync::Arc;

/// Logo material resolved from a configuration for one generate request
struct LogoSpec {
    data: Vec<u8>,
    position: LogoPosition,
    scale_down: f32,
}

impl LogoSpec {
    fn from_configuration(configuration: Configuration) -> Option<Self> {
        let position = configuration.position();
        configuration.logo_image_data.map(|data| LogoSpec {
            data,
            position,
            scale_down: configuration.scale_down,
        })
    }
}

#[derive(Clone)]
pub struct CropService {
    configurations: Arc<dyn ConfigurationStore>,
    preview_scale_down: f32,
}

impl CropService {
    pub fn new(configurations: Arc<dyn ConfigurationStore>, preview_scale_down: f32) -> Self {
        Self {
            configurations,
            preview_scale_down,
        }
    }

    /// Low-resolution crops for every rectangle. Needs at least three rectangles.
    #[tracing::instrument(skip(self, request), fields(rectangles = request.rectangles.len()))]
    pub async fn preview(&self, request: CropRequest) -> Result<Vec<CropResult>, AppError> {
        let image = validate_source_image(request.image)?;
        let rectangles = request.rectangles;
        validate_preview_rectangles(&rectangles)?;

        let scale_down = self.preview_scale_down;
        tokio::task::spawn_blocking(move || {
            let source = decode_png(&image.data);
            run_batch(&rectangles, &source, false, |img, rect| {
                crop_preview(img, rect, scale_down)
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))
    }

    /// Full-resolution crops. When `config_id` names a configuration that carries a logo,
    /// each crop gets the logo overlay and the configuration's final scale.
    #[tracing::instrument(skip(self, request), fields(rectangles = request.rectangles.len()))]
    pub async fn generate(
        &self,
        request: CropRequest,
        config_id: Option<i32>,
    ) -> Result<Vec<CropResult>, AppError> {
        let image = validate_source_image(request.image)?;
        let rectangles = request.rectangles;
        validate_generate_rectangles(&rectangles)?;

        let logo = match config_id {
            Some(id) => {
                let configuration = self.configurations.get(id).await?.ok_or_else(|| {
                    AppError::NotFound(format!("Configuration with ID {} not found", id))
                })?;
                LogoSpec::from_configuration(configuration)
            }
            None => None,
        };

        tokio::task::spawn_blocking(move || {
            let source = decode_png(&image.data);
            match logo {
                Some(spec) => {
                    let logo_image = decode_png(&spec.data);
                    run_batch(&rectangles, &source, true, |img, rect| {
                        let cropped = ImageCropper::crop_image(img, rect)?;
                        let logo_image = logo_image.as_ref().map_err(Clone::clone)?;
                        LogoOverlay::apply_png(&cropped, logo_image, spec.position, spec.scale_down)
                    })
                }
                None => run_batch(&rectangles, &source, false, crop),
            }
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))
    }
}

/// Apply `transform` to every rectangle in order. A source that failed to decode is
/// reported on every item.
fn run_batch<F>(
    rectangles: &[CropRectangle],
    source: &ProcessingResult<DynamicImage>,
    has_logo_overlay: bool,
    transform: F,
) -> Vec<CropResult>
where
    F: Fn(&DynamicImage, &CropRectangle) -> ProcessingResult<Bytes>,
{
    rectangles
        .iter()
        .map(|rect| {
            let outcome = match source {
                Ok(img) => transform(img, rect),
                Err(e) => Err(e.clone()),
            };

            match outcome {
                Ok(png) => CropResult::success(*rect, &png, has_logo_overlay),
                Err(e) => {
                    tracing::error!(coordinates = %rect, error = %e, "Error processing crop coordinates");
                    CropResult::failure(*rect, e.to_string())
                }
            }
        })
        .collect()
}
