//! OpenAPI documentation

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error;
use crate::handlers;
use cropper_core::models;

/// Registers the bearer JWT scheme referenced by the handler annotations
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Image Cropper API",
        version = "0.1.0",
        description = "Crop PNG images into previews or full-resolution outputs and manage the logo configurations applied to generated crops. All application routes live under /api and require a bearer JWT."
    ),
    paths(
        // Configurations
        handlers::configurations::create_configuration,
        handlers::configurations::update_configuration,
        handlers::configurations::get_configuration,
        handlers::configurations::list_configurations,
        handlers::configurations::delete_configuration,
        // Images
        handlers::images::preview_crops,
        handlers::images::generate_crops,
    ),
    components(
        schemas(
            models::ConfigurationResponse,
            models::CropRectangle,
            models::CropResult,
            models::LogoPosition,
            error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "config", description = "Logo configuration presets"),
        (name = "image", description = "Crop preview and generation"),
    )
)]
pub struct ApiDoc;
