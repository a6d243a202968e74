//! Crop preview and generation handlers

use axum::{
    extract::{Multipart, Query, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::auth::models::AuthContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::read_crop_form;
use cropper_core::models::CropResult;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Configuration whose logo and scale are applied to every crop
    #[serde(rename = "configId")]
    pub config_id: Option<i32>,
}

/// Low-resolution previews of at least three crop rectangles
#[utoipa::path(
    post,
    path = "/api/image/preview",
    request_body(content = inline(Object), description = "Multipart form: image (PNG), cropCoordinates[i].x/.y/.width/.height", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "One result per rectangle, in request order", body = Vec<CropResult>),
        (status = 400, description = "Missing or non-PNG image, or fewer than 3 rectangles", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse)
    ),
    tag = "image",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, ctx, multipart), fields(subject = %ctx.subject))]
pub async fn preview_crops(
    State(state): State<Arc<AppState>>,
    ctx: AuthContext,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let request = read_crop_form(multipart).await?;
    let results = state.crop_service.preview(request).await?;
    Ok(Json(results))
}

/// Full-resolution crops, optionally branded with a configuration's logo
#[utoipa::path(
    post,
    path = "/api/image/generate",
    params(GenerateQuery),
    request_body(content = inline(Object), description = "Multipart form: image (PNG), cropCoordinates[i].x/.y/.width/.height", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "One result per rectangle, in request order", body = Vec<CropResult>),
        (status = 400, description = "Missing or non-PNG image, or no rectangles", body = ErrorResponse),
        (status = 404, description = "Configuration not found", body = ErrorResponse)
    ),
    tag = "image",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, ctx, multipart), fields(subject = %ctx.subject))]
pub async fn generate_crops(
    State(state): State<Arc<AppState>>,
    ctx: AuthContext,
    Query(query): Query<GenerateQuery>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let request = read_crop_form(multipart).await?;
    let results = state
        .crop_service
        .generate(request, query.config_id)
        .await?;
    Ok(Json(results))
}
