//! Configuration preset handlers
//!
//! Create and update take a multipart form (`scaleDown`, `logoPosition`, optional
//! `logoImage`) so a logo can be uploaded alongside the settings.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::auth::models::AuthContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::read_configuration_form;
use cropper_core::models::ConfigurationResponse;

/// Create a configuration
#[utoipa::path(
    post,
    path = "/api/config",
    request_body(content = inline(Object), description = "Multipart form: scaleDown, logoPosition, logoImage (optional PNG)", content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Configuration created", body = ConfigurationResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse)
    ),
    tag = "config",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, ctx, multipart), fields(subject = %ctx.subject))]
pub async fn create_configuration(
    State(state): State<Arc<AppState>>,
    ctx: AuthContext,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = read_configuration_form(multipart).await?;
    let configuration = state.configuration_service.create(form).await?;
    Ok((StatusCode::CREATED, Json(configuration)))
}

/// Replace a configuration's settings; the stored logo is kept unless a new one is sent
#[utoipa::path(
    put,
    path = "/api/config/{id}",
    params(
        ("id" = i32, Path, description = "Configuration ID")
    ),
    request_body(content = inline(Object), description = "Multipart form: scaleDown, logoPosition, logoImage (optional PNG)", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Configuration updated", body = ConfigurationResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Configuration not found", body = ErrorResponse)
    ),
    tag = "config",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, ctx, multipart), fields(subject = %ctx.subject))]
pub async fn update_configuration(
    State(state): State<Arc<AppState>>,
    ctx: AuthContext,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = read_configuration_form(multipart).await?;
    let configuration = state.configuration_service.update(id, form).await?;
    Ok(Json(configuration))
}

/// Get a configuration by ID
#[utoipa::path(
    get,
    path = "/api/config/{id}",
    params(
        ("id" = i32, Path, description = "Configuration ID")
    ),
    responses(
        (status = 200, description = "Configuration", body = ConfigurationResponse),
        (status = 404, description = "Configuration not found", body = ErrorResponse)
    ),
    tag = "config",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, ctx), fields(subject = %ctx.subject))]
pub async fn get_configuration(
    State(state): State<Arc<AppState>>,
    ctx: AuthContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpAppError> {
    let configuration = state.configuration_service.get(id).await?;
    Ok(Json(configuration))
}

/// List all configurations
#[utoipa::path(
    get,
    path = "/api/config",
    responses(
        (status = 200, description = "All configurations ordered by ID", body = Vec<ConfigurationResponse>)
    ),
    tag = "config",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, ctx), fields(subject = %ctx.subject))]
pub async fn list_configurations(
    State(state): State<Arc<AppState>>,
    ctx: AuthContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let configurations = state.configuration_service.list().await?;
    Ok(Json(configurations))
}

/// Delete a configuration
#[utoipa::path(
    delete,
    path = "/api/config/{id}",
    params(
        ("id" = i32, Path, description = "Configuration ID")
    ),
    responses(
        (status = 204, description = "Configuration deleted"),
        (status = 404, description = "Configuration not found", body = ErrorResponse)
    ),
    tag = "config",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, ctx), fields(subject = %ctx.subject))]
pub async fn delete_configuration(
    State(state): State<Arc<AppState>>,
    ctx: AuthContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpAppError> {
    state.configuration_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
