use crate::auth::jwt::JwtService;
use crate::auth::models::AuthContext;
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use cropper_core::AppError;
use std::sync::Arc;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct AuthState {
    pub jwt_service: JwtService,
}

pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    let Some(token) = auth_header.strip_prefix(BEARER_PREFIX) else {
        return HttpAppError(AppError::Unauthorized(
            "Invalid authorization header format".to_string(),
        ))
        .into_response();
    };

    match auth_state.jwt_service.validate_token(token.trim()) {
        Ok(claims) => {
            tracing::debug!(subject = %claims.sub, "Request authenticated");
            request.extensions_mut().insert(AuthContext::from(claims));
            next.run(request).await
        }
        Err(e) => HttpAppError(e).into_response(),
    }
}
