//! Domain route groups (configurations, images).

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn configuration_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/config", API_PREFIX),
            post(handlers::configurations::create_configuration)
                .get(handlers::configurations::list_configurations),
        )
        .route(
            &format!("{}/config/{{id}}", API_PREFIX),
            get(handlers::configurations::get_configuration)
                .put(handlers::configurations::update_configuration)
                .delete(handlers::configurations::delete_configuration),
        )
        .with_state(state)
}

pub fn image_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/image/preview", API_PREFIX),
            post(handlers::images::preview_crops),
        )
        .route(
            &format!("{}/image/generate", API_PREFIX),
            post(handlers::images::generate_crops),
        )
        .with_state(state)
}
