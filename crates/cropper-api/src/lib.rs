//! Image cropper HTTP API
//!
//! The library exposes the router builder and application state so integration tests can
//! drive the real routes against an in-memory configuration store.

pub mod api_doc;
pub mod auth;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod utils;

pub use error::{ErrorResponse, HttpAppError};
pub use setup::routes::setup_routes;
pub use state::AppState;
