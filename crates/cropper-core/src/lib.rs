//! Cropper Core Library
//!
//! Domain models, error types, configuration and validation rules shared by the
//! cropper crates.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{BaseConfig, Config};
pub use error::{AppError, ErrorMetadata, LogLevel};
