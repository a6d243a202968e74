//! Data models for the application
//!
//! `configuration` holds the persisted presets, `crop` the per-request crop rectangles
//! and results.

mod configuration;
mod crop;

pub use configuration::*;
pub use crop::*;
