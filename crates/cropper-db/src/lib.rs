//! Cropper Database Layer
//!
//! Persistence for configuration presets. `ConfigurationRepository` talks to Postgres;
//! callers depend on the `ConfigurationStore` trait so tests can swap in memory storage.

pub mod db;
pub mod store;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use db::ConfigurationRepository;
pub use store::ConfigurationStore;
