//! Database repositories for data access layer

pub mod configuration;

pub use configuration::ConfigurationRepository;
