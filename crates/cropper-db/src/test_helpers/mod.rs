//! Test utilities for code that depends on a `ConfigurationStore`

pub mod memory;

pub use memory::InMemoryConfigurationStore;
