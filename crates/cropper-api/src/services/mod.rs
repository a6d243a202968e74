pub mod configurations;
pub mod crop;

pub use configurations::ConfigurationService;
pub use crop::CropService;
