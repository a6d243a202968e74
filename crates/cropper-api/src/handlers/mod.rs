pub mod configurations;
pub mod images;
