pub mod multipart;

pub use multipart::{read_configuration_form, read_crop_form};
