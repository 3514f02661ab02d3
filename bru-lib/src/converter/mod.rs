pub mod bru_converter;
pub mod bru_converter_models;

pub use bru_converter::{collection_name, BruConverter};
pub use bru_converter_models::ConvertConfig;
