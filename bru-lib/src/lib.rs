//! Converts a Bruno collection directory (`.bru` files) into a Postman v2.1
//! collection document.

pub mod converter;
pub mod core;
pub mod postman;
pub mod syntax;

pub use converter::{BruConverter, ConvertConfig};
pub use crate::core::error::BruError;
pub use postman::{to_json, Collection};
