pub mod mapper;
pub mod models;
pub mod url;

pub use mapper::{RequestMapper, Veto, VetoSource};
pub use models::Collection;

use crate::core::error::BruError;

/// Renders a collection with 2-space indentation.
pub fn to_json(collection: &Collection) -> Result<String, BruError> {
    Ok(serde_json::to_string_pretty(collection)?)
}
