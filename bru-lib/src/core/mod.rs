pub mod error;
pub mod json;
pub mod logger;
pub mod paths;
