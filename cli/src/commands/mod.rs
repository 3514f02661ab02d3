pub mod convert;
pub mod validators;
