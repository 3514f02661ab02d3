pub mod exit_code;
pub mod version;
