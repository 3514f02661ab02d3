pub mod auth;
pub mod block;
pub mod bru_file;
pub mod environment;
pub mod http_method;
pub mod keywords;
pub mod parser;

pub use auth::{Auth, AuthFields};
pub use bru_file::{BruFile, Example, ExampleRequest, ExampleResponse, KeyValue};
pub use environment::{parse_environment, parse_environment_file, EnvironmentVars};
pub use http_method::HttpMethod;
pub use parser::parse;
