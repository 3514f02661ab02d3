use std::fmt;
use std::io;

#[derive(Debug)]
pub enum BruError {
    Json(serde_json::Error),
    DirectoryNotFound(String),
    NotADirectory(String),
    FileRead { path: String, source: io::Error },
    FileWrite { path: String, source: io::Error },
}

impl fmt::Display for BruError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BruError::Json(err) => write!(f, "JSON error: {err}"),
            BruError::DirectoryNotFound(path) => write!(
                f,
                "Directory not found: {}",
                crate::core::paths::clean_path_str(path)
            ),
            BruError::NotADirectory(path) => write!(
                f,
                "Not a directory: {}",
                crate::core::paths::clean_path_str(path)
            ),
            BruError::FileRead { path, source } => write!(
                f,
                "Failed to read {}: {source}",
                crate::core::paths::clean_path_str(path)
            ),
            BruError::FileWrite { path, source } => write!(
                f,
                "Failed to write {}: {source}",
                crate::core::paths::clean_path_str(path)
            ),
        }
    }
}

impl std::error::Error for BruError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BruError::Json(err) => Some(err),
            BruError::FileRead { source, .. } | BruError::FileWrite { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BruError {
    fn from(err: serde_json::Error) -> Self {
        BruError::Json(err)
    }
}
