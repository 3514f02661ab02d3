use super::auth::{Auth, AuthFields};
use super::http_method::HttpMethod;
use crate::core::error::BruError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

impl KeyValue {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<KeyValue>,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleResponse {
    pub status: i64,
    pub status_text: String,
    pub headers: Vec<KeyValue>,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    pub name: String,
    pub request: ExampleRequest,
    pub response: ExampleResponse,
}

/// One parsed `.bru` file. Descriptor files (`folder.bru`, `collection.bru`)
/// share the format and simply leave the request fields empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BruFile {
    pub path: PathBuf,
    pub name: String,
    pub kind: String,
    pub method: Option<HttpMethod>,
    pub url: String,
    pub headers: Vec<KeyValue>,
    pub body: String,
    pub vars: Vec<KeyValue>,
    pub docs: String,
    pub auth_fields: AuthFields,
    pub auth: Auth,
    pub examples: Vec<Example>,
}

impl BruFile {
    pub fn from_path(path: &Path) -> Result<Self, BruError> {
        let content = read_text(path)?;
        let mut bru = super::parser::parse(&content);
        bru.path = path.to_path_buf();
        Ok(bru)
    }

    pub fn method_str(&self) -> &str {
        self.method.map(|m| m.as_str()).unwrap_or_default()
    }

    /// Display name: `meta.name`, or the file stem when the file has none.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            crate::core::paths::file_stem(&self.path)
        } else {
            self.name.clone()
        }
    }
}

/// Reads a `.bru` file as text. Invalid UTF-8 sequences become U+FFFD.
pub(crate) fn read_text(path: &Path) -> Result<String, BruError> {
    let bytes = fs::read(path).map_err(|source| BruError::FileRead {
        path: crate::core::paths::clean_path(path),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_missing_file_is_error() {
        let err = BruFile::from_path(Path::new("definitely/not/here.bru")).unwrap_err();
        assert!(matches!(err, BruError::FileRead { .. }));
    }

    #[test]
    fn test_from_path_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Ping.bru");
        fs::write(&path, "get {\n  url: https://example.com/ping\n}\n").unwrap();

        let bru = BruFile::from_path(&path).unwrap();
        assert_eq!(bru.path, path);
        assert_eq!(bru.method, Some(HttpMethod::GET));
        assert_eq!(bru.display_name(), "Ping");
    }

    #[test]
    fn test_from_path_decodes_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cafe.bru");
        fs::write(
            &path,
            b"meta {\n  name: Caf\xE9\n}\n\nget {\n  url: https://example.com/menu\n}\n",
        )
        .unwrap();

        let bru = BruFile::from_path(&path).unwrap();
        assert_eq!(bru.name, "Caf\u{FFFD}");
        assert_eq!(bru.url, "https://example.com/menu");
    }

    #[test]
    fn test_display_name_prefers_meta_name() {
        let bru = BruFile {
            path: PathBuf::from("a/file-name.bru"),
            name: "Meta Name".to_string(),
            ..Default::default()
        };
        assert_eq!(bru.display_name(), "Meta Name");
    }

    #[test]
    fn test_method_str_empty_without_method() {
        assert_eq!(BruFile::default().method_str(), "");
    }
}
