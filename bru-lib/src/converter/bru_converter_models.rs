use serde::Deserialize;
use std::path::PathBuf;

/// Settings for one conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    pub input: PathBuf,
    /// Top-level folders to convert; empty means every folder.
    pub folders: Vec<String>,
    pub keep_folders: bool,
    /// Endpoints whose name contains one of these are left out.
    pub ignore: Vec<String>,
    /// Variables whose `{{name}}` usage excludes an endpoint.
    pub remove: Vec<String>,
    pub replace: Vec<(String, String)>,
    pub environment: Option<String>,
    pub verbose: bool,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}

/// The subset of `bruno.json` the converter reads.
#[derive(Debug, Default, Deserialize)]
pub struct BrunoMetadata {
    #[serde(default)]
    pub name: String,
}

pub(crate) struct FolderEntries {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}
