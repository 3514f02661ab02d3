use super::block::header_name;
use super::bru_file::read_text;
use super::keywords::{BLOCK_CLOSE, KW_VARS};
use super::parser::split_key_value;
use crate::core::error::BruError;
use std::collections::BTreeMap;
use std::path::Path;

pub type EnvironmentVars = BTreeMap<String, String>;

/// Reads `environments/<name>.bru` style files: only the `vars { ... }` block
/// is read; `vars:secret [...]` and anything else is ignored.
pub fn parse_environment_file(path: &Path) -> Result<EnvironmentVars, BruError> {
    let content = read_text(path)?;
    Ok(parse_environment(&content))
}

pub fn parse_environment(content: &str) -> EnvironmentVars {
    let mut vars = EnvironmentVars::new();
    let mut open_indent: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start().len()];

        match &open_indent {
            None => {
                if header_name(trimmed) == Some(KW_VARS) {
                    open_indent = Some(indent.to_string());
                }
            }
            Some(block_indent) => {
                if trimmed == BLOCK_CLOSE && block_indent == indent {
                    open_indent = None;
                } else if let Some((key, value)) = split_key_value(trimmed) {
                    vars.insert(key.to_string(), value.to_string());
                }
            }
        }
    }

    vars
}

/// Path of a named environment inside a collection root.
pub fn environment_path(root: &Path, name: &str) -> std::path::PathBuf {
    root.join(super::keywords::ENVIRONMENTS_DIR)
        .join(format!("{name}.{}", super::keywords::BRU_EXTENSION))
}
