use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref VARIABLE_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_.-]*$").unwrap();
}

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    if Path::new(path).exists() {
        Ok(path.to_string())
    } else {
        Err(format!("Path does not exist: {path}"))
    }
}

pub fn validate_variable_name(name: &str) -> Result<String, String> {
    if name.len() > 100 {
        return Err("Variable name must be 100 characters or less".to_string());
    }
    if !VARIABLE_NAME_REGEX.is_match(name) {
        return Err("Variable name must match pattern: ^[a-zA-Z_][a-zA-Z0-9_.-]*$".to_string());
    }
    Ok(name.to_string())
}

pub fn validate_replacement(replacement: &str) -> Result<String, String> {
    let Some((name, _)) = replacement.split_once('=') else {
        return Err("Replacement must be in format KEY=VALUE".to_string());
    };

    if let Err(e) = validate_variable_name(name) {
        return Err(format!("Invalid replacement key: {e}"));
    }

    Ok(replacement.to_string())
}

/// Folder and environment names are single path components.
pub fn validate_entry_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name must not be empty".to_string());
    }
    if trimmed == "." || trimmed == ".." || trimmed.contains(['/', '\\']) {
        return Err(format!("Name must be a single directory entry: {trimmed}"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_variable_name() {
        assert!(validate_variable_name("apiKey").is_ok());
        assert!(validate_variable_name("api_key").is_ok());
        assert!(validate_variable_name("api-key.v2").is_ok());
        assert!(validate_variable_name("_private").is_ok());

        assert!(validate_variable_name("").is_err());
        assert!(validate_variable_name("1key").is_err());
        assert!(validate_variable_name("{{apiKey}}").is_err());
        assert!(validate_variable_name("api key").is_err());
        assert!(validate_variable_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_replacement() {
        assert!(validate_replacement("baseUrl=https://api.example.com").is_ok());
        assert!(validate_replacement("token=").is_ok());
        assert!(validate_replacement("query=a=b").is_ok());

        assert!(validate_replacement("baseUrl").is_err());
        assert!(validate_replacement("=value").is_err());
        assert!(validate_replacement("bad key=value").is_err());
    }

    #[test]
    fn test_validate_entry_name() {
        assert_eq!(validate_entry_name(" Users ").unwrap(), "Users");
        assert!(validate_entry_name("Core API").is_ok());

        assert!(validate_entry_name("").is_err());
        assert!(validate_entry_name("..").is_err());
        assert!(validate_entry_name("a/b").is_err());
    }

    #[test]
    fn test_validate_path_exists() {
        assert!(validate_path_exists(".").is_ok());
        assert!(validate_path_exists("definitely/not/a/real/path").is_err());
    }
}
