#![allow(dead_code)]
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;

pub fn bru2postman_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bru2postman"))
}

pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => {
            for (k, v) in exp_map {
                if let Some(act_v) = act_map.get(k) {
                    if !json_subset(v, act_v) {
                        return false;
                    }
                } else {
                    return false;
                }
            }
            true
        }
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            if exp_arr.len() != act_arr.len() {
                return false;
            }
            exp_arr
                .iter()
                .zip(act_arr.iter())
                .all(|(e, a)| json_subset(e, a))
        }
        (Value::String(s), _) if s == "{{*}}" => true,
        (Value::String(s), Value::String(a)) if s.starts_with("{{regex:") && s.ends_with("}}") => {
            let pattern = &s[8..s.len() - 2];
            if let Ok(re) = regex::Regex::new(pattern) {
                re.is_match(a)
            } else {
                false
            }
        }
        _ => expected == actual,
    }
}

/// Checks the document written to `actual_path` against the subset in `expected_path`.
pub fn validate_output_file(actual_path: &Path, expected_path: &Path) -> Result<(), String> {
    let expected_content = fs::read_to_string(expected_path)
        .map_err(|e| format!("Failed to read expected file: {e}"))?;
    let expected_json: Value = serde_json::from_str(&expected_content)
        .map_err(|e| format!("Failed to parse expected JSON: {e}"))?;

    let actual_content = fs::read_to_string(actual_path)
        .map_err(|e| format!("Failed to read output file {}: {e}", actual_path.display()))?;
    let actual_json: Value = serde_json::from_str(&actual_content)
        .map_err(|e| format!("Failed to parse output JSON: {e}"))?;

    if !json_subset(&expected_json, &actual_json) {
        return Err(format!(
            "JSON mismatch!\nExpected subset:\n{}\nActual:\n{}",
            serde_json::to_string_pretty(&expected_json).unwrap(),
            serde_json::to_string_pretty(&actual_json).unwrap()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_subset_wildcards() {
        let actual = json!({ "a": "x", "b": [1, 2], "c": "Exported on 2024" });
        assert!(json_subset(&json!({ "a": "{{*}}" }), &actual));
        assert!(json_subset(&json!({ "c": "{{regex:^Exported}}" }), &actual));
        assert!(!json_subset(&json!({ "b": [1] }), &actual));
        assert!(!json_subset(&json!({ "missing": 1 }), &actual));
    }
}
