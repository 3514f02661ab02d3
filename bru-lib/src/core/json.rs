pub const LANGUAGE_JSON: &str = "json";

/// Request bodies are tagged as JSON when they open like a JSON document.
/// Only the opening character is inspected; the body is never parsed.
pub fn looks_like_json(content: &str) -> bool {
    let trimmed = content.trim();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}
