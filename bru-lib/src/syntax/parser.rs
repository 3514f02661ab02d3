use super::auth::Auth;
use super::block::{header_name, BlockKind, BlockStack};
use super::bru_file::{BruFile, Example, KeyValue};
use super::keywords::{
    BODY_TYPE_JSON, FENCE, FENCE_CONTENT_KEY, KEY_CODE, KEY_METHOD, KEY_NAME, KEY_TEXT, KEY_TYPE,
    KEY_URL,
};
use crate::debug_log;

/// Parses the text of one `.bru` file.
///
/// Parsing never fails: lines that don't fit the block they appear in, and
/// every line of an unrecognised block, are dropped.
pub fn parse(content: &str) -> BruFile {
    let mut parser = BruParser::default();
    for line in content.lines() {
        parser.feed(line);
    }
    parser.finish()
}

#[derive(Default)]
struct BruParser {
    bru: BruFile,
    stack: BlockStack,
    buffer: String,
}

impl BruParser {
    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        let indent = leading_whitespace(line);
        let top = self.stack.top();

        if trimmed.is_empty() && !top.map(|k| k.is_raw()).unwrap_or(false) {
            return;
        }

        let Some(kind) = top else {
            self.open_top_level(trimmed, indent);
            return;
        };

        if self.stack.closes_top(trimmed, indent) {
            self.close();
            return;
        }

        if let Some(child) = kind.child_for(trimmed) {
            self.open(child, indent);
            return;
        }

        self.consume(kind, line, trimmed);
    }

    fn open_top_level(&mut self, trimmed: &str, indent: &str) {
        let Some(name) = header_name(trimmed) else {
            return;
        };
        let (kind, method) = BlockKind::from_header(name);
        if let Some(method) = method {
            self.bru.method = Some(method);
        }
        if kind == BlockKind::Example {
            self.bru.examples.push(Example::default());
        }
        self.open(kind, indent);
    }

    fn open(&mut self, kind: BlockKind, indent: &str) {
        if matches!(kind, BlockKind::Body | BlockKind::Docs) {
            self.buffer.clear();
        }
        self.stack.push(kind, indent);
        debug_log!(
            "Opened block {kind:?} at depth {} (indent {:?})",
            self.stack.depth(),
            indent
        );
    }

    fn close(&mut self) {
        match self.stack.pop() {
            Some(BlockKind::Body) => self.bru.body = std::mem::take(&mut self.buffer),
            Some(BlockKind::Docs) => self.bru.docs = std::mem::take(&mut self.buffer),
            _ => {}
        }
    }

    fn consume(&mut self, kind: BlockKind, line: &str, trimmed: &str) {
        match kind {
            BlockKind::Body | BlockKind::Docs => {
                self.buffer.push_str(line);
                self.buffer.push('\n');
            }
            BlockKind::ExampleRequestBody => {
                if let Some(example) = self.bru.examples.last_mut() {
                    append_line(&mut example.request.body, line);
                }
            }
            BlockKind::ExampleResponseBody => {
                if is_fence_noise(line, trimmed) {
                    return;
                }
                if let Some(example) = self.bru.examples.last_mut() {
                    append_line(&mut example.response.body, line);
                }
            }
            BlockKind::Unknown | BlockKind::ExampleResponse => {}
            _ => {
                if let Some((key, value)) = split_key_value(trimmed) {
                    self.consume_pair(kind, key, value);
                }
            }
        }
    }

    fn consume_pair(&mut self, kind: BlockKind, key: &str, value: &str) {
        match kind {
            BlockKind::Meta => match key {
                KEY_NAME => self.bru.name = value.to_string(),
                KEY_TYPE => self.bru.kind = value.to_string(),
                _ => {}
            },
            BlockKind::Request => {
                if key == KEY_URL {
                    self.bru.url = value.to_string();
                }
            }
            BlockKind::Headers => self.bru.headers.push(KeyValue::new(key, value)),
            BlockKind::Vars => self.bru.vars.push(KeyValue::new(key, value)),
            BlockKind::Auth => {
                self.bru
                    .auth_fields
                    .insert(key.to_string(), value.to_string());
            }
            BlockKind::Example => {
                if key == KEY_NAME {
                    if let Some(example) = self.bru.examples.last_mut() {
                        example.name = value.to_string();
                    }
                }
            }
            BlockKind::ExampleRequest => {
                if let Some(example) = self.bru.examples.last_mut() {
                    match key {
                        KEY_URL => example.request.url = value.to_string(),
                        KEY_METHOD => example.request.method = value.to_string(),
                        _ => {}
                    }
                }
            }
            BlockKind::ExampleRequestHeaders => {
                if let Some(example) = self.bru.examples.last_mut() {
                    example.request.headers.push(KeyValue::new(key, value));
                }
            }
            BlockKind::ExampleResponseStatus => {
                if let Some(example) = self.bru.examples.last_mut() {
                    match key {
                        KEY_CODE => example.response.status = parse_status_code(value),
                        KEY_TEXT => example.response.status_text = value.to_string(),
                        _ => {}
                    }
                }
            }
            BlockKind::ExampleResponseHeaders => {
                if let Some(example) = self.bru.examples.last_mut() {
                    example.response.headers.push(KeyValue::new(key, value));
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> BruFile {
        if self.stack.depth() > 0 {
            debug_log!(
                "Reached end of input with {} unclosed block(s)",
                self.stack.depth()
            );
        }
        self.bru.auth = Auth::from_fields(&self.bru.auth_fields);
        self.bru
    }
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

fn append_line(target: &mut String, line: &str) {
    target.push_str(line);
    target.push('\n');
}

/// Splits `key: value` on the first colon, trimming both sides.
pub(crate) fn split_key_value(trimmed: &str) -> Option<(&str, &str)> {
    trimmed
        .split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Markers of the `content: '''` convention wrapping example response bodies.
fn is_fence_noise(line: &str, trimmed: &str) -> bool {
    trimmed == BODY_TYPE_JSON
        || trimmed == FENCE
        || (line.contains(FENCE_CONTENT_KEY) && line.contains(FENCE))
}

/// Leading integer of a status code value (`200`, `404 Not Found`); 0 otherwise.
fn parse_status_code(value: &str) -> i64 {
    let digits_end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..digits_end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::http_method::HttpMethod;

    const LOGIN: &str = r#"meta {
  name: Login
  type: http
  seq: 1
}

post {
  url: {{baseUrl}}/auth/login
  body: json
  auth: none
}

headers {
  Content-Type: application/json
  Accept: application/json
}

body:json {
  {
    "username": "admin",
    "password": "password"
  }
}

vars:post-response {
  token: res.body.token
}
"#;

    #[test]
    fn test_parse_request_file() {
        let bru = parse(LOGIN);

        assert_eq!(bru.name, "Login");
        assert_eq!(bru.kind, "http");
        assert_eq!(bru.method, Some(HttpMethod::POST));
        assert_eq!(bru.url, "{{baseUrl}}/auth/login");
        assert_eq!(
            bru.headers,
            vec![
                KeyValue::new("Content-Type", "application/json"),
                KeyValue::new("Accept", "application/json"),
            ]
        );
        assert_eq!(bru.vars, vec![KeyValue::new("token", "res.body.token")]);
        assert_eq!(
            bru.body,
            "  {\n    \"username\": \"admin\",\n    \"password\": \"password\"\n  }\n"
        );
        assert_eq!(bru.auth, Auth::None);
    }

    #[test]
    fn test_nested_closing_brace_does_not_end_body() {
        let bru = parse("body:json {\n  {\n    \"a\": {\n      \"b\": 1\n    }\n  }\n}\n");
        assert_eq!(
            bru.body,
            "  {\n    \"a\": {\n      \"b\": 1\n    }\n  }\n"
        );
    }

    #[test]
    fn test_body_keeps_blank_lines() {
        let bru = parse("body:text {\n  line one\n\n  line three\n}\n");
        assert_eq!(bru.body, "  line one\n\n  line three\n");
    }

    #[test]
    fn test_later_body_block_replaces_earlier() {
        let bru = parse("body:json {\n  {}\n}\nbody:text {\n  plain\n}\n");
        assert_eq!(bru.body, "  plain\n");
    }

    #[test]
    fn test_docs_verbatim_with_blank_lines() {
        let bru = parse("docs {\n  # Title\n\n  Some {braces}\n  }\n}\n");
        assert_eq!(bru.docs, "  # Title\n\n  Some {braces}\n  }\n");
    }

    #[test]
    fn test_vars_pre_and_post_are_merged_in_order() {
        let bru = parse("vars:pre-request {\n  a: 1\n}\nvars:post-response {\n  b: 2\n}\n");
        assert_eq!(
            bru.vars,
            vec![KeyValue::new("a", "1"), KeyValue::new("b", "2")]
        );
    }

    #[test]
    fn test_auth_sub_blocks_share_one_map() {
        let bru = parse("auth {\n  mode: bearer\n}\n\nauth:bearer {\n  token: {{tok}}\n}\n");
        assert_eq!(bru.auth_fields.get("mode").map(String::as_str), Some("bearer"));
        assert_eq!(bru.auth_fields.get("token").map(String::as_str), Some("{{tok}}"));
        assert_eq!(
            bru.auth,
            Auth::Bearer {
                token: "{{tok}}".to_string()
            }
        );
    }

    #[test]
    fn test_later_auth_write_wins() {
        let bru = parse("auth:basic {\n  username: a\n}\nauth:basic {\n  username: b\n}\n");
        assert_eq!(bru.auth_fields.get("username").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_unknown_blocks_are_dropped() {
        let content = "script:pre-request {\n  const url = \"x\";\n  headers {\n    X: y\n  }\n}\n\nget {\n  url: https://a.io/b\n}\n";
        let bru = parse(content);
        assert!(bru.headers.is_empty());
        assert_eq!(bru.url, "https://a.io/b");
        assert_eq!(bru.method, Some(HttpMethod::GET));
    }

    #[test]
    fn test_method_keyword_is_lowercase_only() {
        let bru = parse("GET {\n  url: https://a.io\n}\n");
        assert_eq!(bru.method, None);
        assert_eq!(bru.url, "");
    }

    #[test]
    fn test_url_with_port_keeps_everything_after_first_colon() {
        let bru = parse("get {\n  url: http://localhost:8080/health\n}\n");
        assert_eq!(bru.url, "http://localhost:8080/health");
    }

    #[test]
    fn test_crlf_line_endings() {
        let bru = parse("meta {\r\n  name: Win\r\n}\r\nget {\r\n  url: https://a.io\r\n}\r\n");
        assert_eq!(bru.name, "Win");
        assert_eq!(bru.url, "https://a.io");
    }

    #[test]
    fn test_unclosed_body_is_not_flushed() {
        let bru = parse("body:json {\n  {\"a\": 1}\n");
        assert_eq!(bru.body, "");
    }

    const EXAMPLE: &str = r#"get {
  url: {{baseUrl}}/users/1
}

example {
  name: Found
  request: {
    url: {{baseUrl}}/users/1
    method: get
    headers: {
      accept: application/json
    }
    body:json: {
      {
        "q": 1
      }
    }
  }

  response: {
    headers: {
      content-type: application/json
      x-trace: abc
    }

    status: {
      code: 200
      text: OK
    }

    body: {
      type: json
      content: '''
        {
          "id": 1,

          "name": "Ada"
        }
      '''
    }
  }
}

example {
  name: Missing
  response: {
    status: {
      code: 404 Not Found
    }
  }
}
"#;

    #[test]
    fn test_examples_are_parsed() {
        let bru = parse(EXAMPLE);
        assert_eq!(bru.examples.len(), 2);

        let found = &bru.examples[0];
        assert_eq!(found.name, "Found");
        assert_eq!(found.request.url, "{{baseUrl}}/users/1");
        assert_eq!(found.request.method, "get");
        assert_eq!(
            found.request.headers,
            vec![KeyValue::new("accept", "application/json")]
        );
        assert_eq!(found.request.body, "      {\n        \"q\": 1\n      }\n");
        assert_eq!(found.response.status, 200);
        assert_eq!(found.response.status_text, "OK");
        assert_eq!(
            found.response.headers,
            vec![
                KeyValue::new("content-type", "application/json"),
                KeyValue::new("x-trace", "abc"),
            ]
        );
        assert_eq!(
            found.response.body,
            "        {\n          \"id\": 1,\n\n          \"name\": \"Ada\"\n        }\n"
        );

        let missing = &bru.examples[1];
        assert_eq!(missing.name, "Missing");
        assert_eq!(missing.response.status, 404);
        assert_eq!(missing.response.body, "");
    }

    #[test]
    fn test_example_does_not_leak_into_request() {
        let bru = parse(EXAMPLE);
        assert_eq!(bru.url, "{{baseUrl}}/users/1");
        assert!(bru.headers.is_empty());
        assert_eq!(bru.body, "");
    }

    #[test]
    fn test_fence_noise() {
        assert!(is_fence_noise("      type: json", "type: json"));
        assert!(is_fence_noise("      '''", "'''"));
        assert!(is_fence_noise("      content: '''", "content: '''"));
        assert!(!is_fence_noise("      content: 1", "content: 1"));
        assert!(!is_fence_noise("      \"type\": \"json\"", "\"type\": \"json\""));
    }

    #[test]
    fn test_parse_status_code() {
        assert_eq!(parse_status_code("201"), 201);
        assert_eq!(parse_status_code("404 Not Found"), 404);
        assert_eq!(parse_status_code("abc"), 0);
        assert_eq!(parse_status_code(""), 0);
    }

    #[test]
    fn test_split_key_value() {
        assert_eq!(split_key_value("a: b: c"), Some(("a", "b: c")));
        assert_eq!(split_key_value("novalue"), None);
        assert_eq!(split_key_value("key:"), Some(("key", "")));
    }
}
