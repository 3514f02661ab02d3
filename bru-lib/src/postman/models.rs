//! Serialized shape of a Postman Collection v2.1 document.

use serde::Serialize;

pub const SCHEMA_V2_1: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

pub const HEADER_TYPE_TEXT: &str = "text";
pub const AUTH_ELEMENT_TYPE: &str = "string";
pub const BODY_MODE_RAW: &str = "raw";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Collection {
    pub info: Info,
    pub item: Vec<Item>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<Variable>,
}

impl Collection {
    /// Number of request items at any depth.
    pub fn request_count(&self) -> usize {
        count_requests(&self.item)
    }
}

fn count_requests(items: &[Item]) -> usize {
    items
        .iter()
        .map(|i| if i.is_folder() { count_requests(&i.item) } else { 1 })
        .sum()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Info {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub schema: String,
}

/// A folder (non-empty `item`) or a request (`request` plus `response`).
/// Use [`Item::folder`] and [`Item::request`] rather than filling both.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Item {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub response: Vec<Response>,
    #[serde(
        rename = "protocolProfileBehavior",
        skip_serializing_if = "Option::is_none"
    )]
    pub protocol_profile_behavior: Option<ProtocolProfileBehavior>,
}

impl Item {
    pub fn folder(name: &str, children: Vec<Item>) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            variable: Vec::new(),
            item: children,
            request: None,
            response: Vec::new(),
            protocol_profile_behavior: None,
        }
    }

    pub fn request(name: &str, request: Request, response: Vec<Response>) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            variable: Vec::new(),
            item: Vec::new(),
            request: Some(request),
            response,
            protocol_profile_behavior: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.request.is_none()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProtocolProfileBehavior {
    #[serde(rename = "disableBodyPruning")]
    pub disable_body_pruning: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Request {
    pub method: String,
    pub header: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    pub url: Url,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<RequestAuth>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Header {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Header {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            description: None,
            kind: None,
        }
    }

    pub fn text(key: &str, value: &str) -> Self {
        Self {
            kind: Some(HEADER_TYPE_TEXT.to_string()),
            ..Self::new(key, value)
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Body {
    pub mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BodyOptions>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BodyOptions {
    pub raw: RawOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawOptions {
    pub language: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Url {
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub host: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RequestAuth {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bearer: Vec<AuthElement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub basic: Vec<AuthElement>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthElement {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AuthElement {
    pub fn string(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            kind: AUTH_ELEMENT_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Response {
    pub name: String,
    #[serde(rename = "originalRequest")]
    pub original_request: Request,
    pub status: String,
    pub code: i64,
    #[serde(rename = "_postman_previewlanguage")]
    pub preview_language: String,
    pub header: Vec<Header>,
    pub cookie: Vec<serde_json::Value>,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Variable {
    pub key: String,
    pub value: String,
}

impl Variable {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn url(raw: &str) -> Url {
        Url {
            raw: raw.to_string(),
            protocol: None,
            host: vec![raw.to_string()],
            path: Vec::new(),
        }
    }

    #[test]
    fn test_folder_serializes_without_request_fields() {
        let folder = Item::folder("Users", Vec::new());
        let value = serde_json::to_value(&folder).unwrap();
        assert_eq!(value, json!({ "name": "Users" }));
    }

    #[test]
    fn test_request_item_keeps_empty_header_list() {
        let request = Request {
            method: "GET".to_string(),
            header: Vec::new(),
            body: None,
            url: url("{{baseUrl}}"),
            description: None,
            auth: None,
        };
        let value = serde_json::to_value(Item::request("Ping", request, Vec::new())).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ping",
                "request": {
                    "method": "GET",
                    "header": [],
                    "url": { "raw": "{{baseUrl}}", "host": ["{{baseUrl}}"] }
                }
            })
        );
    }

    #[test]
    fn test_header_text_type() {
        let value = serde_json::to_value(Header::text("Accept", "*/*")).unwrap();
        assert_eq!(
            value,
            json!({ "key": "Accept", "value": "*/*", "type": "text" })
        );
    }

    #[test]
    fn test_response_field_names() {
        let response = Response {
            name: "OK".to_string(),
            original_request: Request {
                method: "GET".to_string(),
                header: Vec::new(),
                body: None,
                url: url("x"),
                description: None,
                auth: None,
            },
            status: "OK".to_string(),
            code: 200,
            preview_language: "json".to_string(),
            header: Vec::new(),
            cookie: Vec::new(),
            body: "{}".to_string(),
        };
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["_postman_previewlanguage"], "json");
        assert_eq!(value["originalRequest"]["method"], "GET");
        assert_eq!(value["code"], 200);
        assert_eq!(value["cookie"], json!([]));
    }

    #[test]
    fn test_request_count_walks_folders() {
        let leaf = || {
            let request = Request {
                method: "GET".to_string(),
                header: Vec::new(),
                body: None,
                url: url("x"),
                description: None,
                auth: None,
            };
            Item::request("r", request, Vec::new())
        };
        let nested = Item::folder("inner", vec![leaf(), leaf()]);
        let collection = Collection {
            info: Info {
                name: "c".to_string(),
                description: None,
                schema: SCHEMA_V2_1.to_string(),
            },
            item: vec![Item::folder("outer", vec![nested, leaf()]), leaf()],
            variable: Vec::new(),
        };
        assert_eq!(collection.request_count(), 4);
    }

    #[test]
    fn test_collection_omits_empty_variables() {
        let collection = Collection {
            info: Info {
                name: "c".to_string(),
                description: None,
                schema: SCHEMA_V2_1.to_string(),
            },
            item: Vec::new(),
            variable: Vec::new(),
        };
        let value = serde_json::to_value(collection).unwrap();
        assert!(value.get("variable").is_none());
        assert_eq!(value["info"]["schema"], SCHEMA_V2_1);
    }
}
