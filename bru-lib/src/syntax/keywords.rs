pub const KW_META: &str = "meta";
pub const KW_HEADERS: &str = "headers";
pub const KW_VARS: &str = "vars";
pub const KW_VARS_PRE_REQUEST: &str = "vars:pre-request";
pub const KW_VARS_POST_RESPONSE: &str = "vars:post-response";
pub const KW_BODY: &str = "body";
pub const KW_DOCS: &str = "docs";
pub const KW_AUTH: &str = "auth";
pub const KW_EXAMPLE: &str = "example";

pub const KEY_NAME: &str = "name";
pub const KEY_TYPE: &str = "type";
pub const KEY_URL: &str = "url";
pub const KEY_METHOD: &str = "method";
pub const KEY_CODE: &str = "code";
pub const KEY_TEXT: &str = "text";
pub const KEY_MODE: &str = "mode";
pub const KEY_INHERIT: &str = "inherit";
pub const KEY_TOKEN: &str = "token";
pub const KEY_USERNAME: &str = "username";
pub const KEY_PASSWORD: &str = "password";

pub const BLOCK_OPEN_SUFFIX: &str = " {";
pub const BLOCK_CLOSE: &str = "}";

pub const EXAMPLE_REQUEST_OPEN: &str = "request: {";
pub const EXAMPLE_RESPONSE_OPEN: &str = "response: {";
pub const EXAMPLE_BODY_OPEN: &str = "body: {";
pub const EXAMPLE_BODY_JSON_OPEN: &str = "body:json: {";
pub const EXAMPLE_STATUS_OPEN: &str = "status: {";
pub const EXAMPLE_HEADERS_OPEN: &str = "headers: {";

pub const FENCE: &str = "'''";
pub const FENCE_CONTENT_KEY: &str = "content:";
pub const BODY_TYPE_JSON: &str = "type: json";

pub const FOLDER_DESCRIPTOR: &str = "folder.bru";
pub const COLLECTION_DESCRIPTOR: &str = "collection.bru";
pub const COLLECTION_METADATA: &str = "bruno.json";
pub const ENVIRONMENTS_DIR: &str = "environments";
pub const BRU_EXTENSION: &str = "bru";
