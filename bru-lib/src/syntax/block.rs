use super::http_method::HttpMethod;
use super::keywords::{
    BLOCK_CLOSE, BLOCK_OPEN_SUFFIX, EXAMPLE_BODY_JSON_OPEN, EXAMPLE_BODY_OPEN,
    EXAMPLE_HEADERS_OPEN, EXAMPLE_REQUEST_OPEN, EXAMPLE_RESPONSE_OPEN, EXAMPLE_STATUS_OPEN,
    KW_AUTH, KW_BODY, KW_DOCS, KW_EXAMPLE, KW_HEADERS, KW_META, KW_VARS_POST_RESPONSE,
    KW_VARS_PRE_REQUEST,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Meta,
    Request,
    Headers,
    Vars,
    Body,
    Docs,
    Auth,
    Example,
    ExampleRequest,
    ExampleRequestHeaders,
    ExampleRequestBody,
    ExampleResponse,
    ExampleResponseStatus,
    ExampleResponseHeaders,
    ExampleResponseBody,
    /// Anything else opened at the top level (`script:pre-request`, `tests`, ...).
    Unknown,
}

impl BlockKind {
    /// Raw blocks keep their lines verbatim, blank lines included.
    pub fn is_raw(&self) -> bool {
        matches!(
            self,
            BlockKind::Body
                | BlockKind::Docs
                | BlockKind::ExampleRequestBody
                | BlockKind::ExampleResponseBody
        )
    }

    /// Resolves a top-level `name {` header. The method is set when the header
    /// is an HTTP method keyword, which opens the implicit request block.
    pub fn from_header(name: &str) -> (BlockKind, Option<HttpMethod>) {
        let kind = match name {
            KW_META => BlockKind::Meta,
            KW_HEADERS => BlockKind::Headers,
            KW_VARS_PRE_REQUEST | KW_VARS_POST_RESPONSE => BlockKind::Vars,
            KW_DOCS => BlockKind::Docs,
            KW_EXAMPLE => BlockKind::Example,
            _ if name.starts_with(KW_BODY) => BlockKind::Body,
            _ if name.starts_with(KW_AUTH) => BlockKind::Auth,
            _ => match HttpMethod::from_keyword(name) {
                Some(method) => return (BlockKind::Request, Some(method)),
                None => BlockKind::Unknown,
            },
        };
        (kind, None)
    }

    /// The nested block a line opens while `self` is on top of the stack, if any.
    pub fn child_for(&self, trimmed: &str) -> Option<BlockKind> {
        match self {
            BlockKind::Example => {
                if trimmed.ends_with(EXAMPLE_REQUEST_OPEN) {
                    Some(BlockKind::ExampleRequest)
                } else if trimmed.ends_with(EXAMPLE_RESPONSE_OPEN) {
                    Some(BlockKind::ExampleResponse)
                } else {
                    None
                }
            }
            BlockKind::ExampleRequest => {
                if trimmed.ends_with(EXAMPLE_BODY_OPEN) || trimmed.ends_with(EXAMPLE_BODY_JSON_OPEN)
                {
                    Some(BlockKind::ExampleRequestBody)
                } else if trimmed.ends_with(EXAMPLE_HEADERS_OPEN) {
                    Some(BlockKind::ExampleRequestHeaders)
                } else {
                    None
                }
            }
            BlockKind::ExampleResponse => {
                if trimmed.ends_with(EXAMPLE_BODY_OPEN) {
                    Some(BlockKind::ExampleResponseBody)
                } else if trimmed.ends_with(EXAMPLE_STATUS_OPEN) {
                    Some(BlockKind::ExampleResponseStatus)
                } else if trimmed.ends_with(EXAMPLE_HEADERS_OPEN) {
                    Some(BlockKind::ExampleResponseHeaders)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenBlock {
    pub kind: BlockKind,
    pub indent: String,
}

/// Stack of open blocks. A `}` only closes the top block, and only when its
/// indentation equals the indentation of the line that opened that block.
#[derive(Debug, Default)]
pub struct BlockStack {
    blocks: Vec<OpenBlock>,
}

impl BlockStack {
    pub fn top(&self) -> Option<BlockKind> {
        self.blocks.last().map(|b| b.kind)
    }

    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    pub fn push(&mut self, kind: BlockKind, indent: &str) {
        self.blocks.push(OpenBlock {
            kind,
            indent: indent.to_string(),
        });
    }

    pub fn closes_top(&self, trimmed: &str, indent: &str) -> bool {
        trimmed == BLOCK_CLOSE
            && self
                .blocks
                .last()
                .map(|b| b.indent == indent)
                .unwrap_or(false)
    }

    pub fn pop(&mut self) -> Option<BlockKind> {
        self.blocks.pop().map(|b| b.kind)
    }
}

/// Block name of a top-level opening line (`meta {` → `meta`).
pub fn header_name(trimmed: &str) -> Option<&str> {
    trimmed.strip_suffix(BLOCK_OPEN_SUFFIX)
}
