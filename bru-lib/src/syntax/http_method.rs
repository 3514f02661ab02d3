#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}
impl HttpMethod {
    /// Accepts the lowercase block keywords used in `.bru` files (`get {`)
    /// as well as the upper-cased form found in example requests.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(Self::GET),
            "POST" => Some(Self::POST),
            "PUT" => Some(Self::PUT),
            "DELETE" => Some(Self::DELETE),
            "PATCH" => Some(Self::PATCH),
            "HEAD" => Some(Self::HEAD),
            "OPTIONS" => Some(Self::OPTIONS),
            _ => None,
        }
    }

    /// Block keywords are lowercase only; `GET {` does not open a request block.
    pub fn from_keyword(s: &str) -> Option<Self> {
        if s.chars().all(|c| c.is_ascii_lowercase()) {
            Self::from_str(s)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GET => "GET",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::DELETE => "DELETE",
            Self::PATCH => "PATCH",
            Self::HEAD => "HEAD",
            Self::OPTIONS => "OPTIONS",
        }
    }

    /// Postman drops bodies on these methods unless told otherwise.
    pub fn prunes_body(&self) -> bool {
        matches!(self, Self::GET | Self::HEAD)
    }
}
