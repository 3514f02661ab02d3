use super::models::Url;

const SCHEME_SEPARATOR: &str = "://";

/// Splits a raw request URL into protocol, host and path segments.
///
/// No URL validation happens here: `{{baseUrl}}/users` yields host `{{baseUrl}}`
/// and path `["users"]`. The raw string is preserved untouched.
pub fn decompose(raw: &str) -> Url {
    let (protocol, rest) = match raw.split_once(SCHEME_SEPARATOR) {
        Some((scheme, rest)) => (Some(scheme.to_string()).filter(|s| !s.is_empty()), rest),
        None => (None, raw),
    };

    let mut segments = rest.split('/').map(str::to_string);
    let host = segments.next().into_iter().collect();
    let path = segments.collect();

    Url {
        raw: raw.to_string(),
        protocol,
        host,
        path,
    }
}
