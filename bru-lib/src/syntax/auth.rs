use crate::syntax::keywords::{KEY_INHERIT, KEY_MODE, KEY_PASSWORD, KEY_TOKEN, KEY_USERNAME};
use std::collections::BTreeMap;

/// Flat auth map merged from every `auth` / `auth:*` block of one file.
pub type AuthFields = BTreeMap<String, String>;

pub const MODE_BEARER: &str = "bearer";
pub const MODE_BASIC: &str = "basic";
pub const MODE_AWSV4: &str = "awsv4";
pub const MODE_INHERIT: &str = "inherit";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthType {
    #[default]
    None,
    Inherit,
    Bearer,
    Basic,
    AwsV4,
    Custom,
}

impl AuthType {
    pub fn as_str(&self) -> &str {
        match self {
            AuthType::None => "none",
            AuthType::Inherit => MODE_INHERIT,
            AuthType::Bearer => MODE_BEARER,
            AuthType::Basic => MODE_BASIC,
            AuthType::AwsV4 => MODE_AWSV4,
            AuthType::Custom => "custom",
        }
    }
}

/// Authentication declared by a `.bru` file, decided once when the file is parsed.
///
/// `None` means the file declared nothing; `Inherit` means it explicitly defers to
/// the enclosing folder. Both resolve to the inherited context. `AwsV4` and `Custom`
/// are carried through inheritance like any other mode but have no projection in the
/// output document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Auth {
    #[default]
    None,
    Inherit,
    Bearer {
        token: String,
    },
    Basic {
        username: String,
        password: String,
    },
    AwsV4 {
        fields: AuthFields,
    },
    Custom {
        mode: Option<String>,
        fields: AuthFields,
    },
}

impl Auth {
    /// Precedence: empty map, then the inherit marker, then an explicit `mode`,
    /// then a mode inferred from `token` (bearer) or `username` (basic).
    pub fn from_fields(fields: &AuthFields) -> Self {
        if fields.is_empty() {
            return Auth::None;
        }
        if is_inherit_marker(fields) {
            return Auth::Inherit;
        }

        let mode = fields
            .get(KEY_MODE)
            .filter(|m| !m.is_empty())
            .cloned()
            .or_else(|| infer_mode(fields).map(str::to_string));

        let field = |key: &str| fields.get(key).cloned().unwrap_or_default();

        match mode.as_deref() {
            Some(MODE_BEARER) => Auth::Bearer {
                token: field(KEY_TOKEN),
            },
            Some(MODE_BASIC) => Auth::Basic {
                username: field(KEY_USERNAME),
                password: field(KEY_PASSWORD),
            },
            Some(MODE_AWSV4) => Auth::AwsV4 {
                fields: fields.clone(),
            },
            _ => Auth::Custom {
                mode,
                fields: fields.clone(),
            },
        }
    }

    /// The auth in effect for something declaring `self` inside a context that
    /// currently applies `inherited`. Never mutates the inherited value.
    pub fn resolve(&self, inherited: &Auth) -> Auth {
        match self {
            Auth::None | Auth::Inherit => inherited.clone(),
            own => own.clone(),
        }
    }

    pub fn auth_type(&self) -> AuthType {
        match self {
            Auth::None => AuthType::None,
            Auth::Inherit => AuthType::Inherit,
            Auth::Bearer { .. } => AuthType::Bearer,
            Auth::Basic { .. } => AuthType::Basic,
            Auth::AwsV4 { .. } => AuthType::AwsV4,
            Auth::Custom { .. } => AuthType::Custom,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Auth::None)
    }
}

fn is_inherit_marker(fields: &AuthFields) -> bool {
    let inherit_flag = fields
        .get(KEY_INHERIT)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    inherit_flag || fields.get(KEY_MODE).map(String::as_str) == Some(MODE_INHERIT)
}

fn infer_mode(fields: &AuthFields) -> Option<&'static str> {
    if fields.contains_key(KEY_TOKEN) {
        Some(MODE_BEARER)
    } else if fields.contains_key(KEY_USERNAME) {
        Some(MODE_BASIC)
    } else {
        None
    }
}
