use super::models::{
    AuthElement, Body, BodyOptions, Header, Item, ProtocolProfileBehavior, RawOptions, Request,
    RequestAuth, Response, BODY_MODE_RAW,
};
use super::url::decompose;
use crate::core::json::{looks_like_json, LANGUAGE_JSON};
use crate::syntax::auth::{MODE_BASIC, MODE_BEARER};
use crate::syntax::keywords::{KEY_PASSWORD, KEY_TOKEN, KEY_USERNAME};
use crate::syntax::{Auth, BruFile, Example, HttpMethod};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VetoSource {
    UrlOrBody,
    Auth,
}

/// Why an endpoint produced no item: it references a removed variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Veto {
    pub variable: String,
    pub source: VetoSource,
}

impl fmt::Display for Veto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = match self.source {
            VetoSource::UrlOrBody => "URL or Body",
            VetoSource::Auth => "Auth",
        };
        write!(
            f,
            "uses removed variable '{}' in {}",
            self.variable, location
        )
    }
}

pub fn placeholder(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

/// Maps parsed `.bru` endpoints to Postman items for one run.
pub struct RequestMapper<'a> {
    removed: &'a [String],
}

impl<'a> RequestMapper<'a> {
    pub fn new(removed: &'a [String]) -> Self {
        Self { removed }
    }

    /// `inherited` is the auth in effect for the folder holding the file.
    pub fn map(&self, bru: &BruFile, inherited: &Auth) -> Result<Item, Veto> {
        self.check_veto(bru)?;

        let effective = bru.auth.resolve(inherited);
        let method = bru.method.unwrap_or(HttpMethod::GET);
        let body = project_body(&bru.body);

        crate::debug_log!(
            "Mapping {} {} (auth: {})",
            method.as_str(),
            bru.url,
            effective.auth_type().as_str()
        );

        let request = Request {
            method: method.as_str().to_string(),
            header: self.project_headers(bru),
            body,
            url: decompose(&bru.url),
            description: Some(bru.docs.clone()).filter(|d| !d.is_empty()),
            auth: project_auth(&effective),
        };

        let disable_pruning = request.body.is_some() && method.prunes_body();
        let responses = bru.examples.iter().map(project_example).collect();

        let mut item = Item::request(&bru.display_name(), request, responses);
        if disable_pruning {
            item.protocol_profile_behavior = Some(ProtocolProfileBehavior {
                disable_body_pruning: true,
            });
        }
        Ok(item)
    }

    fn check_veto(&self, bru: &BruFile) -> Result<(), Veto> {
        for name in active_names(self.removed) {
            let token = placeholder(name);
            if bru.url.contains(&token) || bru.body.contains(&token) {
                return Err(Veto {
                    variable: name.clone(),
                    source: VetoSource::UrlOrBody,
                });
            }
            if bru.auth_fields.values().any(|v| v.contains(&token)) {
                return Err(Veto {
                    variable: name.clone(),
                    source: VetoSource::Auth,
                });
            }
        }
        Ok(())
    }

    fn project_headers(&self, bru: &BruFile) -> Vec<Header> {
        bru.headers
            .iter()
            .filter(|h| {
                !active_names(self.removed).any(|name| {
                    h.key.contains(name.as_str()) || h.value.contains(&placeholder(name))
                })
            })
            .map(|h| Header::text(&h.key, &h.value))
            .collect()
    }
}

fn active_names(removed: &[String]) -> impl Iterator<Item = &String> {
    removed.iter().filter(|name| !name.is_empty())
}

fn project_body(raw: &str) -> Option<Body> {
    if raw.is_empty() {
        return None;
    }
    let options = looks_like_json(raw).then(|| BodyOptions {
        raw: RawOptions {
            language: LANGUAGE_JSON.to_string(),
        },
    });
    Some(Body {
        mode: BODY_MODE_RAW.to_string(),
        raw: raw.to_string(),
        options,
    })
}

/// Only bearer and basic have an output shape; other modes stay unprojected.
fn project_auth(auth: &Auth) -> Option<RequestAuth> {
    match auth {
        Auth::Bearer { token } => Some(RequestAuth {
            kind: MODE_BEARER.to_string(),
            bearer: vec![AuthElement::string(KEY_TOKEN, token)],
            basic: Vec::new(),
        }),
        Auth::Basic { username, password } => Some(RequestAuth {
            kind: MODE_BASIC.to_string(),
            bearer: Vec::new(),
            basic: vec![
                AuthElement::string(KEY_USERNAME, username),
                AuthElement::string(KEY_PASSWORD, password),
            ],
        }),
        _ => None,
    }
}

fn project_example(example: &Example) -> Response {
    let original_request = Request {
        method: example.request.method.to_uppercase(),
        header: example
            .request
            .headers
            .iter()
            .map(|h| Header::text(&h.key, &h.value))
            .collect(),
        body: project_body(&example.request.body),
        url: decompose(&example.request.url),
        description: None,
        auth: None,
    };

    Response {
        name: example.name.clone(),
        original_request,
        status: example.response.status_text.clone(),
        code: example.response.status,
        preview_language: LANGUAGE_JSON.to_string(),
        header: example
            .response
            .headers
            .iter()
            .map(|h| Header::new(&h.key, &h.value))
            .collect(),
        cookie: Vec::new(),
        body: example.response.body.clone(),
    }
}
