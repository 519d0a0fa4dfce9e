//! Fragment loader: best-effort fetch of HTML partials and JSON documents.
//!
//! A broken fragment must not break the rest of the page. Every failure
//! (transport error, non-success status, malformed JSON, wrong shape) is
//! logged here and turned into `FragmentResult::Absent` / `None`; callers
//! never see an error. No caching, no retry, no timeout.

use serde::de::DeserializeOwned;

use crate::error::{Result, SiteError};

/// Raw HTTP answer handed back by a `Transport`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// GET access to same-origin relative paths.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<HttpReply>;
}

/// How the caller wants the body interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expect {
    Html,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FragmentResult {
    Html(String),
    Json(serde_json::Value),
    Absent,
}

impl FragmentResult {
    pub fn is_absent(&self) -> bool {
        matches!(self, FragmentResult::Absent)
    }

    pub fn into_html(self) -> Option<String> {
        match self {
            FragmentResult::Html(text) => Some(text),
            _ => None,
        }
    }
}

pub struct FragmentLoader<T> {
    transport: T,
}

impl<T: Transport> FragmentLoader<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn load_fragment(&self, path: &str, expect: Expect) -> FragmentResult {
        match self.try_load(path, expect).await {
            Ok(result) => result,
            Err(err) => {
                log::error!("fragment '{path}' unavailable: {err}");
                FragmentResult::Absent
            }
        }
    }

    /// Load a JSON document and check it against the shape `D`.
    pub async fn load_json<D: DeserializeOwned>(&self, path: &str) -> Option<D> {
        let FragmentResult::Json(value) = self.load_fragment(path, Expect::Json).await else {
            return None;
        };
        match serde_json::from_value(value) {
            Ok(doc) => Some(doc),
            Err(source) => {
                let err = SiteError::Shape { path: path.to_string(), source };
                log::error!("{err}");
                None
            }
        }
    }

    async fn try_load(&self, path: &str, expect: Expect) -> Result<FragmentResult> {
        let reply = self.transport.get(path).await?;
        if !reply.is_success() {
            return Err(SiteError::Status { path: path.to_string(), status: reply.status });
        }
        log::debug!("loaded '{path}' ({} bytes)", reply.body.len());
        Ok(match expect {
            Expect::Html => FragmentResult::Html(reply.body),
            Expect::Json => FragmentResult::Json(serde_json::from_str(&reply.body)?),
        })
    }
}
