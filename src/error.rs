//! Crate-wide error type.
//!
//! Content loading follows a degrade-silently policy: these errors are logged
//! by the loader and page boot, never shown to the visitor.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("network request for '{path}' failed: {reason}")]
    Transport { path: String, reason: String },

    #[error("'{path}' answered with HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'{path}' does not match the expected shape: {source}")]
    Shape {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("unknown page '{0}'")]
    UnknownPage(String),

    #[error("no browser {0} available")]
    NoBrowser(&'static str),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl SiteError {
    pub fn missing(what: impl Into<String>) -> Self {
        SiteError::MissingElement(what.into())
    }
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let text = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        SiteError::Js(text)
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
