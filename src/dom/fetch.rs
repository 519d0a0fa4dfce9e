use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::window;
use crate::error::{Result, SiteError};
use crate::fragment::{HttpReply, Transport};

/// `window.fetch` against the page's own origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn get(&self, path: &str) -> Result<HttpReply> {
        let transport_err = |value: wasm_bindgen::JsValue| SiteError::Transport {
            path: path.to_string(),
            reason: SiteError::from(value).to_string(),
        };
        let answer = JsFuture::from(window()?.fetch_with_str(path))
            .await
            .map_err(transport_err)?;
        let response: Response = answer.dyn_into().map_err(transport_err)?;
        let status = response.status();
        if !response.ok() {
            // Body is never read for failed requests.
            return Ok(HttpReply { status, body: String::new() });
        }
        let text = JsFuture::from(response.text()?).await.map_err(transport_err)?;
        Ok(HttpReply {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
