//! Stickman Slash site client.
//!
//! Compiled to WASM and loaded by every page of the static site. Each page
//! calls its `start_*` export once the DOM is ready; the crate then fetches
//! the shared header/footer fragments and the page's JSON content, renders
//! the content cards and binds the page's interactions.
//!
//! Content loading degrades silently: a missing fragment or document is
//! logged to the console and the affected section is left as it was.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod consent;
pub mod content;
pub mod dom;
pub mod error;
pub mod fragment;
pub mod hydrate;
pub mod interact;
pub mod notify;
pub mod pages;
pub mod pipeline;
pub mod templates;

pub use config::SiteConfig;
pub use error::SiteError;
pub use fragment::{FragmentLoader, FragmentResult, Transport};
pub use hydrate::{ContainerLookup, RenderTarget, render, render_all};
pub use pages::Page;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (hot reload) keeps the first logger.
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);
}

// -----------------------------------------------------------------------------
// Page entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_main_page() -> Result<(), JsValue> {
    Ok(pages::boot(Page::Main, SiteConfig::default())?)
}

#[wasm_bindgen]
pub fn start_updates_page() -> Result<(), JsValue> {
    Ok(pages::boot(Page::Updates, SiteConfig::default())?)
}

#[wasm_bindgen]
pub fn start_contact_page() -> Result<(), JsValue> {
    Ok(pages::boot(Page::Contact, SiteConfig::default())?)
}

#[wasm_bindgen]
pub fn start_cookie_policy_page() -> Result<(), JsValue> {
    Ok(pages::boot(Page::CookiePolicy, SiteConfig::default())?)
}

/// Boot a page by name with an optional JSON configuration override.
#[wasm_bindgen]
pub fn start_page(page: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let page: Page = page.parse()?;
    let config = match config_json.as_deref() {
        Some(text) => SiteConfig::from_json(text)?,
        None => SiteConfig::default(),
    };
    Ok(pages::boot(page, config)?)
}

// -----------------------------------------------------------------------------
// Inline handlers
// -----------------------------------------------------------------------------

/// `onclick` handler of the "Play Now" button.
#[wasm_bindgen]
pub fn launch_game(event: web_sys::Event) -> Result<(), JsValue> {
    Ok(dom::launch::launch_from_event(&event)?)
}

#[wasm_bindgen]
pub fn notify(title: &str, message: &str, duration_ms: Option<u32>) -> Result<(), JsValue> {
    let notice = notify::Notice::new(title, message)
        .with_duration(duration_ms.unwrap_or(notify::DEFAULT_DURATION_MS));
    dom::notice::show(&notice)?;
    Ok(())
}
