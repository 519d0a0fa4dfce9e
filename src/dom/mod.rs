//! Browser bindings: web-sys implementations of the crate's seams and the
//! components that own live DOM nodes.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::{Result, SiteError};
use crate::hydrate::{ContainerLookup, RenderTarget};

pub mod cards;
pub mod chrome;
pub mod consent;
pub mod contact;
pub mod fetch;
pub mod launch;
pub mod notice;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoBrowser("window"))
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoBrowser("document"))
}

impl RenderTarget for Element {
    fn replace_markup(&self, markup: &str) {
        self.set_inner_html(markup);
    }

    fn markup(&self) -> String {
        self.inner_html()
    }
}

impl ContainerLookup for Document {
    type Target = Element;

    fn container(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

/// Run `f` once after `delay_ms`. Timers cannot be cancelled.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<()> {
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        timeout_arg(delay_ms),
    )?;
    Ok(())
}

/// Browsers take a signed delay; anything past `i32::MAX` is held there.
fn timeout_arg(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

/// Attach a listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn find(root: &Element, selector: &str) -> Result<Element> {
    root.query_selector(selector)?
        .ok_or_else(|| SiteError::missing(selector))
}

pub fn find_as<T: JsCast>(root: &Element, selector: &str) -> Result<T> {
    find(root, selector)?
        .dyn_into::<T>()
        .map_err(|_| SiteError::missing(format!("{selector} (unexpected element type)")))
}

pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_delays_saturate_instead_of_wrapping() {
        assert_eq!(timeout_arg(3300), 3300);
        assert_eq!(timeout_arg(i32::MAX as u32), i32::MAX);
        assert_eq!(timeout_arg(u32::MAX), i32::MAX);
    }
}
