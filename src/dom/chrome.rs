//! Header and footer behavior: burger menu, anchor links, copyright year.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::{listen, query_all, window};
use crate::error::Result;
use crate::interact::nav::{AnchorAction, burger_line_transform, resolve_anchor};

const BURGER_ID: &str = "burgerMenu";
const MOBILE_MENU_ID: &str = "mobileMenu";
const BURGER_LINE_SELECTOR: &str = ".burger-line";
const NAV_LINK_CLASS: &str = "nav-link";
const YEAR_ID: &str = "currentYear";
const ACTIVE_CLASS: &str = "active";

pub struct MobileMenu {
    button: Element,
    menu: Element,
    lines: Vec<HtmlElement>,
}

impl MobileMenu {
    /// `None` when the header has no burger menu.
    pub fn attach(doc: &Document) -> Result<Option<Rc<Self>>> {
        let (Some(button), Some(menu)) = (
            doc.get_element_by_id(BURGER_ID),
            doc.get_element_by_id(MOBILE_MENU_ID),
        ) else {
            return Ok(None);
        };
        let lines = query_all(&button, BURGER_LINE_SELECTOR)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        let menu = Rc::new(Self { button, menu, lines });
        let handle = menu.clone();
        listen(&menu.button, "click", move |_evt| {
            if let Err(err) = handle.toggle() {
                log::warn!("menu toggle failed: {err}");
            }
        })?;
        Ok(Some(menu))
    }

    pub fn toggle(&self) -> Result<bool> {
        let active = self.menu.class_list().toggle(ACTIVE_CLASS)?;
        for (index, line) in self.lines.iter().enumerate() {
            line.style()
                .set_property("transform", &burger_line_transform(index, active))?;
        }
        Ok(active)
    }
}

/// Intercept `#anchor` nav links for the whole page. Bound once per load.
pub fn bind_anchor_navigation(doc: &Document) -> Result<()> {
    let page = doc.clone();
    listen(doc, "click", move |evt| {
        let Some(link) = evt.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if !link.class_list().contains(NAV_LINK_CLASS) {
            return;
        }
        if let Err(err) = follow_anchor(&page, &link, &evt) {
            log::warn!("anchor navigation failed: {err}");
        }
    })
}

fn follow_anchor(doc: &Document, link: &Element, evt: &web_sys::Event) -> Result<()> {
    let location = window()?.location();
    let pathname = location.pathname()?;
    let Some(action) = resolve_anchor(link.get_attribute("href").as_deref(), &pathname) else {
        return Ok(());
    };
    evt.prevent_default();
    match action {
        AnchorAction::Redirect(url) => location.set_href(&url)?,
        AnchorAction::ScrollTo(selector) => {
            if let Some(target) = doc.query_selector(&selector)? {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }
    }
    Ok(())
}

pub fn update_copyright_year(doc: &Document) {
    if let Some(el) = doc.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
