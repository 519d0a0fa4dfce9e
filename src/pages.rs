//! Page boot: which sections each page hydrates and binds.

use std::rc::Rc;
use std::str::FromStr;

use wasm_bindgen_futures::spawn_local;

use crate::config::SiteConfig;
use crate::dom::cards::{CARD_SELECTOR, bind_expandable};
use crate::dom::chrome::{MobileMenu, bind_anchor_navigation, update_copyright_year};
use crate::dom::consent::{CookieBanner, LocalStore};
use crate::dom::contact::bind_form_validation;
use crate::dom::document;
use crate::dom::fetch::BrowserTransport;
use crate::error::{Result, SiteError};
use crate::fragment::FragmentLoader;
use crate::pipeline::{hydrate_main, hydrate_updates, load_fragment_into};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Main,
    Updates,
    Contact,
    CookiePolicy,
}

impl FromStr for Page {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "index" | "home" => Ok(Page::Main),
            "updates" => Ok(Page::Updates),
            "contact" => Ok(Page::Contact),
            "cookies" | "cookie-policy" => Ok(Page::CookiePolicy),
            other => Err(SiteError::UnknownPage(other.to_string())),
        }
    }
}

fn loader() -> FragmentLoader<BrowserTransport> {
    FragmentLoader::new(BrowserTransport)
}

pub fn boot(page: Page, config: SiteConfig) -> Result<()> {
    let doc = document()?;
    let config = Rc::new(config);
    log::info!("booting {page:?} page");

    // Header and footer load as independent tasks; they write disjoint
    // containers and may finish in either order.
    spawn_local(load_header(config.clone()));
    spawn_local(load_footer(config.clone()));
    bind_anchor_navigation(&doc)?;

    match page {
        Page::Main => spawn_local(load_main(config.clone())),
        Page::Updates => spawn_local(load_updates(config.clone())),
        Page::Contact => {
            bind_form_validation(
                &doc,
                &config.containers.contact_form,
                config.countdown_seconds,
                config.notification_ms,
            )?;
            log::info!("Contact information loaded");
        }
        Page::CookiePolicy => {}
    }

    let plan = CookieBanner::init(&doc, LocalStore)?;
    log::debug!("cookie banner: {plan:?}");
    Ok(())
}

async fn load_header(config: Rc<SiteConfig>) {
    let Ok(doc) = document() else { return };
    let inserted =
        load_fragment_into(&loader(), &doc, &config.header_path, &config.containers.header).await;
    if inserted.is_some() {
        if let Err(err) = MobileMenu::attach(&doc) {
            log::warn!("mobile menu not bound: {err}");
        }
    }
}

async fn load_footer(config: Rc<SiteConfig>) {
    let Ok(doc) = document() else { return };
    let inserted =
        load_fragment_into(&loader(), &doc, &config.footer_path, &config.containers.footer).await;
    if inserted.is_some() {
        update_copyright_year(&doc);
    }
}

async fn load_main(config: Rc<SiteConfig>) {
    let Ok(doc) = document() else { return };
    hydrate_main(&loader(), &doc, &config).await;
}

async fn load_updates(config: Rc<SiteConfig>) {
    let Ok(doc) = document() else { return };
    let Some(sections) = hydrate_updates(&loader(), &doc, &config).await else {
        return;
    };
    if let Some(container) = sections.battle_updates {
        if let Err(err) = bind_expandable(&container, CARD_SELECTOR) {
            log::warn!("update cards not bound: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_parse() {
        assert_eq!("main".parse::<Page>().unwrap(), Page::Main);
        assert_eq!(" Updates ".parse::<Page>().unwrap(), Page::Updates);
        assert_eq!("cookie-policy".parse::<Page>().unwrap(), Page::CookiePolicy);
        assert!(matches!("shop".parse::<Page>(), Err(SiteError::UnknownPage(p)) if p == "shop"));
    }
}
