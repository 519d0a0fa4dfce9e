//! Cookie banner and the `localStorage` consent store.

use std::rc::Rc;

use web_sys::{Document, Element, Storage};

use super::{listen, set_timeout, window};
use crate::consent::{
    BannerPlan, ConsentStore, HIDE_ANIMATION_MS, REVEAL_DELAY_MS, has_consented, plan_banner,
    record_consent,
};
use crate::error::{Result, SiteError};

const BAR_ID: &str = "cookie-consent-bar";
const ACCEPT_ID: &str = "accept-cookies";
const SHOW_CLASS: &str = "show";

/// `window.localStorage`, looked up on each access.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<Storage> {
        window()?
            .local_storage()?
            .ok_or(SiteError::NoBrowser("localStorage"))
    }
}

impl ConsentStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(Self::storage()?.set_item(key, value)?)
    }
}

pub struct CookieBanner<S> {
    bar: Element,
    store: S,
}

impl<S: ConsentStore + 'static> CookieBanner<S> {
    /// Reveal, remove or ignore the banner depending on stored consent.
    pub fn init(doc: &Document, store: S) -> Result<BannerPlan> {
        let bar = doc.get_element_by_id(BAR_ID);
        let accept = doc.get_element_by_id(ACCEPT_ID);
        let plan = plan_banner(has_consented(&store), bar.is_some(), accept.is_some());
        match (plan, bar, accept) {
            (BannerPlan::Reveal, Some(bar), Some(accept)) => {
                let banner = Rc::new(Self { bar, store });
                let shown = banner.bar.clone();
                set_timeout(REVEAL_DELAY_MS, move || {
                    if let Err(err) = shown.class_list().add_1(SHOW_CLASS) {
                        log::warn!("cookie banner reveal failed: {err:?}");
                    }
                })?;
                listen(&accept, "click", move |_evt| {
                    if let Err(err) = banner.accept() {
                        log::warn!("cookie consent not saved: {err}");
                    }
                })?;
            }
            (BannerPlan::Remove, Some(bar), _) => bar.remove(),
            _ => {}
        }
        Ok(plan)
    }

    fn accept(&self) -> Result<()> {
        self.bar.class_list().remove_1(SHOW_CLASS)?;
        let bar = self.bar.clone();
        set_timeout(HIDE_ANIMATION_MS, move || bar.remove())?;
        record_consent(&self.store)
    }
}
