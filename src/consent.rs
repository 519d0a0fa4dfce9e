//! Cookie consent flag and banner decisions.
//!
//! The flag is a single string in client storage under `CONSENT_KEY`.
//! It is written once on accept and never expires.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

pub const CONSENT_KEY: &str = "cookiesAccepted";
pub const CONSENT_VALUE: &str = "true";
/// Delay before the banner slides in for visitors without consent.
pub const REVEAL_DELAY_MS: u32 = 1000;
/// Time the hide animation gets before the banner leaves the document.
pub const HIDE_ANIMATION_MS: u32 = 500;

/// Key/value storage holding the consent flag.
pub trait ConsentStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and storage-less environments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl ConsentStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Any non-empty stored value counts as consent. Unreadable storage is
/// logged and treated as no consent.
pub fn has_consented(store: &impl ConsentStore) -> bool {
    match store.get(CONSENT_KEY) {
        Ok(value) => value.is_some_and(|v| !v.is_empty()),
        Err(err) => {
            log::warn!("consent flag unreadable: {err}");
            false
        }
    }
}

pub fn record_consent(store: &impl ConsentStore) -> Result<()> {
    store.set(CONSENT_KEY, CONSENT_VALUE)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerPlan {
    /// Show the banner after `REVEAL_DELAY_MS` and wait for accept.
    Reveal,
    /// Consent already given: drop the banner right away.
    Remove,
    /// Nothing to do on this page.
    Skip,
}

pub fn plan_banner(consented: bool, banner_present: bool, accept_present: bool) -> BannerPlan {
    match (consented, banner_present, accept_present) {
        (false, true, true) => BannerPlan::Reveal,
        (true, true, _) => BannerPlan::Remove,
        _ => BannerPlan::Skip,
    }
}
