//! Site configuration: resource paths, container ids and timings.
//!
//! `SiteConfig::default()` matches the deployed site. Pages may pass a JSON
//! override to `start_page`; missing keys keep their defaults.

use serde::Deserialize;

use crate::error::Result;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub header_path: String,
    pub footer_path: String,
    pub main_content_path: String,
    pub updates_content_path: String,
    pub containers: ContainerIds,
    /// How long a notification stays fully visible before sliding out.
    pub notification_ms: u32,
    /// Seconds shown on the contact form's processing countdown.
    pub countdown_seconds: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerIds {
    pub header: String,
    pub footer: String,
    pub testimonials: String,
    pub weapons: String,
    pub battle_updates: String,
    pub chronicles: String,
    pub contact_form: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_path: "slash-header.html".into(),
            footer_path: "blade-footer.html".into(),
            main_content_path: "data/main-content.json".into(),
            updates_content_path: "data/updates-content.json".into(),
            containers: ContainerIds::default(),
            notification_ms: 3000,
            countdown_seconds: 3,
        }
    }
}

impl Default for ContainerIds {
    fn default() -> Self {
        Self {
            header: "header-container".into(),
            footer: "footer-container".into(),
            testimonials: "testimonials".into(),
            weapons: "weapons".into(),
            battle_updates: "battle-updates".into(),
            chronicles: "chronicles".into(),
            contact_form: "contactForm".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployed_site() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.header_path, "slash-header.html");
        assert_eq!(cfg.footer_path, "blade-footer.html");
        assert_eq!(cfg.containers.battle_updates, "battle-updates");
        assert_eq!(cfg.notification_ms, 3000);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{ "mainContentPath": "/v2/main.json", "containers": { "weapons": "arsenal" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.main_content_path, "/v2/main.json");
        assert_eq!(cfg.containers.weapons, "arsenal");
        assert_eq!(cfg.containers.testimonials, "testimonials");
        assert_eq!(cfg.countdown_seconds, 3);
    }

    #[test]
    fn rejects_malformed_override() {
        assert!(SiteConfig::from_json("{ \"headerPath\": 7 }").is_err());
    }
}
