//! Content records served as JSON documents under `data/`.
//!
//! Records are read-only after loading and render in the order received.

use std::fmt;

use serde::Deserialize;

pub mod dates;

pub use dates::format_display_date;

/// A scalar shown verbatim in markup. Content authors write stats and ids
/// either as JSON numbers or strings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DisplayValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Int(n) => write!(f, "{n}"),
            DisplayValue::Float(x) => write!(f, "{x}"),
            DisplayValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DisplayValue {
    fn from(n: i64) -> Self {
        DisplayValue::Int(n)
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        DisplayValue::Text(s.to_string())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Styling class of the rarity badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub avatar: String,
    pub name: String,
    pub comment: String,
    pub rating: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Weapon {
    pub icon: String,
    pub name: String,
    pub description: String,
    pub damage: DisplayValue,
    pub speed: DisplayValue,
    pub rarity: Rarity,
}

/// `data/main-content.json`
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MainContent {
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BattleUpdate {
    /// Only used to address the card in the DOM.
    pub id: DisplayValue,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub summary: String,
    pub date: String,
    #[serde(default)]
    pub changes: Vec<String>,
    #[serde(default)]
    pub detailed_changes: Vec<String>,
    #[serde(default)]
    pub developer_notes: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Chronicle {
    pub title: String,
    pub category: String,
    pub player: String,
    pub date: String,
    pub story: String,
}

/// `data/updates-content.json`
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatesContent {
    #[serde(default)]
    pub battle_updates: Vec<BattleUpdate>,
    #[serde(default)]
    pub chronicles: Vec<Chronicle>,
}
