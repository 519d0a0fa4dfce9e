//! Card templates: pure projections from one content record to markup.
//!
//! Content comes from the site's own `data/` documents and may carry inline
//! markup, so text is inserted as authored.

use crate::content::{BattleUpdate, Chronicle, Testimonial, Weapon, format_display_date};
use crate::interact::expand::CardState;

/// Class token for a free-form label: lower-cased, first space turned into `-`.
/// ("Balance Patch" -> "balance-patch", "New Game Mode" -> "new-game mode")
pub fn css_token(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}

fn list_items(items: &[String]) -> String {
    items.iter().map(|item| format!("<li>{item}</li>")).collect()
}

pub fn testimonial_card(t: &Testimonial) -> String {
    format!(
        concat!(
            "<div class=\"testimonial-card\">",
            "<div class=\"testimonial-avatar\">{avatar}</div>",
            "<div class=\"testimonial-content\">",
            "<h3 class=\"testimonial-name\">{name}</h3>",
            "<p class=\"testimonial-comment\">{comment}</p>",
            "<div class=\"testimonial-rating\">{stars}</div>",
            "</div>",
            "</div>"
        ),
        avatar = t.avatar,
        name = t.name,
        comment = t.comment,
        stars = "⭐".repeat(t.rating as usize),
    )
}

pub fn weapon_card(w: &Weapon) -> String {
    format!(
        concat!(
            "<div class=\"weapon-card\">",
            "<div class=\"weapon-icon\">{icon}</div>",
            "<div class=\"weapon-info\">",
            "<h3 class=\"weapon-name\">{name}</h3>",
            "<p class=\"weapon-description\">{description}</p>",
            "<div class=\"weapon-stats\">",
            "<span class=\"stat damage\">Damage: {damage}</span>",
            "<span class=\"stat speed\">Speed: {speed}</span>",
            "</div>",
            "<div class=\"weapon-rarity {rarity_class}\">{rarity}</div>",
            "</div>",
            "</div>"
        ),
        icon = w.icon,
        name = w.name,
        description = w.description,
        damage = w.damage,
        speed = w.speed,
        rarity_class = w.rarity.css_class(),
        rarity = w.rarity.label(),
    )
}

/// Update card. Starts collapsed; `ExpandableCard` owns the toggle.
pub fn battle_update_card(u: &BattleUpdate) -> String {
    let collapsed = CardState::Collapsed;
    format!(
        concat!(
            "<div class=\"battle-update-card\" data-update-id=\"{id}\">",
            "<div class=\"battle-update-header\">",
            "<div class=\"battle-update-version\">{version}</div>",
            "<div class=\"battle-update-type {kind_class}\">{kind}</div>",
            "</div>",
            "<h3 class=\"battle-update-title\">{title} <span class=\"expand-indicator\">📋</span></h3>",
            "<div class=\"battle-update-summary\">{summary}</div>",
            "<div class=\"battle-update-date\">{date}</div>",
            "<ul class=\"battle-update-changes\">{changes}</ul>",
            "<div class=\"battle-update-expand-button\">",
            "<span class=\"expand-button-text\">{label}</span>",
            "<span class=\"expand-button-icon\">{icon}</span>",
            "</div>",
            "<div class=\"battle-update-expanded\" style=\"display: {display};\">",
            "<div class=\"battle-update-detailed\">",
            "<h4>Detailed Changes:</h4>",
            "<ul class=\"battle-update-detailed-changes\">{detailed}</ul>",
            "</div>",
            "<div class=\"battle-update-developer-notes\">",
            "<h4>Developer Notes:</h4>",
            "<p>{notes}</p>",
            "</div>",
            "</div>",
            "</div>"
        ),
        id = u.id,
        version = u.version,
        kind_class = css_token(&u.kind),
        kind = u.kind,
        title = u.title,
        summary = u.summary,
        date = format_display_date(&u.date),
        changes = list_items(&u.changes),
        label = collapsed.label(),
        icon = collapsed.icon(),
        display = collapsed.detail_display(),
        detailed = list_items(&u.detailed_changes),
        notes = u.developer_notes,
    )
}

pub fn chronicle_card(c: &Chronicle) -> String {
    format!(
        concat!(
            "<div class=\"chronicle-card\">",
            "<div class=\"chronicle-header\">",
            "<h3 class=\"chronicle-title\">{title}</h3>",
            "<div class=\"chronicle-category {category_class}\">{category}</div>",
            "</div>",
            "<div class=\"chronicle-meta\">",
            "<span class=\"chronicle-player\">By {player}</span>",
            "<span class=\"chronicle-date\">{date}</span>",
            "</div>",
            "<p class=\"chronicle-story\">{story}</p>",
            "</div>"
        ),
        title = c.title,
        category_class = css_token(&c.category),
        category = c.category,
        player = c.player,
        date = format_display_date(&c.date),
        story = c.story,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Rarity;

    fn iron_blade() -> Weapon {
        Weapon {
            icon: "🗡".into(),
            name: "Iron Blade".into(),
            description: "Basic".into(),
            damage: 10i64.into(),
            speed: 5i64.into(),
            rarity: Rarity::Common,
        }
    }

    #[test]
    fn weapon_card_shows_stats_and_rarity_class() {
        let html = weapon_card(&iron_blade());
        assert!(html.contains("Damage: 10"));
        assert!(html.contains("Speed: 5"));
        assert!(html.contains("class=\"weapon-rarity common\">Common<"));
    }

    #[test]
    fn testimonial_stars_follow_rating() {
        let t = Testimonial {
            avatar: "🥷".into(),
            name: "Kai".into(),
            comment: "Sharp!".into(),
            rating: 4,
        };
        let html = testimonial_card(&t);
        assert!(html.contains("<div class=\"testimonial-rating\">⭐⭐⭐⭐</div>"));
    }

    #[test]
    fn zero_rating_has_no_stars() {
        let t = Testimonial { avatar: String::new(), name: "x".into(), comment: "y".into(), rating: 0 };
        assert!(testimonial_card(&t).contains("<div class=\"testimonial-rating\"></div>"));
    }

    #[test]
    fn css_token_replaces_only_first_space() {
        assert_eq!(css_token("Balance Patch"), "balance-patch");
        assert_eq!(css_token("New Game Mode"), "new-game mode");
        assert_eq!(css_token("Hotfix"), "hotfix");
    }

    #[test]
    fn update_card_starts_collapsed() {
        let u = BattleUpdate {
            id: "u-7".into(),
            version: "v2.0".into(),
            kind: "Major Update".into(),
            title: "Shadow Realm".into(),
            summary: "New zone".into(),
            date: "2024-05-10".into(),
            changes: vec!["Added portal".into(), "New boss".into()],
            detailed_changes: vec!["Boss has 3 phases".into()],
            developer_notes: "Enjoy".into(),
        };
        let html = battle_update_card(&u);
        assert!(html.starts_with("<div class=\"battle-update-card\" data-update-id=\"u-7\">"));
        assert!(html.contains("battle-update-type major-update\">Major Update<"));
        assert!(html.contains("<li>Added portal</li><li>New boss</li>"));
        assert!(html.contains("May 10, 2024"));
        assert!(html.contains("style=\"display: none;\""));
        assert!(html.contains("<span class=\"expand-button-text\">More Info</span>"));
        assert!(html.contains("<span class=\"expand-button-icon\">▼</span>"));
    }

    #[test]
    fn chronicle_card_credits_player() {
        let c = Chronicle {
            title: "First Win".into(),
            category: "Epic Battle".into(),
            player: "Mira".into(),
            date: "2024-01-15".into(),
            story: "It was close.".into(),
        };
        let html = chronicle_card(&c);
        assert!(html.contains("By Mira"));
        assert!(html.contains("chronicle-category epic-battle"));
        assert!(html.contains("January 15, 2024"));
    }
}
