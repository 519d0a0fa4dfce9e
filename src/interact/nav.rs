//! Header navigation: burger menu animation and in-page anchor links.

/// `transform` for burger line `index` once the menu is toggled.
pub fn burger_line_transform(index: usize, menu_active: bool) -> String {
    if menu_active {
        format!("rotate({}deg)", 45 + index * 90)
    } else {
        "rotate(0deg)".to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave this page for the home page section, e.g. `/#weapons`.
    Redirect(String),
    /// Smooth-scroll to the element matching this selector.
    ScrollTo(String),
}

fn is_home_path(pathname: &str) -> bool {
    pathname == "/" || pathname.ends_with("index.html")
}

/// Decide what a click on a nav link does. Links that are not `#anchors`
/// keep their default behavior (`None`).
pub fn resolve_anchor(href: Option<&str>, pathname: &str) -> Option<AnchorAction> {
    let href = href.filter(|h| h.starts_with('#'))?;
    if is_home_path(pathname) {
        Some(AnchorAction::ScrollTo(href.to_string()))
    } else {
        Some(AnchorAction::Redirect(format!("/{href}")))
    }
}
