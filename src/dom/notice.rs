use web_sys::{Element, HtmlElement};

use super::{document, find_as, set_timeout};
use crate::error::{Result, SiteError};
use crate::notify::{EXIT_ANIMATION_MS, Notice, PROGRESS_START_MS};

/// Append a notification panel and schedule its progress fill, slide-out
/// and removal. Returns the panel.
pub fn show(notice: &Notice) -> Result<Element> {
    let doc = document()?;
    let body = doc.body().ok_or(SiteError::NoBrowser("document body"))?;

    let panel = doc.create_element("div")?;
    panel.set_class_name("notification-slide");
    panel.set_inner_html(&notice.markup());
    body.append_child(&panel)?;

    let fill: HtmlElement = find_as(&panel, ".progress-fill")?;
    fill.style()
        .set_property("transition", &notice.progress_transition())?;
    set_timeout(PROGRESS_START_MS, move || {
        fill.style().set_property("width", "100%").ok();
    })?;

    let leaving = panel.clone();
    set_timeout(notice.duration_ms, move || {
        leaving.class_list().add_1("slide-out").ok();
        if let Err(err) = set_timeout(EXIT_ANIMATION_MS, move || leaving.remove()) {
            log::warn!("notification not removed: {err}");
        }
    })?;
    Ok(panel)
}
