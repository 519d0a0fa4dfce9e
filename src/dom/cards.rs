//! Expandable update cards.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement};

use super::{find, find_as, listen, query_all};
use crate::error::Result;
use crate::interact::expand::CardState;

pub const CARD_SELECTOR: &str = ".battle-update-card";
const DETAIL_SELECTOR: &str = ".battle-update-expanded";
const ICON_SELECTOR: &str = ".expand-button-icon";
const LABEL_SELECTOR: &str = ".expand-button-text";
const EXPANDED_CLASS: &str = "expanded";

/// One card plus the nodes its toggle updates, looked up once.
pub struct ExpandableCard {
    root: Element,
    detail: HtmlElement,
    icon: Element,
    label: Element,
    state: Cell<CardState>,
}

impl ExpandableCard {
    pub fn attach(root: Element) -> Result<Self> {
        Ok(Self {
            detail: find_as(&root, DETAIL_SELECTOR)?,
            icon: find(&root, ICON_SELECTOR)?,
            label: find(&root, LABEL_SELECTOR)?,
            root,
            state: Cell::new(CardState::Collapsed),
        })
    }

    pub fn state(&self) -> CardState {
        self.state.get()
    }

    pub fn toggle(&self) -> Result<CardState> {
        let next = self.state.get().toggled();
        self.apply(next)?;
        self.state.set(next);
        Ok(next)
    }

    fn apply(&self, state: CardState) -> Result<()> {
        self.detail
            .style()
            .set_property("display", state.detail_display())?;
        self.root
            .class_list()
            .toggle_with_force(EXPANDED_CLASS, state.is_expanded())?;
        self.icon.set_text_content(Some(state.icon()));
        self.label.set_text_content(Some(state.label()));
        Ok(())
    }
}

/// Wire a click toggle onto every card under `root`. Cards missing their
/// detail/icon/label parts are skipped with a warning.
pub fn bind_expandable(root: &Element, card_selector: &str) -> Result<Vec<Rc<ExpandableCard>>> {
    let mut cards = Vec::new();
    for el in query_all(root, card_selector)? {
        let card = match ExpandableCard::attach(el) {
            Ok(card) => Rc::new(card),
            Err(err) => {
                log::warn!("card not expandable: {err}");
                continue;
            }
        };
        let handle = card.clone();
        listen(&card.root, "click", move |_evt| {
            if let Err(err) = handle.toggle() {
                log::warn!("card toggle failed: {err}");
            }
        })?;
        cards.push(card);
    }
    log::debug!("bound {} expandable card(s)", cards.len());
    Ok(cards)
}
