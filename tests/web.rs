// Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use stickman_slash::consent::{BannerPlan, ConsentStore, MemoryStore, CONSENT_KEY};
use stickman_slash::content::BattleUpdate;
use stickman_slash::dom::cards::{bind_expandable, CARD_SELECTOR};
use stickman_slash::dom::consent::CookieBanner;
use stickman_slash::dom::contact::bind_form_validation;
use stickman_slash::dom::document;
use stickman_slash::hydrate::render_all;
use stickman_slash::interact::expand::CardState;
use stickman_slash::interact::form::SubmitOutcome;
use stickman_slash::templates::battle_update_card;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen::JsCast;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str, html: &str) -> Element {
    let doc = document().unwrap();
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let el = doc.create_element("div").unwrap();
    el.set_id(id);
    el.set_inner_html(html);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn overlay_count() -> u32 {
    document().unwrap().query_selector_all(".processing-overlay").unwrap().length()
}

fn update(id: i64) -> BattleUpdate {
    serde_json::from_value(serde_json::json!({
        "id": id, "version": "v1", "type": "Hotfix", "title": "t", "summary": "s",
        "date": "2024-01-15", "changes": ["a"], "detailedChanges": ["b"], "developerNotes": "n"
    }))
    .unwrap()
}

#[wasm_bindgen_test]
fn render_replaces_container_content() {
    let doc = document().unwrap();
    let root = mount("battle-updates", "<p>old</p>");
    render_all(&doc, "battle-updates", &[update(1), update(2)], battle_update_card);
    assert_eq!(root.query_selector_all(CARD_SELECTOR).unwrap().length(), 2);
    assert!(!root.inner_html().contains("<p>old</p>"));
}

#[wasm_bindgen_test]
fn card_toggles_back_to_collapsed() {
    let doc = document().unwrap();
    let root = mount("battle-updates", "");
    render_all(&doc, "battle-updates", &[update(7)], battle_update_card);
    let cards = bind_expandable(&root, CARD_SELECTOR).unwrap();
    let card = &cards[0];
    let detail: HtmlElement = root
        .query_selector(".battle-update-expanded")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let label = root.query_selector(".expand-button-text").unwrap().unwrap();
    assert_eq!(card.state(), CardState::Collapsed);

    assert_eq!(card.toggle().unwrap(), CardState::Expanded);
    assert_eq!(detail.style().get_property_value("display").unwrap(), "block");
    assert_eq!(label.text_content().unwrap(), "Less Info");

    assert_eq!(card.toggle().unwrap(), CardState::Collapsed);
    assert_eq!(card.state(), CardState::Collapsed);
    assert_eq!(detail.style().get_property_value("display").unwrap(), "none");
    assert_eq!(label.text_content().unwrap(), "More Info");
    assert!(!root.query_selector(CARD_SELECTOR).unwrap().unwrap().class_list().contains("expanded"));
}

#[wasm_bindgen_test]
fn consented_visitor_never_sees_banner() {
    let doc = document().unwrap();
    mount("cookie-host", "<div id=\"cookie-consent-bar\"><button id=\"accept-cookies\">OK</button></div>");
    let store = MemoryStore::default();
    store.set(CONSENT_KEY, "true").unwrap();
    assert_eq!(CookieBanner::init(&doc, store).unwrap(), BannerPlan::Remove);
    assert!(doc.get_element_by_id("cookie-consent-bar").is_none());
}

#[wasm_bindgen_test]
fn blank_fields_block_submission() {
    let doc = document().unwrap();
    mount(
        "form-host",
        concat!(
            "<form id=\"contactForm\">",
            "<input name=\"name\"><span id=\"name-error\"></span>",
            "<textarea name=\"message\"></textarea><span id=\"message-error\"></span>",
            "<button class=\"submit-button\" type=\"submit\">Send Message</button>",
            "</form>"
        ),
    );
    let form = bind_form_validation(&doc, "contactForm", 3, 3000).unwrap().unwrap();
    let name: HtmlInputElement = doc.query_selector("input[name=name]").unwrap().unwrap().dyn_into().unwrap();
    name.set_value("Kai");

    let overlays_before = overlay_count();
    let outcome = form.clone().submit().unwrap();
    assert_eq!(outcome, SubmitOutcome::Blocked(vec!["message".to_string()]));
    assert_eq!(
        doc.get_element_by_id("message-error").unwrap().text_content().unwrap(),
        "This field is required"
    );
    assert_eq!(doc.get_element_by_id("name-error").unwrap().text_content().unwrap(), "");
    assert_eq!(overlay_count(), overlays_before);
}

#[wasm_bindgen_test]
fn filled_form_starts_one_countdown() {
    let doc = document().unwrap();
    mount(
        "filled-form-host",
        concat!(
            "<form id=\"filledContactForm\">",
            "<input name=\"name\"><input name=\"email\" type=\"email\">",
            "<textarea name=\"message\"></textarea>",
            "<button class=\"submit-button\" type=\"submit\">Send Message</button>",
            "</form>"
        ),
    );
    let form = bind_form_validation(&doc, "filledContactForm", 3, 3000).unwrap().unwrap();
    for (selector, value) in [
        ("#filledContactForm input[name=name]", "Kai"),
        ("#filledContactForm input[name=email]", "kai@example.com"),
    ] {
        let input: HtmlInputElement = doc.query_selector(selector).unwrap().unwrap().dyn_into().unwrap();
        input.set_value(value);
    }
    let message: HtmlTextAreaElement = doc
        .query_selector("#filledContactForm textarea")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    message.set_value("Slash on!");

    let overlays_before = overlay_count();
    assert_eq!(form.clone().submit().unwrap(), SubmitOutcome::Started);
    assert_eq!(form.clone().submit().unwrap(), SubmitOutcome::Busy);
    assert_eq!(overlay_count(), overlays_before + 1);

    let button: HtmlButtonElement = doc
        .query_selector("#filledContactForm .submit-button")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(button.disabled());

    let overlays = doc.query_selector_all(".processing-overlay").unwrap();
    for i in 0..overlays.length() {
        overlays.get(i).unwrap().dyn_into::<Element>().unwrap().remove();
    }
}
