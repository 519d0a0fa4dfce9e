//! Contact form: inline validation and the simulated submission.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollToOptions,
};

use super::{listen, notice, query_all, set_timeout, window};
use crate::error::{Result, SiteError};
use crate::interact::form::{
    COUNTDOWN_TICK_MS, Countdown, CountdownStep, FieldCheck, FormReport, NOTIFY_DELAY_MS,
    OVERLAY_FADE_MS, SUBMIT_BUSY_TEXT, SUBMIT_IDLE_TEXT, SUCCESS_MESSAGE, SUCCESS_TITLE,
    SubmissionGate, SubmitOutcome, check_field, error_element_id, processing_overlay_markup,
};
use crate::notify::Notice;

const ERROR_CLASS: &str = "error";

enum Field {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Field {
    fn from_element(el: Element) -> Option<Self> {
        let el = match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => {
                // Buttons and hidden inputs carry no user text.
                return match input.type_().as_str() {
                    "submit" | "button" | "hidden" | "reset" => None,
                    _ => Some(Field::Input(input)),
                };
            }
            Err(el) => el,
        };
        el.dyn_into::<HtmlTextAreaElement>().ok().map(Field::TextArea)
    }

    fn name(&self) -> String {
        match self {
            Field::Input(el) => el.name(),
            Field::TextArea(el) => el.name(),
        }
    }

    fn value(&self) -> String {
        match self {
            Field::Input(el) => el.value(),
            Field::TextArea(el) => el.value(),
        }
    }

    fn element(&self) -> &Element {
        match self {
            Field::Input(el) => el.as_ref(),
            Field::TextArea(el) => el.as_ref(),
        }
    }
}

pub struct ContactForm {
    doc: Document,
    form: HtmlFormElement,
    fields: Vec<Field>,
    submit_button: Option<HtmlButtonElement>,
    gate: RefCell<SubmissionGate>,
    countdown_seconds: u32,
    notification_ms: u32,
}

/// Bind validation and submission to `#form_id`. `Ok(None)` when the page
/// has no such form.
pub fn bind_form_validation(
    doc: &Document,
    form_id: &str,
    countdown_seconds: u32,
    notification_ms: u32,
) -> Result<Option<Rc<ContactForm>>> {
    let Some(form) = doc
        .get_element_by_id(form_id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(None);
    };
    let fields: Vec<Field> = query_all(&form, "input, textarea")?
        .into_iter()
        .filter_map(Field::from_element)
        .collect();
    let submit_button = form
        .query_selector(".submit-button")?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());

    let contact = Rc::new(ContactForm {
        doc: doc.clone(),
        form,
        fields,
        submit_button,
        gate: RefCell::new(SubmissionGate::default()),
        countdown_seconds,
        notification_ms,
    });

    for index in 0..contact.fields.len() {
        for event in ["input", "blur"] {
            let handle = contact.clone();
            listen(contact.fields[index].element(), event, move |_evt| {
                handle.validate_field(&handle.fields[index]);
            })?;
        }
    }
    let handle = contact.clone();
    listen(&contact.form, "submit", move |evt| {
        evt.prevent_default();
        if let Err(err) = handle.clone().submit() {
            log::error!("contact submission failed: {err}");
        }
    })?;
    log::debug!("contact form bound with {} field(s)", contact.fields.len());
    Ok(Some(contact))
}

impl ContactForm {
    fn validate_field(&self, field: &Field) -> FieldCheck {
        let check = check_field(&field.name(), &field.value());
        let class_list = field.element().class_list();
        let message = self.doc.get_element_by_id(&error_element_id(&check.name));
        let styled = if check.valid {
            class_list.remove_1(ERROR_CLASS)
        } else {
            class_list.add_1(ERROR_CLASS)
        };
        if let Err(err) = styled {
            log::warn!("field '{}' not styled: {err:?}", check.name);
        }
        if let Some(message) = message {
            message.set_text_content(Some(check.message()));
        }
        check
    }

    pub fn validate(&self) -> FormReport {
        FormReport {
            checks: self.fields.iter().map(|f| self.validate_field(f)).collect(),
        }
    }

    /// Re-validate everything and start the submission sequence if allowed.
    pub fn submit(self: Rc<Self>) -> Result<SubmitOutcome> {
        let report = self.validate();
        let outcome = self.gate.borrow_mut().submit(&report);
        match &outcome {
            SubmitOutcome::Blocked(fields) => log::info!("submission blocked, invalid: {fields:?}"),
            SubmitOutcome::Busy => log::debug!("submission already running"),
            SubmitOutcome::Started => self.clone().start_sequence()?,
        }
        Ok(outcome)
    }

    fn start_sequence(self: Rc<Self>) -> Result<()> {
        if let Some(button) = &self.submit_button {
            button.set_text_content(Some(SUBMIT_BUSY_TEXT));
            button.set_disabled(true);
        }
        let body = self.doc.body().ok_or(SiteError::NoBrowser("document body"))?;
        let overlay = self.doc.create_element("div")?;
        overlay.set_class_name("processing-overlay");
        overlay.set_inner_html(&processing_overlay_markup(self.countdown_seconds));
        body.append_child(&overlay)?;
        let countdown = Countdown::new(self.countdown_seconds);
        self.schedule_tick(overlay, countdown)
    }

    fn schedule_tick(self: Rc<Self>, overlay: Element, mut countdown: Countdown) -> Result<()> {
        set_timeout(COUNTDOWN_TICK_MS, move || {
            let step = countdown.tick();
            if let Ok(Some(display)) = overlay.query_selector(".countdown") {
                display.set_text_content(Some(&countdown.remaining().to_string()));
            }
            let next = match step {
                CountdownStep::Show(_) => self.schedule_tick(overlay, countdown),
                CountdownStep::Done => self.complete(overlay),
            };
            if let Err(err) = next {
                log::error!("contact submission stalled: {err}");
            }
        })
    }

    fn complete(&self, overlay: Element) -> Result<()> {
        overlay.class_list().add_1("fade-out")?;
        set_timeout(OVERLAY_FADE_MS, move || overlay.remove())?;

        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window()?.scroll_to_with_scroll_to_options(&opts);

        let success = Notice::new(SUCCESS_TITLE, SUCCESS_MESSAGE).with_duration(self.notification_ms);
        set_timeout(NOTIFY_DELAY_MS, move || {
            if let Err(err) = notice::show(&success) {
                log::warn!("success notification not shown: {err}");
            }
        })?;

        self.form.reset();
        if let Some(button) = &self.submit_button {
            button.set_text_content(Some(SUBMIT_IDLE_TEXT));
            button.set_disabled(false);
        }
        self.gate.borrow_mut().finish();
        Ok(())
    }
}
