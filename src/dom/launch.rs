use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement};

use super::set_timeout;
use crate::error::{Result, SiteError};
use crate::interact::launch::{
    LAUNCH_SEQUENCE, LaunchStep, PULSE_MS, PULSE_SHADOW, PULSE_TRANSFORM, REST_SHADOW,
    REST_TRANSFORM,
};

fn apply_step(button: &HtmlButtonElement, step: LaunchStep) {
    button.set_text_content(Some(step.text));
    button.set_disabled(step.disabled);
}

fn set_glow(button: &HtmlButtonElement, transform: &str, shadow: &str) -> Result<()> {
    let style = button.style();
    style.set_property("transform", transform)?;
    style.set_property("box-shadow", shadow)?;
    Ok(())
}

/// Play the fake launch sequence on the clicked button.
pub fn launch_from_event(event: &Event) -> Result<()> {
    let button: HtmlButtonElement = event
        .current_target()
        .or_else(|| event.target())
        .and_then(|t| t.dyn_into::<HtmlButtonElement>().ok())
        .ok_or_else(|| SiteError::missing("launch button"))?;

    for step in LAUNCH_SEQUENCE {
        if step.at_ms == 0 {
            apply_step(&button, step);
        } else {
            let b = button.clone();
            set_timeout(step.at_ms, move || apply_step(&b, step))?;
        }
    }

    set_glow(&button, PULSE_TRANSFORM, PULSE_SHADOW)?;
    set_timeout(PULSE_MS, move || {
        if let Err(err) = set_glow(&button, REST_TRANSFORM, REST_SHADOW) {
            log::warn!("launch glow not reset: {err}");
        }
    })?;
    Ok(())
}
