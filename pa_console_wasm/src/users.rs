use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use pa_console::{
    ConsoleConfig, ConsoleError, EditActive, EditActiveOutcome, MessageFade, PendingFade,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::{dom, http, ids::*, state};

type Pending = Rc<RefCell<PendingFade<Timeout>>>;

/// Each active checkbox sits between a hidden username input and a message span.
pub(crate) fn wire_active_checkboxes() -> Result<(), ConsoleError> {
    let config = state::config();
    for element in dom::query_all(EDIT_ACTIVE_CHECKBOXES)? {
        let checkbox: HtmlInputElement = element
            .dyn_into()
            .map_err(|_| ConsoleError::Dom("active toggle is not an input".to_string()))?;
        let changed = checkbox.clone();
        let config = config.clone();
        let pending = Pending::default();
        dom::listen(&checkbox, "change", move |_| {
            if let Err(error) = toggle_active(&changed, &config, &pending) {
                log::error!("{error}");
            }
        })?;
    }
    Ok(())
}

fn toggle_active(
    checkbox: &HtmlInputElement,
    config: &ConsoleConfig,
    pending: &Pending,
) -> Result<(), ConsoleError> {
    let username = checkbox
        .previous_element_sibling()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .ok_or_else(|| ConsoleError::Dom("no username input before active toggle".to_string()))?;
    let message = checkbox
        .next_element_sibling()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ConsoleError::Dom("no message element after active toggle".to_string()))?;

    let request = EditActive::new(username, checkbox.checked());
    let url = config.endpoints().edit_active();
    let fade = MessageFade::from_config(config);
    let pending = pending.clone();
    spawn_local(async move {
        match http::post_form(&url, request.form_body()).await {
            Ok(body) => show_message(
                message,
                EditActiveOutcome::from_response(&body),
                fade,
                &pending,
            ),
            // A failed request leaves the page untouched.
            Err(error) => log::warn!(
                "updating active flag of {} failed: {error}",
                request.username
            ),
        }
    });
    Ok(())
}

fn set_style(message: &HtmlElement, property: &str, value: &str) {
    if message.style().set_property(property, value).is_err() {
        log::error!("could not set {property} on the active toggle message");
    }
}

/// Shows `outcome` for the full hide delay, then fades it out. Steps still
/// queued for an earlier message next to the same checkbox are cancelled.
fn show_message(
    message: HtmlElement,
    outcome: EditActiveOutcome,
    fade: MessageFade,
    pending: &Pending,
) {
    pending.borrow_mut().cancel();

    message.set_text_content(Some(outcome.label()));
    set_style(&message, "transition", "none");
    set_style(&message, "opacity", "1");
    set_style(&message, "display", "inline");

    let fading = message.clone();
    let start_fade = Timeout::new(fade.visible_ms(), move || {
        set_style(&fading, "transition", &format!("opacity {}ms", fade.fade_ms()));
        set_style(&fading, "opacity", "0");
    });
    let hide = Timeout::new(fade.hidden_ms(), move || {
        set_style(&message, "display", "none");
    });
    pending.borrow_mut().replace([start_fade, hide]);
}
