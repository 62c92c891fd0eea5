//! Registry write access: the status check and the set-credentials dialog.

use std::cell::RefCell;

use pa_console::render::ADD_CREDS_CLASS;
use pa_console::{AuthStatusView, ConsoleError, RegistryAuthStatus, RegistryCredentials};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlDialogElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::{dom, http, ids::*, state};

thread_local! {
    static ADD_CREDS_HANDLER: RefCell<Option<Closure<dyn FnMut(Event)>>> = const { RefCell::new(None) };
}

/// Checks write access to `registry` and renders the outcome.
///
/// Concurrent checks are not sequenced; whichever response arrives last is shown.
pub(crate) fn check_reg_access(registry: String) {
    let url = state::config().endpoints().check_access(&registry);
    dom::batch(|channel| channel.set_html(REG_AUTH_STATUS_ID, &AuthStatusView::Checking.html()));

    spawn_local(async move {
        let response = http::get_json::<RegistryAuthStatus>(&url).await;
        if let Err(error) = &response {
            log::warn!("checking access to registry {registry} failed: {error}");
        }
        let view = AuthStatusView::from_response(&registry, response);
        dom::batch(|channel| channel.set_html(REG_AUTH_STATUS_ID, &view.html()));

        if let AuthStatusView::CredentialsRequired { registry } = view {
            if let Err(error) = wire_add_creds_link(registry) {
                log::error!("{error}");
            }
        }
    });
}

fn wire_add_creds_link(registry: String) -> Result<(), ConsoleError> {
    let status: Element = dom::by_id(REG_AUTH_STATUS_ID)?;
    let Some(link) = dom::query_one::<Element>(&status, &format!("a.{ADD_CREDS_CLASS}"))? else {
        return Ok(());
    };
    let handler = dom::event_closure(move |event: Event| {
        event.prevent_default();
        if let Err(error) = add_creds(&registry) {
            log::error!("{error}");
        }
    });
    dom::attach(&link, "click", &handler)?;
    // The previous link was replaced along with the status markup.
    ADD_CREDS_HANDLER.with(|slot| *slot.borrow_mut() = Some(handler));
    Ok(())
}

/// Clears the credentials form, fills in `registry` and opens the dialog.
pub(crate) fn add_creds(registry: &str) -> Result<(), ConsoleError> {
    let form: HtmlFormElement = dom::by_id(SET_REG_CREDS_FORM_ID)?;
    form.reset();
    form_field(&form, "regUID")?.set_value(registry);

    let dialog: HtmlDialogElement = dom::by_id(SET_REG_CREDS_DIALOG_ID)?;
    if !dialog.open() {
        dialog
            .show_modal()
            .map_err(|_| ConsoleError::Dom("failed to open the credentials dialog".to_string()))?;
    }
    Ok(())
}

fn form_field(form: &HtmlFormElement, name: &str) -> Result<HtmlInputElement, ConsoleError> {
    dom::query_one::<HtmlInputElement>(form, &format!("input[name='{name}']"))?
        .ok_or_else(|| ConsoleError::Dom(format!("credentials form has no {name} field")))
}

fn read_credentials(form: &HtmlFormElement) -> Result<RegistryCredentials, ConsoleError> {
    Ok(RegistryCredentials {
        reg_uid: form_field(form, "regUID")?.value(),
        reg_principal: form_field(form, "regPrincipal")?.value(),
        reg_cred: form_field(form, "regCred")?.value(),
    })
}

/// Posts the credentials form asynchronously instead of navigating.
pub(crate) fn wire_credentials_form() -> Result<(), ConsoleError> {
    let form: HtmlFormElement = dom::by_id(SET_REG_CREDS_FORM_ID)?;
    let submitted = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        match read_credentials(&submitted) {
            Ok(credentials) => submit_credentials(submitted.action(), credentials),
            Err(error) => log::error!("{error}"),
        }
    })
}

fn submit_credentials(url: String, credentials: RegistryCredentials) {
    log::debug!("saving credentials {credentials:?}");
    spawn_local(async move {
        match http::post_form(&url, credentials.form_body()).await {
            Ok(_) => {
                if let Some(dialog) = dom::find::<HtmlDialogElement>(SET_REG_CREDS_DIALOG_ID) {
                    dialog.close();
                }
                check_reg_access(credentials.reg_uid);
            }
            // Nothing is shown on the page for a failed save.
            Err(error) => log::warn!(
                "saving credentials for registry {} failed: {error}",
                credentials.reg_uid
            ),
        }
    });
}

/// Re-checks access whenever another registry is selected, then checks the
/// current selection once.
pub(crate) fn wire_registry_select() -> Result<(), ConsoleError> {
    let select: HtmlSelectElement = dom::by_id(REGISTRY_SELECT_ID)?;
    let changed = select.clone();
    dom::listen(&select, "change", move |_| check_reg_access(changed.value()))?;
    check_reg_access(select.value());
    Ok(())
}
