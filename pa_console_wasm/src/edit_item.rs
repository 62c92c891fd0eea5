use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use pa_console::render::{self, RIL_MEMBERS_FAILED};
use pa_console::{ConsoleError, DataHolderToggle, DataHolderType, DataHolderView, RilMemberItemGroup};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::{dom, http, ids::*, state};

/// The dataset named on the page. Pages without one still request member
/// items, with an empty name.
pub(crate) fn dataset_name() -> String {
    dom::text_of(DATASET_NAME_ID).unwrap_or_else(|error| {
        log::warn!("{error}; requesting member items without a dataset name");
        String::new()
    })
}

/// Replaces the member list with the items grouped under `ril_cpid`.
pub(crate) fn fetch_ril_member_items(dataset_name: &str, ril_cpid: &str) {
    let endpoints = state::config().endpoints();
    let placeholder = render::ril_reloading(&endpoints.preload_image());
    dom::batch(|channel| channel.set_html(RIL_MEMBER_ITEMS_ID, &placeholder));

    let url = endpoints.ril_member_items(dataset_name, ril_cpid);
    spawn_local(async move {
        match http::get_json::<Option<Vec<RilMemberItemGroup>>>(&url).await {
            Ok(groups) => {
                let html = render::ril_member_items(groups.as_deref());
                dom::batch(|channel| channel.set_html(RIL_MEMBER_ITEMS_ID, &html));
            }
            Err(error) => {
                log::warn!("fetching member items failed: {error}");
                dom::batch(|channel| channel.set_html(REG_AUTH_STATUS_ID, RIL_MEMBERS_FAILED));
            }
        }
    });
}

fn apply_view(view: DataHolderView) {
    dom::batch(|channel| {
        if view.url_hidden {
            channel.add_class(DATA_HOLDER_URL_ID, HIDDEN_CLASS);
        } else {
            channel.remove_class(DATA_HOLDER_URL_ID, HIDDEN_CLASS);
        }
        if view.url_disabled {
            channel.disable(DATA_HOLDER_URL_ID);
        } else {
            channel.enable(DATA_HOLDER_URL_ID);
        }
        if view.file_disabled {
            channel.disable(DATA_HOLDER_FILE_ID);
        } else {
            channel.enable(DATA_HOLDER_FILE_ID);
        }
        if view.file_block_hidden {
            channel.add_class(DATA_HOLDER_FILE_BLOCK_ID, HIDDEN_CLASS);
        } else {
            channel.remove_class(DATA_HOLDER_FILE_BLOCK_ID, HIDDEN_CLASS);
        }
        if view.dynamic_fields_disabled {
            channel.disable_all(DYNAMIC_FIELDS);
        } else {
            channel.enable_all(DYNAMIC_FIELDS);
        }
    });
}

fn checked_mode() -> Option<DataHolderType> {
    let checked = dom::document()
        .ok()?
        .query_selector(&format!("{DATA_HOLDER_RADIOS}:checked"))
        .ok()??
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    DataHolderType::parse(&checked.value())
}

pub(crate) fn wire_data_holder_toggle() -> Result<(), ConsoleError> {
    let toggle = Rc::new(RefCell::new(DataHolderToggle::new(checked_mode())));
    for radio in dom::query_all(DATA_HOLDER_RADIOS)? {
        let toggle = toggle.clone();
        dom::listen(&radio, "change", move |event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(view) = toggle.borrow_mut().select(&input.value()) {
                apply_view(view);
            }
        })?;
    }
    Ok(())
}

/// Loads the members of the selected RepInfo label now and on every change.
pub(crate) fn wire_ril_cpid(dataset_name: String) -> Result<(), ConsoleError> {
    let Some(select) = dom::find::<HtmlSelectElement>(RIL_CPID_ID) else {
        return Ok(());
    };
    let initial = select.value();
    if !initial.is_empty() {
        fetch_ril_member_items(&dataset_name, &initial);
    }

    let changed = select.clone();
    dom::listen(&select, "change", move |_| {
        fetch_ril_member_items(&dataset_name, &changed.value());
    })
}

pub(crate) fn hide_flash_messages() {
    let delay = state::config().flash_message_delay_ms();
    Timeout::new(delay, || dom::batch(|channel| channel.hide_all(FLASH_MESSAGES))).forget();
}
