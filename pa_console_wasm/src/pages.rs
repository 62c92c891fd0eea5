//! Entry points called by the console's page templates.

use pa_console::ConsoleError;
use wasm_bindgen::prelude::*;

use crate::{edit_item, job_details, registry, users};

fn run(step: &str, setup: impl FnOnce() -> Result<(), ConsoleError>) {
    if let Err(error) = setup() {
        log::error!("{step}: {error}");
    }
}

/// Data set preservation page.
#[wasm_bindgen(js_name = readyPreserveDS)]
pub fn ready_preserve_ds() {
    run("credentials form", registry::wire_credentials_form);
    run("job details dialog", job_details::wire_dialog);
    run("registry selector", registry::wire_registry_select);
}

/// Data set item edit page.
#[wasm_bindgen(js_name = readyEditDSItem)]
pub fn ready_edit_ds_item() {
    run("member items", || edit_item::wire_ril_cpid(edit_item::dataset_name()));
    run("data holder toggle", edit_item::wire_data_holder_toggle);
    edit_item::hide_flash_messages();
}

#[wasm_bindgen(js_name = readyUserManagement)]
pub fn ready_user_management() {
    run("active toggles", users::wire_active_checkboxes);
}

/// The data set home page has nothing to wire.
#[wasm_bindgen(js_name = readyDatasetHome)]
pub fn ready_dataset_home() {}

#[wasm_bindgen(js_name = checkRegAccess)]
pub fn check_reg_access(registry_uid: String) {
    registry::check_reg_access(registry_uid);
}

#[wasm_bindgen(js_name = addCreds)]
pub fn add_creds(registry_uid: String) {
    run("credentials dialog", || registry::add_creds(&registry_uid));
}

#[wasm_bindgen(js_name = viewJobDetails)]
pub fn view_job_details(dataset_name: String, registry_uid: String) {
    run("job details", || {
        job_details::view_job_details(dataset_name, registry_uid)
    });
}

#[wasm_bindgen(js_name = fetchRILMemberItemsByCPID)]
pub fn fetch_ril_member_items_by_cpid(ril_cpid: String) {
    edit_item::fetch_ril_member_items(&edit_item::dataset_name(), &ril_cpid);
}
