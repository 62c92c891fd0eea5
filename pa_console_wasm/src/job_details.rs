//! Job-details dialog: opens a paged listing of one preservation run and
//! reloads it every few seconds until the dialog is closed.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use gloo_timers::callback::Interval;
use pa_console::config::millis;
use pa_console::{ConsoleError, JobDetails, JobDetailsDialog, Scheduler};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlDialogElement};

use crate::{dom, http, ids::*, state};

/// Browser intervals; dropping one clears it.
pub(crate) struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Timer = Interval;

    fn start(&mut self, period: Duration, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(millis(period), tick)
    }
}

thread_local! {
    static DIALOG: RefCell<Option<JobDetailsDialog<IntervalScheduler>>> = const { RefCell::new(None) };
    static CLOSE_WIRED: Cell<bool> = const { Cell::new(false) };
}

fn with_dialog<R>(f: impl FnOnce(&mut JobDetailsDialog<IntervalScheduler>) -> R) -> R {
    DIALOG.with(|dialog| {
        let mut dialog = dialog.borrow_mut();
        let dialog = dialog
            .get_or_insert_with(|| JobDetailsDialog::new(IntervalScheduler, &state::config()));
        f(dialog)
    })
}

struct TableView {
    body: String,
    info: String,
    completed: String,
    processing: bool,
    has_previous: bool,
    has_next: bool,
}

fn render_table() {
    let preload = state::config().endpoints().preload_image();
    let view = with_dialog(|dialog| {
        dialog.table().map(|table| TableView {
            body: table.body_html(&preload),
            info: table.info(),
            completed: table.completed_summary().unwrap_or_default(),
            processing: table.processing(),
            has_previous: table.has_previous(),
            has_next: table.has_next(),
        })
    });

    dom::batch(|channel| match view {
        Some(view) => {
            channel.set_html(JOB_DETAILS_BODY_ID, &view.body);
            channel.set_text(JOB_DETAILS_INFO_ID, &view.info);
            channel.set_text(JOB_DETAILS_COMPLETED_ID, &view.completed);
            if view.processing {
                channel.remove_class(JOB_DETAILS_PROCESSING_ID, HIDDEN_CLASS);
            } else {
                channel.add_class(JOB_DETAILS_PROCESSING_ID, HIDDEN_CLASS);
            }
            if view.has_previous {
                channel.enable(JOB_DETAILS_PREV_ID);
            } else {
                channel.disable(JOB_DETAILS_PREV_ID);
            }
            if view.has_next {
                channel.enable(JOB_DETAILS_NEXT_ID);
            } else {
                channel.disable(JOB_DETAILS_NEXT_ID);
            }
        }
        None => {
            channel.set_html(JOB_DETAILS_BODY_ID, "");
            channel.set_text(JOB_DETAILS_INFO_ID, "");
            channel.set_text(JOB_DETAILS_COMPLETED_ID, "");
            channel.add_class(JOB_DETAILS_PROCESSING_ID, HIDDEN_CLASS);
        }
    });
}

fn reload(generation: u64) {
    let Some(dataset_name) = with_dialog(|dialog| dialog.begin_reload(generation)) else {
        return;
    };
    render_table();

    let url = state::config().endpoints().job_details(&dataset_name);
    spawn_local(async move {
        let result = http::get_json::<JobDetails>(&url).await;
        if with_dialog(|dialog| dialog.apply_reload(generation, result)) {
            render_table();
        }
    });
}

/// Shows the job details of `dataset_name` and starts the periodic reload.
///
/// The reload timer only starts once the dialog is on screen with its close
/// listener attached, so every timer has a `close` event that stops it.
pub(crate) fn view_job_details(
    dataset_name: String,
    registry_uid: String,
) -> Result<(), ConsoleError> {
    let element: HtmlDialogElement = dom::by_id(JOB_DETAILS_DIALOG_ID)?;
    wire_close(&element)?;

    dom::batch(|channel| {
        channel.set_text(JOB_DETAILS_JOB_NAME_ID, &dataset_name);
        channel.set_text(JOB_DETAILS_REG_NAME_ID, &registry_uid);
    });

    let show = || {
        if element.open() {
            return Ok(());
        }
        element
            .show_modal()
            .map_err(|_| ConsoleError::Dom("failed to open the job details dialog".to_string()))
    };
    let opened = with_dialog(|dialog| dialog.open(dataset_name, show, reload));
    render_table();
    reload(opened?);
    Ok(())
}

/// Closing the dialog destroys the table and stops its reload timer.
/// Attached at most once per page.
fn wire_close(element: &HtmlDialogElement) -> Result<(), ConsoleError> {
    if CLOSE_WIRED.get() {
        return Ok(());
    }
    dom::listen(element, "close", |_| {
        with_dialog(|dialog| dialog.close());
        render_table();
    })?;
    CLOSE_WIRED.set(true);
    Ok(())
}

pub(crate) fn wire_dialog() -> Result<(), ConsoleError> {
    let dialog: HtmlDialogElement = dom::by_id(JOB_DETAILS_DIALOG_ID)?;
    wire_close(&dialog)?;

    if let Some(previous) = dom::find::<Element>(JOB_DETAILS_PREV_ID) {
        dom::listen(&previous, "click", |_| {
            if with_dialog(|dialog| dialog.previous_page()) {
                render_table();
            }
        })?;
    }
    if let Some(next) = dom::find::<Element>(JOB_DETAILS_NEXT_ID) {
        dom::listen(&next, "click", |_| {
            if with_dialog(|dialog| dialog.next_page()) {
                render_table();
            }
        })?;
    }
    Ok(())
}
