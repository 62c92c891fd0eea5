//! The job-details dialog: a paged table of one preservation run that reloads
//! itself on a fixed period for as long as the dialog is open.

use std::time::Duration;

use maud::html;

use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::model::{JobDetailRow, JobDetails};
use crate::render::job_detail_cells;

pub const EMPTY_TABLE: &str = "No data available in table";

/// Starts repeating timers. Dropping the returned timer cancels it.
pub trait Scheduler {
    type Timer;

    fn start(&mut self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Timer;
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailsTable {
    rows: Vec<JobDetailRow>,
    page: usize,
    page_size: usize,
    processing: bool,
    completed: Option<u32>,
}

impl JobDetailsTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            page: 0,
            page_size: page_size.max(1),
            processing: false,
            completed: None,
        }
    }

    pub fn rows(&self) -> &[JobDetailRow] {
        &self.rows
    }

    pub fn processing(&self) -> bool {
        self.processing
    }

    /// "n of m items completed", when the server reported a count.
    pub fn completed_summary(&self) -> Option<String> {
        self.completed
            .map(|completed| format!("{completed} of {} items completed", self.rows.len()))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn page_rows(&self) -> &[JobDetailRow] {
        let start = (self.page * self.page_size).min(self.rows.len());
        let end = (start + self.page_size).min(self.rows.len());
        &self.rows[start..end]
    }

    /// A reload replaces every row and returns to the first page.
    pub fn replace(&mut self, details: JobDetails) {
        self.rows = details.data;
        self.completed = details.completed;
        self.page = 0;
        self.processing = false;
    }

    pub fn body_html(&self, preload_image: &str) -> String {
        html! {
            @if self.rows.is_empty() {
                tr { td colspan="4" { (EMPTY_TABLE) } }
            } @else {
                @for row in self.page_rows() {
                    tr {
                        @for cell in job_detail_cells(row, preload_image) {
                            td { (cell) }
                        }
                    }
                }
            }
        }
        .into_string()
    }

    pub fn info(&self) -> String {
        let total = self.rows.len();
        if total == 0 {
            return "Showing 0 to 0 of 0 entries".to_string();
        }
        let first = self.page * self.page_size + 1;
        let last = first - 1 + self.page_rows().len();
        format!("Showing {first} to {last} of {total} entries")
    }
}

/// State of an open dialog. Owns the reload timer; dropping the session stops it.
struct JobSession<T> {
    dataset_name: String,
    generation: u64,
    table: JobDetailsTable,
    _timer: T,
}

pub struct JobDetailsDialog<S: Scheduler> {
    scheduler: S,
    reload_period: Duration,
    page_size: usize,
    session: Option<JobSession<S::Timer>>,
    generations: u64,
}

impl<S: Scheduler> JobDetailsDialog<S> {
    pub fn new(scheduler: S, config: &ConsoleConfig) -> Self {
        Self {
            scheduler,
            reload_period: config.reload_period,
            page_size: config.page_size,
            session: None,
            generations: 0,
        }
    }

    pub fn table(&self) -> Option<&JobDetailsTable> {
        self.session.as_ref().map(|session| &session.table)
    }

    /// Opens the dialog for `dataset_name` and starts its reload timer.
    ///
    /// Any session still open is closed first, so at most one timer runs.
    /// `show` puts the dialog on screen; if it fails no session is created
    /// and no timer is started. `tick` receives the generation of the
    /// session it belongs to.
    pub fn open(
        &mut self,
        dataset_name: impl Into<String>,
        show: impl FnOnce() -> Result<()>,
        mut tick: impl FnMut(u64) + 'static,
    ) -> Result<u64> {
        self.close();
        show()?;

        self.generations += 1;
        let generation = self.generations;
        let timer = self
            .scheduler
            .start(self.reload_period, Box::new(move || tick(generation)));

        let mut table = JobDetailsTable::new(self.page_size);
        table.processing = true;
        self.session = Some(JobSession {
            dataset_name: dataset_name.into(),
            generation,
            table,
            _timer: timer,
        });
        log::debug!("job details dialog opened (generation {generation})");
        Ok(generation)
    }

    /// Destroys the table and cancels the reload timer.
    pub fn close(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                log::debug!(
                    "job details dialog closed (generation {})",
                    session.generation
                );
                true
            }
            None => false,
        }
    }

    fn current_mut(&mut self, generation: u64) -> Option<&mut JobSession<S::Timer>> {
        self.session
            .as_mut()
            .filter(|session| session.generation == generation)
    }

    /// Marks a reload as in flight; returns the dataset to fetch, if the
    /// session is still the open one.
    pub fn begin_reload(&mut self, generation: u64) -> Option<String> {
        let session = self.current_mut(generation)?;
        session.table.processing = true;
        Some(session.dataset_name.clone())
    }

    /// Applies a reload result. Results for a closed or replaced session are
    /// dropped; a failed reload keeps the rows already shown.
    pub fn apply_reload(
        &mut self,
        generation: u64,
        result: Result<JobDetails>,
    ) -> bool {
        let Some(session) = self.current_mut(generation) else {
            log::debug!("discarding job details for stale generation {generation}");
            return false;
        };
        match result {
            Ok(details) => session.table.replace(details),
            Err(error) => {
                session.table.processing = false;
                log::warn!(
                    "job details reload for {} failed: {error}",
                    session.dataset_name
                );
            }
        }
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.table.next_page())
    }

    pub fn previous_page(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.table.previous_page())
    }
}
