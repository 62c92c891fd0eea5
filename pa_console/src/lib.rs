//! Core of the Preservation Assistant console.
//!
//! Everything the console decides lives here so it can be exercised without a
//! browser: the wire types exchanged with the server, the request URLs, the
//! HTML fragments written into the page, the data-holder mode toggle and the
//! job-details dialog with its reload timer. The `pa_console_wasm` crate only
//! reads the page, performs the round trips and applies these decisions.

pub mod config;
pub mod data_holder;
pub mod endpoints;
pub mod error;
pub mod job_details;
pub mod model;
pub mod render;
pub mod user_active;

pub use config::ConsoleConfig;
pub use data_holder::{DataHolderToggle, DataHolderType, DataHolderView};
pub use endpoints::Endpoints;
pub use error::{ConsoleError, Result};
pub use job_details::{JobDetailsDialog, JobDetailsTable, Scheduler};
pub use model::{
    Cpid, JobDetailRow, JobDetails, ManifestFile, MemberItem, Preservable, PreservedObject,
    RegistryAuthStatus, RegistryCredentials, RegistryObjectType, RilMemberItemGroup,
};
pub use render::{AuthStatusView, JobStatus};
pub use user_active::{EditActive, EditActiveOutcome, MessageFade, PendingFade};
