//! Sitecheck Reports: browsing submitted reports and project records
//!
//! The read side of the system: the project directory (seed projects
//! merged with uploaded records), the validated upload flow, and the
//! listing view's summary/filter/search over persisted reports. The
//! aggregator is re-run per record on every pass; nothing here mutates
//! a submitted report.

pub mod directory;
pub mod listing;

pub use directory::{upload_project, NewProject, ProjectDirectory, ProjectEntry};
pub use listing::{
    distinct_projects, filter_reports, load_reports, summarize, ReportFilter, ReportRow,
};

use sitecheck_core::ValidationError;
use sitecheck_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportsError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Store(#[from] StoreError),
}
