//! Sitecheck Core: data model, sessions, and validation errors
//!
//! The record types shared by the wizard, the aggregator, and the
//! persistence layer.

pub mod data_model;
pub mod error;
pub mod session;

pub use data_model::{
    Answer, Closure, DraftReport, ProjectRecord, ReportStatus, Response, ResponseKey, ResponseMap,
    SubmittedReport,
};
pub use error::ValidationError;
pub use session::Session;

/// Version of the sitecheck engine
pub const SITECHECK_VERSION: &str = "1.0.0";
