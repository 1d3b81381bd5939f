//! Unified validation error model
use thiserror::Error;

/// Validation errors raised at the wizard, login, and upload boundaries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("VALIDATION/NO_PROJECT: a project must be selected")]
    MissingProject,

    #[error("VALIDATION/NO_AUDIT_TYPE: an audit type must be selected")]
    MissingAuditType,

    #[error("VALIDATION/NO_ACTIVITIES: at least one activity must be selected")]
    EmptyActivitySet,

    #[error("VALIDATION/EMPTY_CREDENTIALS: identifier and password must be non-empty")]
    EmptyCredentials,

    #[error("VALIDATION/TERMS: terms and conditions must be accepted")]
    TermsNotAccepted,

    #[error("VALIDATION/MISSING_FIELD: {0} is required")]
    MissingField(&'static str),

    #[error("VALIDATION/RESPONSE_KEY: {0}")]
    BadResponseKey(String),
}
