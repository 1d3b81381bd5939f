//! Sitecheck Catalog: static configuration for the audit forms
//!
//! One authoritative checklist catalog (activity → ordered questions,
//! counts derived from list length), the audit type list, and the seed
//! projects.

pub mod audit_types;
pub mod projects;
pub mod questions;

pub use audit_types::{is_known_audit_type, AUDIT_TYPES};
pub use projects::{seed_project, SeedProject, SEED_PROJECTS};
pub use questions::{
    activities, expected_count, questions_for, FALLBACK_QUESTION_COUNT,
};
