//! Sitecheck Wizard: the five-step report entry state machine
//!
//! `SelectProject → SelectAuditType → SelectActivities → FillChecklist →
//! Confirm`, linear. The wizard accumulates one mutable [`DraftReport`],
//! validates required fields at the step boundary, and stamps the draft
//! into a [`SubmittedReport`] on submit.
//!
//! # Example
//!
//! ```
//! use sitecheck_core::Answer;
//! use sitecheck_store::MemoryStore;
//! use sitecheck_wizard::ReportWizard;
//!
//! let mut wizard = ReportWizard::new();
//! wizard.set_project("PROJ001");
//! wizard.advance().unwrap();
//! wizard.set_audit_type("Safety Audit");
//! wizard.advance().unwrap();
//! wizard.toggle_activity("Excavation Work");
//! wizard.advance().unwrap();
//! wizard.record_answer("Excavation Work", 0, Answer::Yes);
//! wizard.advance().unwrap();
//!
//! let mut store = MemoryStore::new();
//! let report = wizard.submit(&mut store).unwrap();
//! assert!(report.report_id.starts_with("RPT-"));
//! ```

pub mod step;
pub mod wizard;

pub use step::{Nav, WizardStep};
pub use wizard::{ReportWizard, WizardError};

pub use sitecheck_core::DraftReport;
pub use sitecheck_core::SubmittedReport;
