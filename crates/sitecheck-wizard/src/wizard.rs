//! The report wizard: accumulates one draft across the five steps
use crate::step::{Nav, WizardStep};
use chrono::Utc;
use sitecheck_core::{
    Answer, Closure, DraftReport, Response, ResponseKey, SubmittedReport, ValidationError,
};
use sitecheck_store::{append, StoragePort, StoreError, REPORTS_KEY};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Drives one report-entry session from project selection to submission.
///
/// Owns the mutable draft; the form layer collects field values and
/// calls the setters, the navigation host reacts to [`Nav`] signals.
#[derive(Debug, Clone, Default)]
pub struct ReportWizard {
    step: WizardStep,
    draft: DraftReport,
}

impl ReportWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &DraftReport {
        &self.draft
    }

    // === Field setters (last-write-wins) ===

    pub fn set_project(&mut self, project: impl Into<String>) {
        self.draft.project = project.into();
    }

    pub fn set_audit_type(&mut self, audit_type: impl Into<String>) {
        self.draft.audit_type = audit_type.into();
    }

    pub fn set_activities(&mut self, activities: Vec<String>) {
        self.draft.activities = activities;
    }

    pub fn toggle_activity(&mut self, activity: &str) {
        self.draft.toggle_activity(activity);
    }

    /// Record the answer radio for one question
    pub fn record_answer(&mut self, activity: &str, question_index: usize, answer: Answer) {
        self.draft.record_answer(activity, question_index, answer);
    }

    /// Replace one response wholesale
    pub fn set_response(&mut self, key: ResponseKey, response: Response) {
        self.draft.set_response(key, response);
    }

    /// Set the NC statement; ignored (returns false) unless the answer is No
    pub fn set_nc_statement(
        &mut self,
        activity: &str,
        question_index: usize,
        text: impl Into<String>,
    ) -> bool {
        self.with_response(activity, question_index, |r| r.set_nc_statement(text))
    }

    /// Set the closure state; ignored unless the answer is No
    pub fn set_closure(&mut self, activity: &str, question_index: usize, closure: Closure) -> bool {
        self.with_response(activity, question_index, |r| r.set_closure(closure))
    }

    /// Attach the compliance photo reference; ignored unless the answer is Yes
    pub fn set_compliance_photo(
        &mut self,
        activity: &str,
        question_index: usize,
        photo: impl Into<String>,
    ) -> bool {
        self.with_response(activity, question_index, |r| r.set_compliance_photo(photo))
    }

    /// Attach the NC photo reference; ignored unless the answer is No
    pub fn set_nc_photo(
        &mut self,
        activity: &str,
        question_index: usize,
        photo: impl Into<String>,
    ) -> bool {
        self.with_response(activity, question_index, |r| r.set_nc_photo(photo))
    }

    fn with_response(
        &mut self,
        activity: &str,
        question_index: usize,
        apply: impl FnOnce(&mut Response) -> bool,
    ) -> bool {
        let applied = self
            .draft
            .response_mut(activity, question_index)
            .map(apply)
            .unwrap_or(false);
        if !applied {
            tracing::warn!(
                activity,
                question_index,
                "response detail ignored: answer state does not accept it"
            );
        }
        applied
    }

    // === Step transitions ===

    /// Move to the next step after validating the current one.
    pub fn advance(&mut self) -> Result<WizardStep, ValidationError> {
        self.validate_step(self.step)?;
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Move back one step, or signal the host to leave at step 1.
    pub fn retreat(&mut self) -> Nav {
        match self.step.prev() {
            Some(step) => {
                self.step = step;
                Nav::Step(step)
            }
            None => Nav::Exit,
        }
    }

    fn validate_step(&self, step: WizardStep) -> Result<(), ValidationError> {
        match step {
            WizardStep::SelectProject if self.draft.project.is_empty() => {
                Err(ValidationError::MissingProject)
            }
            WizardStep::SelectAuditType if self.draft.audit_type.is_empty() => {
                Err(ValidationError::MissingAuditType)
            }
            WizardStep::SelectActivities if self.draft.activities.is_empty() => {
                Err(ValidationError::EmptyActivitySet)
            }
            _ => Ok(()),
        }
    }

    /// Re-check every required field, independent of the current step.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for step in WizardStep::ALL {
            self.validate_step(step)?;
        }
        Ok(())
    }

    /// Acknowledge a draft save: returns a display snapshot, no data effect.
    pub fn save_draft(&self) -> DraftReport {
        self.draft.clone()
    }

    /// Finalize the draft and append it to the persisted report list.
    ///
    /// Stamps `RPT-<epoch millis>` and the submission timestamp, appends
    /// read-whole/push/write-whole, and returns the submitted record; the
    /// host leaves the wizard on success. A storage failure surfaces as
    /// an error, it never drops the submission silently.
    pub fn submit(&mut self, store: &mut dyn StoragePort) -> Result<SubmittedReport, WizardError> {
        self.validate()?;

        let now = Utc::now();
        let report_id = format!("RPT-{}", now.timestamp_millis());
        let report = SubmittedReport::new(self.draft.clone(), report_id, now);

        append(store, REPORTS_KEY, &report)?;
        tracing::info!(
            report_id = %report.report_id,
            project = %report.project,
            audit_type = %report.audit_type,
            "audit report submitted"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecheck_store::MemoryStore;

    fn wizard_at_checklist() -> ReportWizard {
        let mut wizard = ReportWizard::new();
        wizard.set_project("PROJ001");
        wizard.advance().unwrap();
        wizard.set_audit_type("Safety Audit");
        wizard.advance().unwrap();
        wizard.toggle_activity("Excavation Work");
        wizard.advance().unwrap();
        wizard
    }

    #[test]
    fn test_advance_requires_project() {
        let mut wizard = ReportWizard::new();
        assert_eq!(wizard.advance(), Err(ValidationError::MissingProject));

        wizard.set_project("PROJ001");
        assert_eq!(wizard.advance(), Ok(WizardStep::SelectAuditType));
    }

    #[test]
    fn test_advance_requires_audit_type_and_activities() {
        let mut wizard = ReportWizard::new();
        wizard.set_project("PROJ001");
        wizard.advance().unwrap();
        assert_eq!(wizard.advance(), Err(ValidationError::MissingAuditType));

        wizard.set_audit_type("EHS Audit");
        wizard.advance().unwrap();
        assert_eq!(wizard.advance(), Err(ValidationError::EmptyActivitySet));

        wizard.toggle_activity("Scaffolding");
        assert_eq!(wizard.advance(), Ok(WizardStep::FillChecklist));
    }

    #[test]
    fn test_advance_clamps_at_confirm() {
        let mut wizard = wizard_at_checklist();
        assert_eq!(wizard.advance(), Ok(WizardStep::Confirm));
        assert_eq!(wizard.advance(), Ok(WizardStep::Confirm));
    }

    #[test]
    fn test_retreat_exits_at_first_step() {
        let mut wizard = ReportWizard::new();
        assert_eq!(wizard.retreat(), Nav::Exit);

        wizard.set_project("PROJ001");
        wizard.advance().unwrap();
        assert_eq!(wizard.retreat(), Nav::Step(WizardStep::SelectProject));
        assert_eq!(wizard.retreat(), Nav::Exit);
    }

    #[test]
    fn test_project_can_change_after_going_back() {
        let mut wizard = ReportWizard::new();
        wizard.set_project("PROJ001");
        wizard.advance().unwrap();
        wizard.retreat();
        wizard.set_project("PROJ002");
        assert_eq!(wizard.draft().project, "PROJ002");
    }

    #[test]
    fn test_nc_details_require_no_answer() {
        let mut wizard = wizard_at_checklist();
        // No response recorded yet
        assert!(!wizard.set_nc_statement("Excavation Work", 0, "No permit at site"));

        wizard.record_answer("Excavation Work", 0, Answer::Yes);
        assert!(!wizard.set_nc_statement("Excavation Work", 0, "No permit at site"));

        wizard.record_answer("Excavation Work", 0, Answer::No);
        assert!(wizard.set_nc_statement("Excavation Work", 0, "No permit at site"));
        assert!(wizard.set_closure("Excavation Work", 0, Closure::closed("Permit obtained")));
    }

    #[test]
    fn test_save_draft_has_no_data_effect() {
        let mut wizard = wizard_at_checklist();
        wizard.record_answer("Excavation Work", 0, Answer::Yes);

        let snapshot = wizard.save_draft();
        assert_eq!(&snapshot, wizard.draft());
    }

    #[test]
    fn test_submit_rejects_incomplete_draft() {
        let mut wizard = ReportWizard::new();
        wizard.set_project("PROJ001");
        let mut store = MemoryStore::new();
        assert!(matches!(
            wizard.submit(&mut store),
            Err(WizardError::Validation(ValidationError::MissingAuditType))
        ));
    }
}
