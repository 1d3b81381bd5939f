//! Wizard steps: a linear sequence numbered 1 to 5
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the report wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    SelectProject,
    SelectAuditType,
    SelectActivities,
    FillChecklist,
    Confirm,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::SelectProject,
        WizardStep::SelectAuditType,
        WizardStep::SelectActivities,
        WizardStep::FillChecklist,
        WizardStep::Confirm,
    ];

    /// Step number shown in the progress header (1..=5)
    pub fn number(self) -> u8 {
        match self {
            WizardStep::SelectProject => 1,
            WizardStep::SelectAuditType => 2,
            WizardStep::SelectActivities => 3,
            WizardStep::FillChecklist => 4,
            WizardStep::Confirm => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::SelectProject => "Select Project",
            WizardStep::SelectAuditType => "Select Audit Type",
            WizardStep::SelectActivities => "Select Activities",
            WizardStep::FillChecklist => "Fill Checklist",
            WizardStep::Confirm => "Submit",
        }
    }

    /// The following step, clamped at the confirmation step
    pub fn next(self) -> WizardStep {
        match self {
            WizardStep::SelectProject => WizardStep::SelectAuditType,
            WizardStep::SelectAuditType => WizardStep::SelectActivities,
            WizardStep::SelectActivities => WizardStep::FillChecklist,
            WizardStep::FillChecklist | WizardStep::Confirm => WizardStep::Confirm,
        }
    }

    /// The previous step; `None` at the first step
    pub fn prev(self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectProject => None,
            WizardStep::SelectAuditType => Some(WizardStep::SelectProject),
            WizardStep::SelectActivities => Some(WizardStep::SelectAuditType),
            WizardStep::FillChecklist => Some(WizardStep::SelectActivities),
            WizardStep::Confirm => Some(WizardStep::FillChecklist),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

/// Where the wizard told the navigation host to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// Stay in the wizard, now on this step
    Step(WizardStep),
    /// Leave the wizard (back from step 1, or after submission)
    Exit,
}
