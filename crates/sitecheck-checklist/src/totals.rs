//! Expected totals, answered counts, and the completion ratio
use serde::{Deserialize, Serialize};
use sitecheck_catalog::expected_count;
use sitecheck_core::{ResponseMap, SubmittedReport};
use std::fmt;

/// Total expected question count over the selected activities.
///
/// Independent of the recorded responses; unknown activities count with
/// the catalog fallback.
pub fn total_expected(activities: &[String]) -> usize {
    activities.iter().map(|a| expected_count(a)).sum()
}

/// Number of response entries whose answer is set (Yes, No, or NA).
pub fn answered_count(responses: &ResponseMap) -> usize {
    responses.values().filter(|r| r.is_answered()).count()
}

/// Completion of a checklist: answered questions out of expected ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub answered: usize,
    pub total: usize,
}

impl Completion {
    /// Compute completion for a selection of activities and its responses
    pub fn compute(activities: &[String], responses: &ResponseMap) -> Self {
        Self {
            answered: answered_count(responses),
            total: total_expected(activities),
        }
    }

    pub fn for_report(report: &SubmittedReport) -> Self {
        Self::compute(&report.activities, &report.responses)
    }

    /// Rounded completion percentage; 0 when nothing is expected
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.answered as f64 * 100.0) / self.total as f64).round() as u32
    }

    pub fn is_complete(self) -> bool {
        self.answered >= self.total
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.answered, self.total)
    }
}
