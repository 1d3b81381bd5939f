//! Per-category response counts for summary views
use serde::{Deserialize, Serialize};
use sitecheck_core::{Answer, ResponseMap, SubmittedReport};

/// Counts of responses by category.
///
/// `conforming + non_conforming` can be less than the answered count:
/// NA answers count as answered but fall in neither bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    /// Answer = Yes
    pub conforming: usize,
    /// Answer = No
    pub non_conforming: usize,
    /// Answer = NA
    pub not_applicable: usize,
    /// Answer = No with closure available
    pub nc_closed: usize,
    /// Answer = No without closure available
    pub nc_open: usize,
}

impl ReportStats {
    /// Tally the responses of one checklist
    pub fn tally(responses: &ResponseMap) -> Self {
        let mut stats = ReportStats::default();
        for response in responses.values() {
            if response.is_conforming() {
                stats.conforming += 1;
            }
            if response.is_non_conforming() {
                stats.non_conforming += 1;
            }
            if response.answer() == Some(Answer::Na) {
                stats.not_applicable += 1;
            }
            if response.is_nc_closed() {
                stats.nc_closed += 1;
            }
            if response.is_nc_open() {
                stats.nc_open += 1;
            }
        }
        stats
    }

    pub fn for_report(report: &SubmittedReport) -> Self {
        Self::tally(&report.responses)
    }

    /// Whether the report has any audit finding
    pub fn has_findings(&self) -> bool {
        self.non_conforming > 0
    }
}
