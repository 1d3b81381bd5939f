//! NC status classification
//!
//! Pending / All Clear / NC Open, derived from a report's responses the
//! same way on every render or filter pass.

use crate::totals::Completion;
use serde::{Deserialize, Serialize};
use sitecheck_core::{ResponseMap, SubmittedReport};
use std::fmt;

/// The non-conformance status of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NcStatus {
    /// Not every expected question has been answered
    Pending,

    /// All questions answered and no open non-conformance
    Clear,

    /// All questions answered, at least one NC without closure
    NcOpen,
}

impl NcStatus {
    /// Classify a selection of activities and its responses.
    ///
    /// Completion is checked first: an incomplete checklist is `Pending`
    /// regardless of its NC content.
    pub fn classify(activities: &[String], responses: &ResponseMap) -> NcStatus {
        if !Completion::compute(activities, responses).is_complete() {
            return NcStatus::Pending;
        }
        let nc_open = responses.values().filter(|r| r.is_nc_open()).count();
        if nc_open > 0 {
            NcStatus::NcOpen
        } else {
            NcStatus::Clear
        }
    }

    pub fn for_report(report: &SubmittedReport) -> NcStatus {
        Self::classify(&report.activities, &report.responses)
    }

    pub fn is_pending(self) -> bool {
        matches!(self, NcStatus::Pending)
    }

    pub fn is_clear(self) -> bool {
        matches!(self, NcStatus::Clear)
    }

    pub fn is_nc_open(self) -> bool {
        matches!(self, NcStatus::NcOpen)
    }
}

impl fmt::Display for NcStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NcStatus::Pending => write!(f, "Pending"),
            NcStatus::Clear => write!(f, "All Clear"),
            NcStatus::NcOpen => write!(f, "NC Open"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecheck_core::{Closure, Response, ResponseKey};

    fn all_yes(activity: &str, count: usize) -> ResponseMap {
        let mut responses = ResponseMap::new();
        for index in 0..count {
            responses.insert(ResponseKey::new(activity, index), Response::conforming());
        }
        responses
    }

    #[test]
    fn test_incomplete_is_pending_regardless_of_findings() {
        let activities = vec!["Excavation Work".to_string()];
        let mut responses = ResponseMap::new();
        let mut finding = Response::non_conforming();
        finding.set_closure(Closure::open("Install barricades", None));
        responses.insert(ResponseKey::new("Excavation Work", 0), finding);

        assert_eq!(
            NcStatus::classify(&activities, &responses),
            NcStatus::Pending
        );
    }

    #[test]
    fn test_all_answered_no_findings_is_clear() {
        let activities = vec!["Excavation Work".to_string()];
        let responses = all_yes("Excavation Work", 8);
        assert_eq!(NcStatus::classify(&activities, &responses), NcStatus::Clear);
    }

    #[test]
    fn test_open_finding_sets_nc_open() {
        let activities = vec!["Scaffolding".to_string()];
        let mut responses = all_yes("Scaffolding", 10);
        let mut finding = Response::non_conforming();
        finding.set_closure(Closure::open("Fit toe boards", None));
        responses.insert(ResponseKey::new("Scaffolding", 1), finding);

        assert_eq!(
            NcStatus::classify(&activities, &responses),
            NcStatus::NcOpen
        );
    }

    #[test]
    fn test_closed_finding_is_clear() {
        let activities = vec!["Scaffolding".to_string()];
        let mut responses = all_yes("Scaffolding", 10);
        let mut finding = Response::non_conforming();
        finding.set_closure(Closure::closed("Toe boards fitted"));
        responses.insert(ResponseKey::new("Scaffolding", 1), finding);

        assert_eq!(NcStatus::classify(&activities, &responses), NcStatus::Clear);
    }

    #[test]
    fn test_undecided_closure_is_not_open() {
        // Answer = No with the closure question unanswered counts as a
        // finding but not an open one
        let activities = vec!["Scaffolding".to_string()];
        let mut responses = all_yes("Scaffolding", 10);
        responses.insert(
            ResponseKey::new("Scaffolding", 1),
            Response::non_conforming(),
        );

        assert_eq!(NcStatus::classify(&activities, &responses), NcStatus::Clear);
    }

    #[test]
    fn test_empty_selection_classifies_clear() {
        assert_eq!(NcStatus::classify(&[], &ResponseMap::new()), NcStatus::Clear);
    }

    #[test]
    fn test_wire_format_and_display() {
        assert_eq!(
            serde_json::to_string(&NcStatus::NcOpen).unwrap(),
            "\"nc_open\""
        );
        assert_eq!(
            serde_json::to_string(&NcStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(NcStatus::Clear.to_string(), "All Clear");
        assert_eq!(NcStatus::NcOpen.to_string(), "NC Open");
    }
}
