//! Report listing: summary rows, search, and project filtering
use crate::directory::ProjectDirectory;
use crate::ReportsError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sitecheck_checklist::{Completion, NcStatus};
use sitecheck_core::SubmittedReport;
use sitecheck_store::{read_list, Loaded, StoragePort, REPORTS_KEY};

/// Load every submitted report, fail-soft on corruption.
pub fn load_reports(store: &dyn StoragePort) -> Result<Loaded<SubmittedReport>, ReportsError> {
    Ok(read_list(store, REPORTS_KEY)?)
}

/// One row of the listing table, with the aggregator re-run for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub report_id: String,
    pub project_id: String,
    pub project_name: String,
    pub audit_type: String,
    pub date: DateTime<Utc>,
    pub completion: Completion,
    pub percent: u32,
    pub nc_status: NcStatus,
}

/// Build the display row for one report.
pub fn summarize(report: &SubmittedReport, directory: &ProjectDirectory) -> ReportRow {
    let completion = Completion::for_report(report);
    ReportRow {
        report_id: report.report_id.clone(),
        project_id: report.project.clone(),
        project_name: directory.name_for(&report.project).to_string(),
        audit_type: report.audit_type.clone(),
        date: report.date,
        completion,
        percent: completion.percent(),
        nc_status: NcStatus::for_report(report),
    }
}

/// Search and project filter for the listing view; the two compose with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    /// Case-insensitive term matched against report id, project id,
    /// project name, and audit type
    pub search: Option<String>,
    /// Exact project id; `None` means all projects
    pub project: Option<String>,
}

impl ReportFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn project(project_id: impl Into<String>) -> Self {
        Self {
            project: Some(project_id.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, report: &SubmittedReport, directory: &ProjectDirectory) -> bool {
        let matches_search = match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                report.report_id.to_lowercase().contains(&term)
                    || report.project.to_lowercase().contains(&term)
                    || directory
                        .name_for(&report.project)
                        .to_lowercase()
                        .contains(&term)
                    || report.audit_type.to_lowercase().contains(&term)
            }
        };
        let matches_project = match &self.project {
            None => true,
            Some(project_id) => &report.project == project_id,
        };
        matches_search && matches_project
    }
}

/// Apply the filter, preserving stored order.
pub fn filter_reports<'a>(
    reports: &'a [SubmittedReport],
    filter: &ReportFilter,
    directory: &ProjectDirectory,
) -> Vec<&'a SubmittedReport> {
    reports
        .iter()
        .filter(|report| filter.matches(report, directory))
        .collect()
}

/// Project ids appearing in the reports, first-seen order, for the
/// filter dropdown.
pub fn distinct_projects(reports: &[SubmittedReport]) -> Vec<String> {
    let mut projects: Vec<String> = Vec::new();
    for report in reports {
        if !projects.contains(&report.project) {
            projects.push(report.project.clone());
        }
    }
    projects
}
