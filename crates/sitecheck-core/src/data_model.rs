//! Data Model: checklist responses, draft and submitted reports, project records
use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// An answer to a single checklist question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
    #[serde(rename = "NA")]
    Na,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Answer::Yes => write!(f, "Yes"),
            Answer::No => write!(f, "No"),
            Answer::Na => write!(f, "NA"),
        }
    }
}

/// Remediation status of a non-conformance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Closure {
    /// Closure is available; the finding was addressed on the spot.
    Closed {
        #[serde(skip_serializing_if = "Option::is_none")]
        action: Option<String>,
    },

    /// Closure is not available; an action is expected later.
    Open {
        #[serde(skip_serializing_if = "Option::is_none")]
        expected_action: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expected_date: Option<NaiveDate>,
    },
}

impl Closure {
    /// Create a closed closure with the action that was taken
    pub fn closed(action: impl Into<String>) -> Self {
        Closure::Closed {
            action: Some(action.into()),
        }
    }

    /// Create an open closure with the expected remediation
    pub fn open(expected_action: impl Into<String>, expected_date: Option<NaiveDate>) -> Self {
        Closure::Open {
            expected_action: Some(expected_action.into()),
            expected_date,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Closure::Closed { .. })
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Closure::Open { .. })
    }
}

/// The recorded state of one checklist question.
///
/// Fields that only make sense for a given answer live inside that
/// variant, so switching the answer drops them instead of leaving
/// stale values behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// The question has not been answered yet
    #[default]
    Unanswered,

    /// Answer = Yes
    Conforming {
        #[serde(skip_serializing_if = "Option::is_none")]
        compliance_photo: Option<String>,
    },

    /// Answer = NA
    NotApplicable,

    /// Answer = No; an audit finding
    NonConforming {
        #[serde(skip_serializing_if = "Option::is_none")]
        nc_statement: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        nc_photo: Option<String>,
        /// `None` while the closure question itself is unanswered
        #[serde(skip_serializing_if = "Option::is_none")]
        closure: Option<Closure>,
    },
}

impl Response {
    /// Create a conforming response with no photo yet
    pub fn conforming() -> Self {
        Response::Conforming {
            compliance_photo: None,
        }
    }

    /// Create a non-conforming response with no details yet
    pub fn non_conforming() -> Self {
        Response::NonConforming {
            nc_statement: None,
            nc_photo: None,
            closure: None,
        }
    }

    /// The answer recorded in this response, if any
    pub fn answer(&self) -> Option<Answer> {
        match self {
            Response::Unanswered => None,
            Response::Conforming { .. } => Some(Answer::Yes),
            Response::NotApplicable => Some(Answer::Na),
            Response::NonConforming { .. } => Some(Answer::No),
        }
    }

    pub fn is_answered(&self) -> bool {
        self.answer().is_some()
    }

    pub fn is_conforming(&self) -> bool {
        matches!(self, Response::Conforming { .. })
    }

    pub fn is_non_conforming(&self) -> bool {
        matches!(self, Response::NonConforming { .. })
    }

    /// Non-conformance with closure available (addressed finding)
    pub fn is_nc_closed(&self) -> bool {
        matches!(
            self,
            Response::NonConforming {
                closure: Some(Closure::Closed { .. }),
                ..
            }
        )
    }

    /// Non-conformance with no closure available (outstanding finding)
    pub fn is_nc_open(&self) -> bool {
        matches!(
            self,
            Response::NonConforming {
                closure: Some(Closure::Open { .. }),
                ..
            }
        )
    }

    /// Apply a new answer.
    ///
    /// Keeps the current details when the answer kind is unchanged;
    /// otherwise replaces the response with a fresh variant, clearing
    /// every field that belonged to the previous answer.
    pub fn with_answer(self, answer: Answer) -> Response {
        match (answer, &self) {
            (Answer::Yes, Response::Conforming { .. }) => self,
            (Answer::No, Response::NonConforming { .. }) => self,
            (Answer::Na, Response::NotApplicable) => self,
            (Answer::Yes, _) => Response::conforming(),
            (Answer::No, _) => Response::non_conforming(),
            (Answer::Na, _) => Response::NotApplicable,
        }
    }

    /// Set the NC statement; returns false unless the answer is No
    pub fn set_nc_statement(&mut self, text: impl Into<String>) -> bool {
        match self {
            Response::NonConforming { nc_statement, .. } => {
                *nc_statement = Some(text.into());
                true
            }
            _ => false,
        }
    }

    /// Set the NC photo reference; returns false unless the answer is No
    pub fn set_nc_photo(&mut self, photo: impl Into<String>) -> bool {
        match self {
            Response::NonConforming { nc_photo, .. } => {
                *nc_photo = Some(photo.into());
                true
            }
            _ => false,
        }
    }

    /// Set the closure state; returns false unless the answer is No
    pub fn set_closure(&mut self, state: Closure) -> bool {
        match self {
            Response::NonConforming { closure, .. } => {
                *closure = Some(state);
                true
            }
            _ => false,
        }
    }

    /// Set the compliance photo reference; returns false unless the answer is Yes
    pub fn set_compliance_photo(&mut self, photo: impl Into<String>) -> bool {
        match self {
            Response::Conforming { compliance_photo } => {
                *compliance_photo = Some(photo.into());
                true
            }
            _ => false,
        }
    }
}

/// Identifies one question within one activity's checklist.
///
/// Serialized as the legacy `"<activity>-<index>"` string so persisted
/// reports keep the wire shape of the stored JSON; the index is taken
/// from the last `-`, which keeps activity names containing dashes safe.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResponseKey {
    pub activity: String,
    pub question_index: usize,
}

impl ResponseKey {
    pub fn new(activity: impl Into<String>, question_index: usize) -> Self {
        Self {
            activity: activity.into(),
            question_index,
        }
    }
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.activity, self.question_index)
    }
}

impl FromStr for ResponseKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (activity, index) = s
            .rsplit_once('-')
            .ok_or_else(|| ValidationError::BadResponseKey(s.to_string()))?;
        let question_index = index
            .parse()
            .map_err(|_| ValidationError::BadResponseKey(s.to_string()))?;
        Ok(Self {
            activity: activity.to_string(),
            question_index,
        })
    }
}

impl Serialize for ResponseKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResponseKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Sparse map of the questions the user has interacted with.
pub type ResponseMap = BTreeMap<ResponseKey, Response>;

/// The in-progress report built across wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftReport {
    pub project: String,
    pub audit_type: String,
    pub activities: Vec<String>,
    pub responses: ResponseMap,
}

impl DraftReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_activity(&self, activity: &str) -> bool {
        self.activities.iter().any(|a| a == activity)
    }

    /// Add or remove an activity; insertion order is preserved for display
    pub fn toggle_activity(&mut self, activity: &str) {
        if let Some(pos) = self.activities.iter().position(|a| a == activity) {
            self.activities.remove(pos);
        } else {
            self.activities.push(activity.to_string());
        }
    }

    /// Record an answer for one question, replacing the variant when the
    /// answer kind changes
    pub fn record_answer(&mut self, activity: &str, question_index: usize, answer: Answer) {
        let key = ResponseKey::new(activity, question_index);
        let current = self.responses.remove(&key).unwrap_or_default();
        self.responses.insert(key, current.with_answer(answer));
    }

    /// Replace one response wholesale (last-write-wins)
    pub fn set_response(&mut self, key: ResponseKey, response: Response) {
        self.responses.insert(key, response);
    }

    pub fn response(&self, activity: &str, question_index: usize) -> Option<&Response> {
        self.responses
            .get(&ResponseKey::new(activity, question_index))
    }

    pub fn response_mut(&mut self, activity: &str, question_index: usize) -> Option<&mut Response> {
        self.responses
            .get_mut(&ResponseKey::new(activity, question_index))
    }
}

/// Lifecycle status of a submitted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Submitted,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportStatus::Submitted => write!(f, "submitted"),
        }
    }
}

/// The immutable, persisted result of a completed wizard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedReport {
    pub report_id: String,
    pub project: String,
    pub audit_type: String,
    pub activities: Vec<String>,
    pub responses: ResponseMap,
    pub date: DateTime<Utc>,
    pub status: ReportStatus,
}

impl SubmittedReport {
    /// Stamp a draft into its immutable submitted form
    pub fn new(draft: DraftReport, report_id: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            report_id: report_id.into(),
            project: draft.project,
            audit_type: draft.audit_type,
            activities: draft.activities,
            responses: draft.responses,
            date,
            status: ReportStatus::Submitted,
        }
    }
}

/// An uploaded project record, persisted alongside the built-in seed projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub project_id: String,
    pub project_name: String,
    pub client_name: String,
    pub location: String,
    pub scope_of_work: String,
    pub start_date: String,
    pub end_date: String,
    pub pm_name: String,
    pub contact: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_wire_format() {
        assert_eq!(serde_json::to_string(&Answer::Yes).unwrap(), "\"Yes\"");
        assert_eq!(serde_json::to_string(&Answer::No).unwrap(), "\"No\"");
        assert_eq!(serde_json::to_string(&Answer::Na).unwrap(), "\"NA\"");
    }

    #[test]
    fn test_with_answer_keeps_details_on_same_kind() {
        let mut response = Response::non_conforming();
        response.set_nc_statement("Barricade missing at edge");
        response.set_closure(Closure::closed("Barricade installed"));

        let same = response.clone().with_answer(Answer::No);
        assert_eq!(same, response);
    }

    #[test]
    fn test_with_answer_clears_nc_details() {
        let mut response = Response::non_conforming();
        response.set_nc_statement("Barricade missing at edge");
        response.set_closure(Closure::closed("Barricade installed"));

        let switched = response.with_answer(Answer::Yes);
        assert_eq!(
            switched,
            Response::Conforming {
                compliance_photo: None
            }
        );
        assert!(!switched.is_nc_closed());
    }

    #[test]
    fn test_detail_setters_guarded_by_answer() {
        let mut response = Response::conforming();
        assert!(!response.set_nc_statement("not a finding"));
        assert!(response.set_compliance_photo("photo-001"));

        let mut response = Response::non_conforming();
        assert!(!response.set_compliance_photo("photo-001"));
        assert!(response.set_closure(Closure::open("Install guard rail", None)));
        assert!(response.is_nc_open());
    }

    #[test]
    fn test_response_key_roundtrip() {
        let key = ResponseKey::new("Excavation Work", 3);
        assert_eq!(key.to_string(), "Excavation Work-3");
        assert_eq!(key.to_string().parse::<ResponseKey>().unwrap(), key);
    }

    #[test]
    fn test_response_key_activity_with_dash() {
        // Only the last dash separates the index
        let key: ResponseKey = "Shut-down Work-7".parse().unwrap();
        assert_eq!(key.activity, "Shut-down Work");
        assert_eq!(key.question_index, 7);
    }

    #[test]
    fn test_response_key_rejects_garbage() {
        assert!("no index here".parse::<ResponseKey>().is_err());
        assert!("Activity-notanumber".parse::<ResponseKey>().is_err());
    }

    #[test]
    fn test_draft_toggle_activity() {
        let mut draft = DraftReport::new();
        draft.toggle_activity("Scaffolding");
        draft.toggle_activity("Excavation Work");
        assert_eq!(draft.activities, vec!["Scaffolding", "Excavation Work"]);

        draft.toggle_activity("Scaffolding");
        assert_eq!(draft.activities, vec!["Excavation Work"]);
    }

    #[test]
    fn test_record_answer_creates_sparse_entry() {
        let mut draft = DraftReport::new();
        assert!(draft.response("Scaffolding", 0).is_none());

        draft.record_answer("Scaffolding", 0, Answer::Yes);
        assert_eq!(
            draft.response("Scaffolding", 0).unwrap().answer(),
            Some(Answer::Yes)
        );
        assert_eq!(draft.responses.len(), 1);
    }

    #[test]
    fn test_submitted_report_serialization() {
        let mut draft = DraftReport::new();
        draft.project = "PROJ001".to_string();
        draft.audit_type = "Safety Audit".to_string();
        draft.activities = vec!["Excavation Work".to_string()];
        draft.record_answer("Excavation Work", 0, Answer::No);

        let report = SubmittedReport::new(draft, "RPT-1700000000000", Utc::now());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"reportId\":\"RPT-1700000000000\""));
        assert!(json.contains("\"auditType\":\"Safety Audit\""));
        assert!(json.contains("\"Excavation Work-0\""));
        assert!(json.contains("\"status\":\"submitted\""));

        let parsed: SubmittedReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
