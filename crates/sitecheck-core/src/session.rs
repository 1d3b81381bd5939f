//! Login session: the gate accepts any non-empty credentials plus accepted terms
use crate::error::ValidationError;
use chrono::{DateTime, Utc};

/// An authenticated data-entry session.
///
/// There is no authentication backend; the session exists so the host
/// can gate the views and tag work with a trace id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
    pub trace_id: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Validate the login form and open a session.
    pub fn login(
        user: impl Into<String>,
        password: &str,
        terms_accepted: bool,
    ) -> Result<Session, ValidationError> {
        let user = user.into();
        if user.trim().is_empty() || password.trim().is_empty() {
            return Err(ValidationError::EmptyCredentials);
        }
        if !terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(Session {
            user,
            trace_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
        })
    }
}
