use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::iso_millis;

/// A tracked issue as stored and as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "_id")]
    pub id: String,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    #[serde(with = "iso_millis")]
    pub created_on: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_on: DateTime<Utc>,
    pub open: bool,
}

/// Fields supplied when creating an issue.
///
/// `None` means the field was absent from the request. Required fields are
/// validated by the store, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateIssueOptions {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

/// Fields supplied when updating an issue. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateIssueOptions {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

impl UpdateIssueOptions {
    /// Whether at least one updatable field was supplied.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.issue_title.is_some()
            || self.issue_text.is_some()
            || self.created_by.is_some()
            || self.assigned_to.is_some()
            || self.status_text.is_some()
            || self.open.is_some()
    }

    /// Merge the supplied fields over `issue` and stamp `updated_on`.
    ///
    /// `updated_on` never moves backwards, even if the wall clock does.
    pub fn apply_to(self, issue: &mut Issue, now: DateTime<Utc>) {
        if let Some(title) = self.issue_title {
            issue.issue_title = title;
        }
        if let Some(text) = self.issue_text {
            issue.issue_text = text;
        }
        if let Some(created_by) = self.created_by {
            issue.created_by = created_by;
        }
        if let Some(assigned_to) = self.assigned_to {
            issue.assigned_to = assigned_to;
        }
        if let Some(status_text) = self.status_text {
            issue.status_text = status_text;
        }
        if let Some(open) = self.open {
            issue.open = open;
        }
        issue.updated_on = now.max(issue.updated_on);
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
