//! Field-name lookup table for issue attributes.
//!
//! Filters and update payloads address issue attributes by their wire
//! names. This table maps those names to typed accessors so that filtering
//! compares one rendered value per field instead of probing arbitrary keys.

use std::borrow::Cow;

use super::types::Issue;
use crate::utils::format_iso;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueField {
    Id,
    IssueTitle,
    IssueText,
    CreatedBy,
    AssignedTo,
    StatusText,
    CreatedOn,
    UpdatedOn,
    Open,
}

impl IssueField {
    pub const ALL: [Self; 9] = [
        Self::Id,
        Self::IssueTitle,
        Self::IssueText,
        Self::CreatedBy,
        Self::AssignedTo,
        Self::StatusText,
        Self::CreatedOn,
        Self::UpdatedOn,
        Self::Open,
    ];

    /// Fields a client may change through an update request.
    pub const UPDATABLE: [Self; 6] = [
        Self::IssueTitle,
        Self::IssueText,
        Self::CreatedBy,
        Self::AssignedTo,
        Self::StatusText,
        Self::Open,
    ];

    /// The JSON / query-string name of the field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "_id",
            Self::IssueTitle => "issue_title",
            Self::IssueText => "issue_text",
            Self::CreatedBy => "created_by",
            Self::AssignedTo => "assigned_to",
            Self::StatusText => "status_text",
            Self::CreatedOn => "created_on",
            Self::UpdatedOn => "updated_on",
            Self::Open => "open",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Render the field of `issue` the same way it appears in JSON output,
    /// minus quoting.
    #[must_use]
    pub fn render(self, issue: &Issue) -> Cow<'_, str> {
        match self {
            Self::Id => Cow::Borrowed(&issue.id),
            Self::IssueTitle => Cow::Borrowed(&issue.issue_title),
            Self::IssueText => Cow::Borrowed(&issue.issue_text),
            Self::CreatedBy => Cow::Borrowed(&issue.created_by),
            Self::AssignedTo => Cow::Borrowed(&issue.assigned_to),
            Self::StatusText => Cow::Borrowed(&issue.status_text),
            Self::CreatedOn => Cow::Owned(format_iso(&issue.created_on)),
            Self::UpdatedOn => Cow::Owned(format_iso(&issue.updated_on)),
            Self::Open => Cow::Borrowed(if issue.open { "true" } else { "false" }),
        }
    }
}
