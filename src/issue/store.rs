//! Process-local issue storage partitioned by project name.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::error::IssueError;
use super::filter::IssueFilter;
use super::id::{generate_issue_id, is_issue_id};
use super::types::{CreateIssueOptions, Issue, UpdateIssueOptions};
use crate::utils::now;

/// Shared issue store.
///
/// Reads take the shared lock; create, update and delete hold the exclusive
/// lock for their whole duration, so each is atomic with respect to other
/// requests. Nothing is persisted.
#[derive(Debug, Default)]
pub struct IssueStore {
    projects: RwLock<HashMap<String, Vec<Issue>>>,
}

/// Keep a field only when it carries a non-empty value.
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl IssueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues of `project` that match `filter`, in insertion order.
    ///
    /// An unknown project has no issues.
    pub async fn list_issues(&self, project: &str, filter: &IssueFilter) -> Vec<Issue> {
        let projects = self.projects.read().await;
        let Some(issues) = projects.get(project) else {
            return Vec::new();
        };
        if filter.is_empty() {
            return issues.clone();
        }
        issues
            .iter()
            .filter(|issue| filter.matches(issue))
            .cloned()
            .collect()
    }

    /// Number of issues currently stored for `project`.
    #[cfg(test)]
    pub async fn issue_count(&self, project: &str) -> usize {
        self.projects.read().await.get(project).map_or(0, Vec::len)
    }

    pub async fn create_issue(
        &self,
        project: &str,
        options: CreateIssueOptions,
    ) -> Result<Issue, IssueError> {
        let (Some(issue_title), Some(issue_text), Some(created_by)) = (
            required(options.issue_title),
            required(options.issue_text),
            required(options.created_by),
        ) else {
            debug!(project = %project, "Rejected issue with missing required fields");
            return Err(IssueError::RequiredFieldsMissing);
        };

        let created_on = now();
        let issue = Issue {
            id: generate_issue_id(),
            issue_title,
            issue_text,
            created_by,
            assigned_to: options.assigned_to.unwrap_or_default(),
            status_text: options.status_text.unwrap_or_default(),
            created_on,
            updated_on: created_on,
            open: true,
        };

        self.projects
            .write()
            .await
            .entry(project.to_string())
            .or_default()
            .push(issue.clone());

        info!(project = %project, issue_id = %issue.id, "Created issue");
        Ok(issue)
    }

    /// Merge `options` into the issue `id` of `project`.
    ///
    /// Checks run in a fixed order: a missing id first, then an empty
    /// update, and only then whether the issue exists. Ids that could never
    /// have been generated are not found without taking the lock.
    pub async fn update_issue(
        &self,
        project: &str,
        id: Option<String>,
        options: UpdateIssueOptions,
    ) -> Result<String, IssueError> {
        let id = id.ok_or(IssueError::MissingId)?;
        if !options.has_changes() {
            debug!(project = %project, issue_id = %id, "Update request carried no fields");
            return Err(IssueError::NoUpdateFields(id));
        }
        if !is_issue_id(&id) {
            debug!(project = %project, issue_id = %id, "Malformed issue id on update");
            return Err(IssueError::CouldNotUpdate(id));
        }

        let mut projects = self.projects.write().await;
        let Some(issue) = projects
            .get_mut(project)
            .and_then(|issues| issues.iter_mut().find(|issue| issue.id == id))
        else {
            debug!(project = %project, issue_id = %id, "Issue to update not found");
            return Err(IssueError::CouldNotUpdate(id));
        };

        options.apply_to(issue, now());
        info!(project = %project, issue_id = %id, "Updated issue");
        Ok(id)
    }

    /// Remove the issue `id` from `project`.
    pub async fn delete_issue(
        &self,
        project: &str,
        id: Option<String>,
    ) -> Result<String, IssueError> {
        let id = id.ok_or(IssueError::MissingId)?;
        if !is_issue_id(&id) {
            debug!(project = %project, issue_id = %id, "Malformed issue id on delete");
            return Err(IssueError::CouldNotDelete(id));
        }

        let mut projects = self.projects.write().await;
        let Some(issues) = projects.get_mut(project) else {
            debug!(project = %project, issue_id = %id, "Delete on unknown project");
            return Err(IssueError::CouldNotDelete(id));
        };
        let Some(position) = issues.iter().position(|issue| issue.id == id) else {
            debug!(project = %project, issue_id = %id, "Issue to delete not found");
            return Err(IssueError::CouldNotDelete(id));
        };

        issues.remove(position);
        info!(project = %project, issue_id = %id, "Deleted issue");
        Ok(id)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
