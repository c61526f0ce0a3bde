use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::debug;

use crate::issue::{Issue, IssueFilter};
use crate::server::AppState;

/// `GET /api/issues/:project`: every query parameter is an exact-match filter.
pub async fn list_issues(
    State(state): State<AppState>,
    Path(project): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<Vec<Issue>> {
    let filter = IssueFilter::from_pairs(query);
    let issues = state.store.list_issues(&project, &filter).await;
    debug!(project = %project, count = issues.len(), "Listed issues");
    Json(issues)
}
