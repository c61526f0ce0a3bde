use axum::extract::{Path, State};
use axum::Json;

use crate::issue::Issue;
use crate::server::fields::RequestFields;
use crate::server::structured_error::ApiError;
use crate::server::AppState;

/// `POST /api/issues/:project`
pub async fn create_issue(
    State(state): State<AppState>,
    Path(project): Path<String>,
    fields: RequestFields,
) -> Result<Json<Issue>, ApiError> {
    let issue = state
        .store
        .create_issue(&project, fields.create_options())
        .await?;
    Ok(Json(issue))
}
