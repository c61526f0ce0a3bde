use axum::extract::{Path, State};
use axum::Json;

use crate::server::fields::RequestFields;
use crate::server::structured_error::{ActionResult, ApiError};
use crate::server::AppState;

/// `DELETE /api/issues/:project`
pub async fn delete_issue(
    State(state): State<AppState>,
    Path(project): Path<String>,
    fields: RequestFields,
) -> Result<Json<ActionResult>, ApiError> {
    let id = state.store.delete_issue(&project, fields.id()).await?;
    Ok(Json(ActionResult::deleted(id)))
}
