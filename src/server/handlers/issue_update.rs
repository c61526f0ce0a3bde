use axum::extract::{Path, State};
use axum::Json;

use crate::server::fields::RequestFields;
use crate::server::structured_error::{ActionResult, ApiError};
use crate::server::AppState;

/// `PUT /api/issues/:project`
pub async fn update_issue(
    State(state): State<AppState>,
    Path(project): Path<String>,
    fields: RequestFields,
) -> Result<Json<ActionResult>, ApiError> {
    let id = state
        .store
        .update_issue(&project, fields.id(), fields.update_options())
        .await?;
    Ok(Json(ActionResult::updated(id)))
}
