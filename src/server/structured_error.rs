//! JSON bodies for issue responses.
//!
//! Logical failures are reported in the body with HTTP 200, never through
//! the status code, so clients always get a parseable JSON object.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::issue::IssueError;

pub const UPDATED: &str = "successfully updated";
pub const DELETED: &str = "successfully deleted";

/// `{"error": ..., "_id": ...}`; `_id` is omitted when the request had none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl From<&IssueError> for ErrorBody {
    fn from(err: &IssueError) -> Self {
        Self {
            error: err.to_string(),
            id: err.issue_id().map(str::to_string),
        }
    }
}

/// `{"result": ..., "_id": ...}` for successful updates and deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub result: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl ActionResult {
    #[must_use]
    pub fn updated(id: String) -> Self {
        Self {
            result: UPDATED.to_string(),
            id,
        }
    }

    #[must_use]
    pub fn deleted(id: String) -> Self {
        Self {
            result: DELETED.to_string(),
            id,
        }
    }
}

/// Handler error that renders as an [`ErrorBody`] with status 200.
#[derive(Debug)]
pub struct ApiError(pub IssueError);

impl From<IssueError> for ApiError {
    fn from(err: IssueError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Json(ErrorBody::from(&self.0)).into_response()
    }
}
