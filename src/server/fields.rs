//! Request body fields.
//!
//! Bodies arrive either as JSON objects or as URL-encoded forms. Both are
//! normalized into one JSON map so that handlers see the same presence
//! semantics: a key that is present (even with an empty or null value) is
//! "sent", a key that is absent is not.

use std::convert::Infallible;
use std::num::FpCategory;

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use http::header::CONTENT_TYPE;
use serde_json::{Map, Value};
use tracing::debug;

use crate::issue::{CreateIssueOptions, IssueField, UpdateIssueOptions};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const ID_KEY: &str = "_id";

/// Body fields of an issue request.
///
/// Extraction never fails: a missing or malformed body yields no fields,
/// which then surfaces as the usual validation error for the operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFields(Map<String, Value>);

impl RequestFields {
    /// Parse a raw body. Form bodies are decoded when `is_form` is set,
    /// everything else is tried as a JSON object.
    #[must_use]
    pub fn parse(body: &[u8], is_form: bool) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }
        if is_form {
            return match serde_urlencoded::from_bytes::<Vec<(String, String)>>(body) {
                Ok(pairs) => pairs
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect(),
                Err(e) => {
                    debug!("Ignoring malformed form body: {e}");
                    Self::default()
                }
            };
        }
        match serde_json::from_slice::<Map<String, Value>>(body) {
            Ok(map) => Self(map),
            Err(e) => {
                debug!("Ignoring body that is not a JSON object: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Text of a present field. Scalars are rendered (`5` → `"5"`), `null`
    /// becomes the empty string.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).map(render)
    }

    /// Text of a field holding a truthy value. `null`, `false`, `0` and the
    /// empty string read as not sent.
    #[must_use]
    pub fn truthy_text(&self, key: &str) -> Option<String> {
        self.0.get(key).filter(|value| !is_falsy(value)).map(render)
    }

    /// The `_id` field, treated as missing when absent or falsy.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.truthy_text(ID_KEY)
    }

    /// The `open` flag. Boolean `false` and the string `"false"` close the
    /// issue; any other present value opens it.
    #[must_use]
    pub fn open(&self) -> Option<bool> {
        self.0
            .get(IssueField::Open.key())
            .map(|value| !matches!(value, Value::Bool(false)) && value.as_str() != Some("false"))
    }

    /// Falsy values count as absent on create, so they fail the required
    /// check or fall back to the empty default.
    #[must_use]
    pub fn create_options(&self) -> CreateIssueOptions {
        CreateIssueOptions {
            issue_title: self.truthy_text(IssueField::IssueTitle.key()),
            issue_text: self.truthy_text(IssueField::IssueText.key()),
            created_by: self.truthy_text(IssueField::CreatedBy.key()),
            assigned_to: self.truthy_text(IssueField::AssignedTo.key()),
            status_text: self.truthy_text(IssueField::StatusText.key()),
        }
    }

    /// Any present updatable key counts as sent, whatever its value.

    #[must_use]
    pub fn update_options(&self) -> UpdateIssueOptions {
        UpdateIssueOptions {
            issue_title: self.text(IssueField::IssueTitle.key()),
            issue_text: self.text(IssueField::IssueText.key()),
            created_by: self.text(IssueField::CreatedBy.key()),
            assigned_to: self.text(IssueField::AssignedTo.key()),
            status_text: self.text(IssueField::StatusText.key()),
            open: self.open(),
        }
    }
}

impl FromIterator<(String, Value)> for RequestFields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl<S> FromRequest<S> for RequestFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with(FORM_CONTENT_TYPE));

        match Bytes::from_request(req, state).await {
            Ok(body) => Ok(Self::parse(&body, is_form)),
            Err(e) => {
                debug!("Could not read request body: {e}");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
