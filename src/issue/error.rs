use thiserror::Error;

/// Errors returned by store operations.
///
/// The `Display` text of each variant is the exact message clients see in
/// the `error` member of the response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssueError {
    #[error("required field(s) missing")]
    RequiredFieldsMissing,

    #[error("missing _id")]
    MissingId,

    #[error("no update field(s) sent")]
    NoUpdateFields(String),

    #[error("could not update")]
    CouldNotUpdate(String),

    #[error("could not delete")]
    CouldNotDelete(String),
}

impl IssueError {
    /// The issue id the error refers to, when the request carried one.
    #[must_use]
    pub fn issue_id(&self) -> Option<&str> {
        match self {
            Self::RequiredFieldsMissing | Self::MissingId => None,
            Self::NoUpdateFields(id) | Self::CouldNotUpdate(id) | Self::CouldNotDelete(id) => {
                Some(id)
            }
        }
    }
}
