use tracing::debug;

use super::field::IssueField;
use super::types::Issue;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Criterion {
    Field { field: IssueField, value: String },
    /// A key that names no issue attribute. Nothing can equal it.
    Unknown,
}

/// Exact-match filter built from request query parameters.
///
/// Every criterion must hold for an issue to be kept. Values are compared
/// against the issue's rendered field, so `open=false` and
/// `created_on=2024-05-01T12:00:00.000Z` match the way they read in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    criteria: Vec<Criterion>,
}

impl IssueFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from key/value pairs in request order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let criteria = pairs
            .into_iter()
            .map(|(key, value)| match IssueField::from_key(&key) {
                Some(field) => Criterion::Field { field, value },
                None => {
                    debug!(filter.key = %key, "Filter on unknown issue field matches nothing");
                    Criterion::Unknown
                }
            })
            .collect();
        Self { criteria }
    }

    /// Add a criterion on a known field.
    #[cfg(test)]
    #[must_use]
    pub fn with(mut self, field: IssueField, value: impl Into<String>) -> Self {
        self.criteria.push(Criterion::Field {
            field,
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        self.criteria.iter().all(|criterion| match criterion {
            Criterion::Field { field, value } => field.render(issue) == value.as_str(),
            Criterion::Unknown => false,
        })
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
