//! In-memory issue domain: records, filters and the per-project store.

pub mod error;
pub mod field;
pub mod filter;
pub mod id;
pub mod store;
pub mod types;

pub use error::IssueError;
pub use field::IssueField;
pub use filter::IssueFilter;
pub use id::{generate_issue_id, is_issue_id};
pub use store::IssueStore;
pub use types::{CreateIssueOptions, Issue, UpdateIssueOptions};
