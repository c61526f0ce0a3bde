mod daemon;
mod issue_create;
mod issue_delete;
mod issue_list;
mod issue_update;

pub use daemon::{health_check, not_found, HealthResponse};
pub use issue_create::create_issue;
pub use issue_delete::delete_issue;
pub use issue_list::list_issues;
pub use issue_update::update_issue;
