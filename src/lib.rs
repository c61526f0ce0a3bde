// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod cors;
pub mod http_logging;
pub mod issue;
pub mod logging;
pub mod server;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use issue::{
    CreateIssueOptions, Issue, IssueError, IssueField, IssueFilter, IssueStore,
    UpdateIssueOptions,
};
pub use server::{router, AppState, ShutdownSignal};
