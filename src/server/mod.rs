//! HTTP surface: the axum router and its shared state.

pub mod fields;
pub mod handlers;
pub mod structured_error;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::issue::IssueStore;

/// Signal type for server shutdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutdownSignal {
    None,
    Shutdown,
}

/// State shared by every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<IssueStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<IssueStore>) -> Self {
        Self { store }
    }
}

/// Build the application router over `store`.
///
/// Unmatched paths answer `404 Not Found` in plain text.
#[must_use]
pub fn router(store: Arc<IssueStore>) -> Router {
    Router::new()
        .route(
            "/api/issues/:project",
            get(handlers::list_issues)
                .post(handlers::create_issue)
                .put(handlers::update_issue)
                .delete(handlers::delete_issue),
        )
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .with_state(AppState::new(store))
}
