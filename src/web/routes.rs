//! HTML route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;
use crate::web::handlers::{
    add_entry_handler, delete_entry_handler, refresh_handler, shortener_handler,
    statistics_handler, submit_handler, sync_handler, theme_handler,
};

/// Page reads.
///
/// # Endpoints
///
/// - `GET /`           - Shortener form
/// - `GET /statistics` - Mock analytics (drops the caller's form state)
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shortener_handler))
        .route("/statistics", get(statistics_handler))
}

/// Form actions. Each one answers `303 See Other`.
///
/// # Endpoints
///
/// - `POST /entries/sync`         - Apply posted field values
/// - `POST /entries/add`          - Add an entry
/// - `POST /entries/{id}/delete`  - Remove an entry
/// - `POST /submit`               - Shorten every valid entry
/// - `POST /statistics/refresh`   - Simulated refresh
/// - `POST /theme`                - Toggle light/dark
pub fn action_routes() -> Router<AppState> {
    Router::new()
        .route("/entries/sync", post(sync_handler))
        .route("/entries/add", post(add_entry_handler))
        .route("/entries/{id}/delete", post(delete_entry_handler))
        .route("/submit", post(submit_handler))
        .route("/statistics/refresh", post(refresh_handler))
        .route("/theme", post(theme_handler))
}
