//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{shorten_handler, stats_handler, stats_list_handler, validate_handler};
use crate::state::AppState;

/// Cheap JSON routes, nested under `/api`. Live validation fires on every
/// field change, so these share the page limiter.
///
/// # Endpoints
///
/// - `POST /validate`      - Validate the fields of one entry
/// - `GET  /stats`         - All statistics records
/// - `GET  /stats/{code}`  - Statistics for one short code
pub fn api_read_routes() -> Router<AppState> {
    Router::new()
        .route("/validate", post(validate_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
}

/// Batch JSON routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`       - Fabricate short links for a batch (nothing is stored)
pub fn api_write_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
