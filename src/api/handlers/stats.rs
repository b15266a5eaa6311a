//! Handlers for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

use crate::api::dto::stats::{StatsListResponse, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every statistics record.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// The `expired` flag of each item is computed against the current time.
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsListResponse>, AppError> {
    let now = Utc::now();
    let items: Vec<StatsResponse> = state
        .stats_service
        .list_stats()
        .await?
        .into_iter()
        .map(|item| StatsResponse::from_item(item, now))
        .collect();

    Ok(Json(StatsListResponse {
        total: items.len(),
        items,
    }))
}

/// Retrieves statistics for a single short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code is not in the catalog.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let item = state.stats_service.get_stats(&code).await?;

    Ok(Json(StatsResponse::from_item(item, Utc::now())))
}
