//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::repositories::SessionStore;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "sessions": { "status": "ok", "message": "Active sessions: 3" },
///     "stats_catalog": { "status": "ok", "message": "Records: 2" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let sessions_check = check_sessions(&state).await;
    let catalog_check = check_stats_catalog(&state).await;

    let all_healthy = sessions_check.is_ok() && catalog_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            sessions: sessions_check,
            stats_catalog: catalog_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_sessions(state: &AppState) -> CheckStatus {
    CheckStatus::ok(format!("Active sessions: {}", state.sessions.len().await))
}

/// The catalog is healthy when it lists at least one record.
async fn check_stats_catalog(state: &AppState) -> CheckStatus {
    match state.stats_service.list_stats().await {
        Ok(items) => CheckStatus::ok(format!("Records: {}", items.len())),
        Err(e) => CheckStatus::error(format!("Catalog error: {}", e)),
    }
}
