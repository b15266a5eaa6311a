//! Statistics page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Redirect},
};
use chrono::Utc;

use crate::domain::entities::Route;
use crate::domain::session::SessionId;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::views::{ShellView, StatView};

/// Template for the statistics page.
///
/// Renders `templates/statistics.html`: one card per link with its click
/// history, or an empty state when the catalog has no records.
#[derive(Template, WebTemplate)]
#[template(path = "statistics.html")]
pub struct StatisticsTemplate {
    pub shell: ShellView,
    pub stats: Vec<StatView>,
}

/// Renders the statistics page.
///
/// # Endpoint
///
/// `GET /statistics`
///
/// Leaving the shortener drops its form state, so the caller's session is
/// discarded here.
pub async fn statistics_handler(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<impl IntoResponse, AppError> {
    if state.form_service.discard(&session_id).await {
        tracing::debug!(session = %session_id, "Form session discarded");
    }

    let theme = state.theme_service.current().await;
    let now = Utc::now();
    let stats = state
        .stats_service
        .list_stats()
        .await?
        .iter()
        .map(|item| StatView::new(item, now))
        .collect();

    Ok(StatisticsTemplate {
        shell: ShellView::new(theme, Route::Statistics, Vec::new()),
        stats,
    })
}

/// Waits out the simulated refresh, then reloads the page.
///
/// # Endpoint
///
/// `POST /statistics/refresh`
pub async fn refresh_handler(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let items = state.stats_service.refresh().await?;
    tracing::debug!(records = items.len(), "Statistics refreshed");

    Ok(Redirect::to(Route::Statistics.path()))
}
