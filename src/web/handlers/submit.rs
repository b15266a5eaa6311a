//! Batch submission handler.

use axum::{Extension, Form, extract::State, response::Redirect};

use super::entries::sync;
use crate::domain::entities::Route;
use crate::domain::session::SessionId;
use crate::state::AppState;

/// Applies posted field values, then submits every valid entry.
///
/// # Endpoint
///
/// `POST /submit`
///
/// Success and rejection both surface as a toast on the next render of `/`,
/// so the response is always a redirect.
pub async fn submit_handler(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Redirect {
    sync(&state, &session_id, &pairs).await;

    if let Err(err) = state.form_service.submit(&session_id).await {
        tracing::debug!(session = %session_id, error = %err, "Nothing submitted");
    }

    Redirect::to(Route::Shortener.path())
}
