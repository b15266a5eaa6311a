//! Theme toggle handler.

use axum::{Extension, Form, extract::State, response::Redirect};

use super::entries::sync;
use crate::domain::entities::Route;
use crate::domain::session::SessionId;
use crate::state::AppState;
use crate::web::forms::{RETURN_TO, find_value};

/// Flips between light and dark, then returns to the page the toggle was
/// pressed on.
///
/// # Endpoint
///
/// `POST /theme`
///
/// On the shortener page the toggle submits the whole form, so typed field
/// values are saved before redirecting. `return_to` must name one of our own
/// pages; anything else falls back to `/`.
pub async fn theme_handler(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Redirect {
    sync(&state, &session_id, &pairs).await;

    let theme = state.theme_service.toggle().await;
    tracing::info!(%theme, "Theme changed");

    let route = find_value(&pairs, RETURN_TO)
        .and_then(Route::from_path)
        .unwrap_or(Route::Shortener);

    Redirect::to(route.path())
}
