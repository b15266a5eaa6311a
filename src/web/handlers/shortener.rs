//! Shortener page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::State,
    response::IntoResponse,
};

use crate::domain::entities::Route;
use crate::domain::session::SessionId;
use crate::state::AppState;
use crate::web::views::{FormView, ShellView};

/// Template for the shortener page.
///
/// Renders `templates/shortener.html` with the entry form, the three most
/// recent results and any queued toasts.
#[derive(Template, WebTemplate)]
#[template(path = "shortener.html")]
pub struct ShortenerTemplate {
    pub shell: ShellView,
    pub form: FormView,
}

/// Renders the shortener form.
///
/// # Endpoint
///
/// `GET /`
///
/// Queued notifications are consumed by this render.
pub async fn shortener_handler(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> impl IntoResponse {
    let theme = state.theme_service.current().await;
    let handle = state.form_service.session(&session_id).await;
    let mut session = handle.lock().await;

    let notifications = session.take_notifications();

    ShortenerTemplate {
        shell: ShellView::new(theme, Route::Shortener, notifications),
        form: FormView::new(&session),
    }
}
