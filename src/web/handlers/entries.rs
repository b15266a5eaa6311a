//! Form actions that edit the entry list.
//!
//! Every action first applies the field values posted with it, so text typed
//! before clicking a button is never lost.

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::Redirect,
};

use crate::domain::entities::{EntryId, Route};
use crate::domain::session::SessionId;
use crate::state::AppState;
use crate::web::forms::field_edits;

/// Applies posted field values.
///
/// # Endpoint
///
/// `POST /entries/sync`
pub async fn sync_handler(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Redirect {
    sync(&state, &session_id, &pairs).await;
    Redirect::to(Route::Shortener.path())
}

/// Adds a blank entry. Ignored once the form holds five entries.
///
/// # Endpoint
///
/// `POST /entries/add`
pub async fn add_entry_handler(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Redirect {
    sync(&state, &session_id, &pairs).await;
    state.form_service.add_entry(&session_id).await;
    Redirect::to(Route::Shortener.path())
}

/// Removes an entry. Ignored for the last remaining entry.
///
/// # Endpoint
///
/// `POST /entries/{id}/delete`
pub async fn delete_entry_handler(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Path(id): Path<u64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Redirect {
    sync(&state, &session_id, &pairs).await;
    if !state
        .form_service
        .remove_entry(&session_id, EntryId::new(id))
        .await
    {
        tracing::debug!(session = %session_id, entry = id, "Entry not removed");
    }
    Redirect::to(Route::Shortener.path())
}

pub(super) async fn sync(state: &AppState, session_id: &SessionId, pairs: &[(String, String)]) {
    let changed = state
        .form_service
        .apply_edits(session_id, field_edits(pairs))
        .await;

    if changed > 0 {
        tracing::debug!(session = %session_id, changed, "Form fields updated");
    }
}
