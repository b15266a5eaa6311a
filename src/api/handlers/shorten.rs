//! Handler for the stateless shortening endpoint.

use axum::{Json, extract::State};
use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{BatchSummary, ShortenRequest, ShortenResponse, ShortenResultItem};
use crate::application::services::EntryInput;
use crate::error::AppError;
use crate::state::AppState;

/// Fabricates short links for a batch of one to five URLs.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     { "url": "https://example.com", "validity": 45, "shortcode": "abc123" },
///     { "url": "https://rust-lang.org" }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "successful": 2, "failed": 0 },
///   "items": [
///     {
///       "url": "https://example.com",
///       "short_code": "abc123",
///       "short_link": "https://localhost:3000/abc123",
///       "expiry": "2024-01-15T10:45:00.000Z"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the batch size is out of range or when no
/// item is valid. Otherwise invalid items are reported next to the
/// successful ones. Nothing is stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let inputs: Vec<EntryInput> = payload.urls.into_iter().map(EntryInput::from).collect();
    let outcomes = state.form_service.shorten_detached(&inputs, Utc::now());

    let total = inputs.len();
    let mut items = Vec::with_capacity(total);

    for (input, outcome) in inputs.into_iter().zip(outcomes) {
        items.push(match outcome {
            Ok(result) => ShortenResultItem::success(result),
            Err(errors) => ShortenResultItem::Error {
                url: input.url,
                errors,
            },
        });
    }

    let successful = items.iter().filter(|item| item.is_success()).count();

    if successful == 0 {
        metrics::counter!("submissions_rejected_total").increment(1);
        return Err(AppError::bad_request(
            "Please enter at least one valid URL",
            json!({ "items": items }),
        ));
    }

    metrics::counter!("urls_shortened_total").increment(successful as u64);

    Ok(Json(ShortenResponse {
        summary: BatchSummary {
            total,
            successful,
            failed: total - successful,
        },
        items,
    }))
}
