//! Handler for single-entry validation.

use axum::Json;

use crate::api::dto::validate::{ValidateRequest, ValidateResponse};
use crate::utils::validation::validate_fields;

/// Validates the three fields of one form entry.
///
/// # Endpoint
///
/// `POST /api/validate`
///
/// Always answers 200; the verdict lives in the body. Messages are the same
/// ones the form renders inline.
pub async fn validate_handler(Json(payload): Json<ValidateRequest>) -> Json<ValidateResponse> {
    let errors = validate_fields(&payload.url, &payload.validity, &payload.shortcode);

    Json(ValidateResponse {
        is_valid: errors.is_empty(),
        errors,
    })
}
