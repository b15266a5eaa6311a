//! DTOs for single-entry validation.

use serde::{Deserialize, Serialize};

use crate::domain::entities::EntryErrors;

/// Raw form fields of one entry. Missing fields are treated as empty.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub validity: String,
    #[serde(default)]
    pub shortcode: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub is_valid: bool,
    pub errors: EntryErrors,
}
