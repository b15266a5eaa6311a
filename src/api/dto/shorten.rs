//! DTOs for the stateless batch shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::EntryInput;
use crate::domain::entities::entry::DEFAULT_VALIDITY;
use crate::domain::entities::{EntryErrors, ShortenedResult};
use crate::domain::form::MAX_ENTRIES;

/// Largest batch accepted, same as the form's entry limit.
const MAX_BATCH: u64 = MAX_ENTRIES as u64;

/// Request to shorten up to [`MAX_ENTRIES`] URLs.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = MAX_BATCH, message = "Between 1 and 5 URLs per batch"))]
    pub urls: Vec<UrlItem>,
}

/// Validity window as either a JSON number or the raw text of the form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Validity {
    Minutes(u64),
    Text(String),
}

impl Validity {
    fn into_text(self) -> String {
        match self {
            Validity::Minutes(m) => m.to_string(),
            Validity::Text(t) => t,
        }
    }
}

/// Individual URL to be shortened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlItem {
    pub url: String,

    /// Minutes until the link expires. Defaults to 30 when absent.
    #[serde(default)]
    pub validity: Option<Validity>,

    /// Optional custom short code (3-20 letters or digits).
    #[serde(default)]
    pub shortcode: Option<String>,
}

impl From<UrlItem> for EntryInput {
    fn from(item: UrlItem) -> Self {
        Self {
            url: item.url,
            validity: item
                .validity
                .map(Validity::into_text)
                .unwrap_or_else(|| DEFAULT_VALIDITY.to_string()),
            shortcode: item.shortcode.unwrap_or_default(),
        }
    }
}

/// Response containing batch processing results.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub summary: BatchSummary,
    pub items: Vec<ShortenResultItem>,
}

/// Individual result for a URL in the batch.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ShortenResultItem {
    Success {
        url: String,
        short_code: String,
        short_link: String,
        expiry: String,
    },
    Error {
        url: String,
        errors: EntryErrors,
    },
}

impl ShortenResultItem {
    pub fn success(result: ShortenedResult) -> Self {
        let expiry = result.expiry_iso();
        Self::Success {
            url: result.url,
            short_code: result.short_code,
            short_link: result.short_link,
            expiry,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}
