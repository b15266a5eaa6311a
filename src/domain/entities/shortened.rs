//! Shortened result entity: the local echo of a submitted entry.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::entry::EntryId;

/// A fabricated short link produced by a batch submission.
///
/// There is no server-side record behind it; it only lives in the session's
/// result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedResult {
    pub entry_id: EntryId,
    pub url: String,
    pub short_code: String,
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}

impl ShortenedResult {
    /// Expiry as an ISO-8601 timestamp with millisecond precision.
    pub fn expiry_iso(&self) -> String {
        self.expiry.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn result_expiring_at(expiry: DateTime<Utc>) -> ShortenedResult {
        ShortenedResult {
            entry_id: EntryId::new(1),
            url: "https://example.com".to_string(),
            short_code: "abc123".to_string(),
            short_link: "https://localhost:3000/abc123".to_string(),
            expiry,
        }
    }

    #[test]
    fn test_expiry_iso_format() {
        let expiry = Utc.with_ymd_and_hms(2025, 1, 13, 11, 0, 0).unwrap();
        let result = result_expiring_at(expiry);

        assert_eq!(result.expiry_iso(), "2025-01-13T11:00:00.000Z");
    }
}
