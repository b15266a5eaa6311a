//! Mock statistics entities shown on the statistics page.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Referrer label used for clicks that arrived without one.
pub const DIRECT_REFERRER: &str = "Direct";

/// One recorded click on a short link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickRecord {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub location: String,
    pub user_agent: String,
}

impl ClickRecord {
    pub fn is_direct(&self) -> bool {
        self.referrer == DIRECT_REFERRER
    }
}

/// Analytics for a single short link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatItem {
    pub id: String,
    pub short_link: String,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub total_clicks: u64,
    pub clicks: Vec<ClickRecord>,
}

impl StatItem {
    /// Returns true once `now` is past the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn click(referrer: &str) -> ClickRecord {
        ClickRecord {
            timestamp: Utc::now(),
            referrer: referrer.to_string(),
            location: "Berlin, DE".to_string(),
            user_agent: "Edge/120.0".to_string(),
        }
    }

    #[test]
    fn test_click_is_direct() {
        assert!(click("Direct").is_direct());
        assert!(!click("Twitter").is_direct());
    }

    #[test]
    fn test_stat_item_expiry() {
        let now = Utc::now();
        let item = StatItem {
            id: "1".to_string(),
            short_link: "https://localhost:3000/demo".to_string(),
            original_url: "https://example.com".to_string(),
            short_code: "demo".to_string(),
            created_at: now - Duration::hours(1),
            expires_at: now,
            total_clicks: 1,
            clicks: vec![click("Direct")],
        };

        assert!(!item.is_expired_at(now));
        assert!(item.is_expired_at(now + Duration::seconds(1)));
    }
}
