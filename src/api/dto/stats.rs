//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{ClickRecord, StatItem};

/// Individual click event information.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub location: String,
    pub user_agent: String,
}

impl From<ClickRecord> for ClickInfo {
    fn from(click: ClickRecord) -> Self {
        Self {
            timestamp: click.timestamp,
            referrer: click.referrer,
            location: click.location,
            user_agent: click.user_agent,
        }
    }
}

/// Statistics for one short link, with its expiry evaluated at request time.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub id: String,
    pub short_code: String,
    pub short_link: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expired: bool,
    pub total_clicks: u64,
    pub clicks: Vec<ClickInfo>,
}

impl StatsResponse {
    pub fn from_item(item: StatItem, now: DateTime<Utc>) -> Self {
        Self {
            expired: item.is_expired_at(now),
            id: item.id,
            short_code: item.short_code,
            short_link: item.short_link,
            original_url: item.original_url,
            created_at: item.created_at,
            expires_at: item.expires_at,
            total_clicks: item.total_clicks,
            clicks: item.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

/// All statistics records.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub total: usize,
    pub items: Vec<StatsResponse>,
}
