//! Fixed demo analytics.

use async_trait::async_trait;
use chrono::{DateTime, ParseError, Utc};

use crate::domain::entities::{ClickRecord, StatItem};
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// [`StatsRepository`] serving a constant list of records.
///
/// Nothing is ever written; refreshing the statistics page returns the same
/// data.
pub struct StaticStatsRepository {
    items: Vec<StatItem>,
}

impl StaticStatsRepository {
    pub fn new(items: Vec<StatItem>) -> Self {
        Self { items }
    }

    /// Builds the repository with the built-in demo records.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in timestamp fails to parse.
    pub fn seeded() -> Result<Self, ParseError> {
        Ok(Self::new(demo_items()?))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl StatsRepository for StaticStatsRepository {
    async fn list(&self) -> Result<Vec<StatItem>, AppError> {
        Ok(self.items.clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<StatItem>, AppError> {
        Ok(self.items.iter().find(|i| i.short_code == code).cloned())
    }
}

fn at(timestamp: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(timestamp).map(|t| t.with_timezone(&Utc))
}

fn click(
    timestamp: &str,
    referrer: &str,
    location: &str,
    user_agent: &str,
) -> Result<ClickRecord, ParseError> {
    Ok(ClickRecord {
        timestamp: at(timestamp)?,
        referrer: referrer.to_string(),
        location: location.to_string(),
        user_agent: user_agent.to_string(),
    })
}

fn demo_items() -> Result<Vec<StatItem>, ParseError> {
    Ok(vec![
        StatItem {
            id: "1".to_string(),
            short_link: "https://localhost:3000/short1".to_string(),
            original_url: "https://very-very-very-long-and-descriptive-subdomain.example.com/path"
                .to_string(),
            short_code: "short1".to_string(),
            created_at: at("2025-01-13T10:30:00Z")?,
            expires_at: at("2025-01-13T11:00:00Z")?,
            total_clicks: 15,
            clicks: vec![
                click("2025-01-13T10:35:00Z", "Direct", "New York, US", "Chrome/120.0")?,
                click("2025-01-13T10:42:00Z", "Twitter", "London, UK", "Safari/17.0")?,
                click("2025-01-13T10:45:00Z", "Direct", "Toronto, CA", "Firefox/120.0")?,
            ],
        },
        StatItem {
            id: "2".to_string(),
            short_link: "https://localhost:3000/demo123".to_string(),
            original_url: "https://github.com/user/repository/blob/main/README.md".to_string(),
            short_code: "demo123".to_string(),
            created_at: at("2025-01-13T09:15:00Z")?,
            expires_at: at("2025-01-13T10:15:00Z")?,
            total_clicks: 8,
            clicks: vec![
                click("2025-01-13T09:20:00Z", "LinkedIn", "San Francisco, US", "Chrome/120.0")?,
                click("2025-01-13T09:35:00Z", "Direct", "Berlin, DE", "Edge/120.0")?,
            ],
        },
    ])
}
