//! Link statistics service.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::StatItem;
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for reading link analytics.
///
/// There is no write path: refreshing waits for the configured delay and
/// returns whatever the repository holds.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
    refresh_delay: Duration,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>, refresh_delay: Duration) -> Self {
        Self {
            repository,
            refresh_delay,
        }
    }

    /// Lists every record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the repository fails.
    pub async fn list_stats(&self) -> Result<Vec<StatItem>, AppError> {
        self.repository.list().await
    }

    /// Waits for the refresh delay, then lists every record again.
    ///
    /// Dropping the returned future before it completes cancels the wait.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the repository fails.
    pub async fn refresh(&self) -> Result<Vec<StatItem>, AppError> {
        tracing::debug!(delay_ms = self.refresh_delay.as_millis() as u64, "Refreshing statistics");
        tokio::time::sleep(self.refresh_delay).await;
        self.repository.list().await
    }

    /// Retrieves the record for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn get_stats(&self, code: &str) -> Result<StatItem, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Statistics not found", json!({ "code": code })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockStatsRepository;
    use chrono::{TimeZone, Utc};

    fn item(code: &str) -> StatItem {
        let created = Utc.with_ymd_and_hms(2025, 1, 13, 10, 30, 0).unwrap();
        StatItem {
            id: "1".to_string(),
            short_link: format!("https://localhost:3000/{}", code),
            original_url: "https://example.com".to_string(),
            short_code: code.to_string(),
            created_at: created,
            expires_at: created + chrono::Duration::minutes(30),
            total_clicks: 0,
            clicks: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_stats() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![item("abc123"), item("xyz789")]));

        let service = StatsService::new(Arc::new(mock_repo), Duration::ZERO);

        let stats = service.list_stats().await.unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].short_code, "abc123");
    }

    #[tokio::test]
    async fn test_refresh_waits_and_returns_same_data() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_list()
            .times(2)
            .returning(|| Ok(vec![item("abc123")]));

        let service = StatsService::new(Arc::new(mock_repo), Duration::from_millis(20));

        let before = service.list_stats().await.unwrap();
        let started = std::time::Instant::now();
        let after = service.refresh().await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "missing")
            .times(1)
            .returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(mock_repo), Duration::ZERO);

        let result = service.get_stats("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Err(AppError::internal("Catalog unavailable", json!({}))));

        let service = StatsService::new(Arc::new(mock_repo), Duration::ZERO);

        assert!(matches!(
            service.list_stats().await.unwrap_err(),
            AppError::Internal { .. }
        ));
    }
}
