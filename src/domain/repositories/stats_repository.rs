//! Repository trait for link statistics.

use crate::domain::entities::StatItem;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only source of link analytics.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::StaticStatsRepository`] - Fixed demo records
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Returns every known record in display order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the source cannot be read.
    async fn list(&self) -> Result<Vec<StatItem>, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the source cannot be read.
    async fn find_by_code(&self, code: &str) -> Result<Option<StatItem>, AppError>;
}
