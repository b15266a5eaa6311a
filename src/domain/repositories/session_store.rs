//! Repository trait for in-memory form sessions.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::session::{FormSession, SessionId};

/// Shared handle to one session. The mutex serialises every mutation of a
/// session's form, results and notifications.
pub type SessionHandle = Arc<Mutex<FormSession>>;

/// Storage for form sessions keyed by cookie identifier.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::InMemorySessionStore`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session for `id`, creating a fresh one if absent.
    async fn get_or_create(&self, id: &SessionId) -> SessionHandle;

    /// Returns the session for `id` without creating it.
    async fn get(&self, id: &SessionId) -> Option<SessionHandle>;

    /// Drops the session. Returns `true` if it existed.
    async fn discard(&self, id: &SessionId) -> bool;

    /// Drops sessions not seen for longer than `max_idle`. Returns how many.
    async fn evict_idle(&self, max_idle: Duration) -> usize;

    /// Number of live sessions.
    async fn len(&self) -> usize;
}
