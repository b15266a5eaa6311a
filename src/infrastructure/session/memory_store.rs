//! In-memory session store.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::repositories::{SessionHandle, SessionStore};
use crate::domain::session::{FormSession, SessionId};

struct Slot {
    handle: SessionHandle,
    last_access: Instant,
}

/// Process-local [`SessionStore`] backed by a `HashMap`.
///
/// Holds at most `max_sessions` sessions; creating one more evicts the least
/// recently accessed.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Slot>>,
    max_sessions: usize,
}

impl InMemorySessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    fn evict_oldest(sessions: &mut HashMap<SessionId, Slot>) {
        let oldest = sessions
            .iter()
            .min_by_key(|(_, slot)| slot.last_access)
            .map(|(id, _)| id.clone());

        if let Some(id) = oldest {
            sessions.remove(&id);
            tracing::debug!(session = %id, "Session store full, evicted oldest session");
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, id: &SessionId) -> SessionHandle {
        let mut sessions = self.sessions.write().await;

        if let Some(slot) = sessions.get_mut(id) {
            slot.last_access = Instant::now();
            return slot.handle.clone();
        }

        if sessions.len() >= self.max_sessions {
            Self::evict_oldest(&mut sessions);
        }

        let handle = Arc::new(Mutex::new(FormSession::new()));
        sessions.insert(
            id.clone(),
            Slot {
                handle: handle.clone(),
                last_access: Instant::now(),
            },
        );
        tracing::debug!(session = %id, "Created form session");

        handle
    }

    async fn get(&self, id: &SessionId) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(id).map(|slot| {
            slot.last_access = Instant::now();
            slot.handle.clone()
        })
    }

    async fn discard(&self, id: &SessionId) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let now = Instant::now();

        sessions.retain(|_, slot| now.duration_since(slot.last_access) <= max_idle);

        before - sessions.len()
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(id: &str) -> SessionId {
        SessionId::new(id)
    }

    #[tokio::test]
    async fn test_get_or_create_returns_same_session() {
        let store = InMemorySessionStore::new(10);

        let a = store.get_or_create(&sid("a")).await;
        let b = store.get_or_create(&sid("a")).await;

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_does_not_create() {
        let store = InMemorySessionStore::new(10);
        assert!(store.get(&sid("missing")).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_discard() {
        let store = InMemorySessionStore::new(10);
        store.get_or_create(&sid("a")).await;

        assert!(store.discard(&sid("a")).await);
        assert!(!store.discard(&sid("a")).await);
        assert!(store.get(&sid("a")).await.is_none());
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recent() {
        let store = InMemorySessionStore::new(2);
        store.get_or_create(&sid("a")).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        store.get_or_create(&sid("b")).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        // Refresh "a" so "b" becomes the oldest.
        store.get(&sid("a")).await;
        tokio::time::sleep(Duration::from_millis(2)).await;

        store.get_or_create(&sid("c")).await;

        assert_eq!(store.len().await, 2);
        assert!(store.get(&sid("a")).await.is_some());
        assert!(store.get(&sid("b")).await.is_none());
        assert!(store.get(&sid("c")).await.is_some());
    }

    #[tokio::test]
    async fn test_evict_idle() {
        let store = InMemorySessionStore::new(10);
        store.get_or_create(&sid("old")).await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        store.get_or_create(&sid("fresh")).await;

        let evicted = store.evict_idle(Duration::from_millis(15)).await;

        assert_eq!(evicted, 1);
        assert!(store.get(&sid("fresh")).await.is_some());
        assert!(store.get(&sid("old")).await.is_none());
    }
}
