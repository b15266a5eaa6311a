//! Background eviction of idle form sessions.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::SessionStore;

/// Periodically drops sessions idle for longer than `max_idle`.
///
/// Runs until the task is aborted. Spawned once at server start.
pub async fn run_session_sweeper<S: SessionStore + ?Sized>(
    store: Arc<S>,
    interval: Duration,
    max_idle: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let evicted = store.evict_idle(max_idle).await;
        if evicted > 0 {
            let remaining = store.len().await;
            tracing::debug!(evicted, remaining, "Evicted idle sessions");
        }
    }
}
