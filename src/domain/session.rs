//! Per-browser form session.

use std::fmt;

use crate::domain::entities::{Notification, ShortenedResult};
use crate::domain::form::ShortenerForm;

/// Number of results the summary view surfaces.
pub const RECENT_RESULTS: usize = 3;

/// Pending toasts kept per session; older ones are dropped first.
pub const MAX_NOTIFICATIONS: usize = 5;

/// Opaque identifier carried in the `session_id` cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of the shortener page for one browser.
///
/// Lives only in memory; discarded when the user navigates away or the session
/// goes idle (see [`crate::domain::session_sweeper`]).
#[derive(Debug)]
pub struct FormSession {
    pub form: ShortenerForm,
    recent: Vec<ShortenedResult>,
    total_results: usize,
    notifications: Vec<Notification>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            form: ShortenerForm::new(),
            recent: Vec::with_capacity(RECENT_RESULTS),
            total_results: 0,
            notifications: Vec::new(),
        }
    }

    /// Results shortened over the session's lifetime.
    pub fn total_results(&self) -> usize {
        self.total_results
    }

    /// The last [`RECENT_RESULTS`] results, oldest first.
    pub fn recent_results(&self) -> &[ShortenedResult] {
        &self.recent
    }

    /// Only the newest [`RECENT_RESULTS`] are retained; the rest are counted.
    pub fn append_results(&mut self, results: impl IntoIterator<Item = ShortenedResult>) {
        for result in results {
            self.total_results += 1;
            self.recent.push(result);
        }
        let excess = self.recent.len().saturating_sub(RECENT_RESULTS);
        self.recent.drain(..excess);
    }

    pub fn notify(&mut self, notification: Notification) {
        if self.notifications.len() == MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
        self.notifications.push(notification);
    }

    /// Takes queued notifications; each is shown once.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
