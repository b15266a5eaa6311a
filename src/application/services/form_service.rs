//! Form editing and batch submission service.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    EntryErrors, EntryField, EntryId, Notification, ShortenedResult,
};
use crate::domain::form::{FormError, fabricate_result};
use crate::domain::repositories::{SessionHandle, SessionStore};
use crate::domain::session::SessionId;
use crate::utils::validation::validate_fields;

/// A single field change posted by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub entry: EntryId,
    pub field: EntryField,
    pub value: String,
}

/// Raw fields of an entry submitted outside any session.
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub url: String,
    pub validity: String,
    pub shortcode: String,
}

/// What a successful submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Results fabricated and appended to the session's result list.
    pub submitted: usize,
    /// Entries that received their result in place.
    pub applied: usize,
}

/// Service owning the shortener form of every session.
///
/// Each session is guarded by its own mutex, so concurrent requests for the
/// same browser are serialised while different browsers never contend.
pub struct FormService<S: SessionStore> {
    store: Arc<S>,
    short_link_base: String,
    submit_delay: Duration,
}

impl<S: SessionStore> FormService<S> {
    /// Creates a new form service.
    ///
    /// `submit_delay` is the simulated latency of a submission; zero still
    /// yields once before the results are applied.
    pub fn new(store: Arc<S>, short_link_base: String, submit_delay: Duration) -> Self {
        Self {
            store,
            short_link_base,
            submit_delay,
        }
    }

    /// Returns the caller's session, creating it on first contact.
    pub async fn session(&self, id: &SessionId) -> SessionHandle {
        self.store.get_or_create(id).await
    }

    /// Applies posted field values. Only entries whose values actually changed
    /// are re-validated. Returns the number of changed fields.
    pub async fn apply_edits(&self, id: &SessionId, edits: Vec<FieldEdit>) -> usize {
        if edits.is_empty() {
            return 0;
        }

        let session = self.store.get_or_create(id).await;
        let mut session = session.lock().await;

        let mut changed = 0;
        for edit in edits {
            if session.form.update_field(edit.entry, edit.field, edit.value) {
                changed += 1;
            }
        }
        changed
    }

    /// Adds a blank entry. Returns `None` when the form is full.
    pub async fn add_entry(&self, id: &SessionId) -> Option<EntryId> {
        let session = self.store.get_or_create(id).await;
        let added = session.lock().await.form.add_entry();

        if added.is_none() {
            tracing::debug!(session = %id, "Entry limit reached, add ignored");
        }

        added
    }

    /// Removes an entry. Returns `false` for the last entry or unknown ids.
    pub async fn remove_entry(&self, id: &SessionId, entry: EntryId) -> bool {
        let session = self.store.get_or_create(id).await;
        let removed = session.lock().await.form.remove_entry(entry);
        removed
    }

    /// Submits every valid, non-empty entry of the session's form.
    ///
    /// Results are fabricated at the moment of the call, then written back after
    /// the simulated delay. If the session is discarded while waiting, nothing
    /// is written.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NoValidEntries`] when there is nothing to submit;
    /// a destructive notification is queued on the session and no entry changes.
    pub async fn submit(&self, id: &SessionId) -> Result<SubmitOutcome, FormError> {
        self.submit_at(id, Utc::now()).await
    }

    /// Same as [`Self::submit`] with an explicit submit timestamp.
    pub async fn submit_at(
        &self,
        id: &SessionId,
        submitted_at: DateTime<Utc>,
    ) -> Result<SubmitOutcome, FormError> {
        let handle = self.store.get_or_create(id).await;

        let batch = {
            let mut session = handle.lock().await;
            match session
                .form
                .prepare_batch(&self.short_link_base, submitted_at)
            {
                Ok(batch) => batch,
                Err(err) => {
                    metrics::counter!("submissions_rejected_total").increment(1);
                    tracing::info!(session = %id, error = %err, "Submission rejected");
                    session.notify(Notification::from(&err));
                    return Err(err);
                }
            }
        };

        self.pause().await;

        let Some(current) = self.store.get(id).await.filter(|h| Arc::ptr_eq(h, &handle)) else {
            tracing::debug!(session = %id, "Session discarded during submission");
            return Ok(SubmitOutcome {
                submitted: 0,
                applied: 0,
            });
        };

        let mut session = current.lock().await;
        let applied = session.form.apply_results(&batch);
        let submitted = batch.len();
        session.append_results(batch.into_results());
        session.notify(Notification::shortened(submitted));

        metrics::counter!("urls_shortened_total").increment(submitted as u64);
        tracing::info!(session = %id, submitted, applied, "URLs shortened");

        Ok(SubmitOutcome { submitted, applied })
    }

    /// Drops the caller's form state.
    pub async fn discard(&self, id: &SessionId) -> bool {
        self.store.discard(id).await
    }

    /// Validates and shortens entries without touching any session.
    ///
    /// Entry ids are assigned by position, starting at 1.
    pub fn shorten_detached(
        &self,
        inputs: &[EntryInput],
        submitted_at: DateTime<Utc>,
    ) -> Vec<Result<ShortenedResult, EntryErrors>> {
        inputs
            .iter()
            .zip(1u64..)
            .map(|(input, n)| {
                let errors = validate_fields(&input.url, &input.validity, &input.shortcode);
                if !errors.is_empty() {
                    return Err(errors);
                }

                fabricate_result(
                    EntryId::new(n),
                    &input.url,
                    &input.validity,
                    &input.shortcode,
                    &self.short_link_base,
                    submitted_at,
                )
                .map_err(|err| EntryErrors {
                    validity: Some(err.to_string()),
                    ..EntryErrors::default()
                })
            })
            .collect()
    }

    async fn pause(&self) {
        if self.submit_delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.submit_delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NotificationKind;
    use crate::domain::repositories::MockSessionStore;
    use crate::domain::session::FormSession;
    use crate::infrastructure::session::InMemorySessionStore;
    use chrono::TimeZone;
    use tokio::sync::Mutex;

    const BASE: &str = "https://localhost:3000";

    fn sid() -> SessionId {
        SessionId::new("test-session")
    }

    fn service() -> FormService<InMemorySessionStore> {
        FormService::new(
            Arc::new(InMemorySessionStore::new(100)),
            BASE.to_string(),
            Duration::ZERO,
        )
    }

    fn edit(entry: u64, field: EntryField, value: &str) -> FieldEdit {
        FieldEdit {
            entry: EntryId::new(entry),
            field,
            value: value.to_string(),
        }
    }

    #[tokio::test]
    async fn test_apply_edits_counts_changes() {
        let service = service();

        let changed = service
            .apply_edits(
                &sid(),
                vec![
                    edit(1, EntryField::Url, "https://example.com"),
                    edit(1, EntryField::Validity, "30"),
                    edit(9, EntryField::Url, "https://ignored.example"),
                ],
            )
            .await;

        assert_eq!(changed, 1);
        let session = service.session(&sid()).await;
        assert_eq!(session.lock().await.form.valid_count(), 1);
    }

    #[tokio::test]
    async fn test_add_and_remove_entries() {
        let service = service();

        for _ in 0..4 {
            assert!(service.add_entry(&sid()).await.is_some());
        }
        assert!(service.add_entry(&sid()).await.is_none());

        assert!(service.remove_entry(&sid(), EntryId::new(1)).await);
        let session = service.session(&sid()).await;
        assert_eq!(session.lock().await.form.len(), 4);
    }

    #[tokio::test]
    async fn test_submit_without_valid_entries_notifies_once() {
        let service = service();

        let result = service.submit(&sid()).await;

        assert_eq!(result.unwrap_err(), FormError::NoValidEntries);
        let session = service.session(&sid()).await;
        let mut session = session.lock().await;
        let notifications = session.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Destructive);
        assert_eq!(session.total_results(), 0);
        assert!(session.form.entries().iter().all(|e| e.result.is_none()));
    }

    #[tokio::test]
    async fn test_submit_appends_results() {
        let service = service();
        let at = Utc.with_ymd_and_hms(2025, 1, 13, 10, 0, 0).unwrap();
        service.add_entry(&sid()).await;
        service
            .apply_edits(
                &sid(),
                vec![
                    edit(1, EntryField::Url, "https://example.com"),
                    edit(1, EntryField::Validity, ""),
                    edit(1, EntryField::Shortcode, "abc123"),
                    edit(2, EntryField::Url, "https://example.org"),
                    edit(2, EntryField::Validity, "5"),
                ],
            )
            .await;

        let outcome = service.submit_at(&sid(), at).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome {
                submitted: 2,
                applied: 2
            }
        );
        let session = service.session(&sid()).await;
        let mut session = session.lock().await;
        let results = session.recent_results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].short_link, "https://localhost:3000/abc123");
        assert_eq!(results[0].expiry, at + chrono::Duration::minutes(30));
        assert_eq!(results[1].short_link, "https://localhost:3000/short2");
        assert_eq!(results[1].expiry, at + chrono::Duration::minutes(5));

        let notifications = session.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].description,
            "2 URL(s) shortened successfully"
        );
    }

    #[tokio::test]
    async fn test_repeated_submissions_accumulate() {
        let service = service();
        let id = sid();
        service
            .apply_edits(&id, vec![edit(1, EntryField::Url, "https://example.com")])
            .await;

        let (a, b) = tokio::join!(service.submit(&id), service.submit(&id));
        assert!(a.is_ok());
        assert!(b.is_ok());

        let session = service.session(&sid()).await;
        let session = session.lock().await;
        assert_eq!(session.total_results(), 2);
        assert!(session.form.entries()[0].result.is_some());
    }

    #[tokio::test]
    async fn test_submit_skips_discarded_session() {
        let handle = Arc::new(Mutex::new(FormSession::new()));
        handle.lock().await.form.update_field(
            EntryId::new(1),
            EntryField::Url,
            "https://example.com".to_string(),
        );

        let mut store = MockSessionStore::new();
        let created = handle.clone();
        store
            .expect_get_or_create()
            .times(1)
            .returning(move |_| created.clone());
        store.expect_get().times(1).returning(|_| None);

        let service = FormService::new(Arc::new(store), BASE.to_string(), Duration::ZERO);

        let outcome = service.submit(&sid()).await.unwrap();

        assert_eq!(outcome.submitted, 0);
        let session = handle.lock().await;
        assert_eq!(session.total_results(), 0);
        assert!(session.form.entries()[0].result.is_none());
    }

    #[tokio::test]
    async fn test_discard() {
        let service = service();
        service.session(&sid()).await;

        assert!(service.discard(&sid()).await);
        assert!(!service.discard(&sid()).await);
    }

    #[test]
    fn test_shorten_detached() {
        let service = service();
        let at = Utc.with_ymd_and_hms(2025, 1, 13, 10, 0, 0).unwrap();

        let results = service.shorten_detached(
            &[
                EntryInput {
                    url: "https://example.com".to_string(),
                    validity: String::new(),
                    shortcode: "abc123".to_string(),
                },
                EntryInput {
                    url: "not-a-url".to_string(),
                    ..EntryInput::default()
                },
                EntryInput {
                    url: "https://example.org".to_string(),
                    ..EntryInput::default()
                },
            ],
            at,
        );

        assert_eq!(results.len(), 3);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.short_link, "https://localhost:3000/abc123");
        assert_eq!(first.expiry, at + chrono::Duration::minutes(30));

        let errors = results[1].as_ref().unwrap_err();
        assert_eq!(errors.url.as_deref(), Some("Please enter a valid URL"));

        assert_eq!(
            results[2].as_ref().unwrap().short_link,
            "https://localhost:3000/short3"
        );
    }
}
