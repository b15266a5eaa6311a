//! Bounded batch form and its submission rules.
//!
//! A form always holds between [`MIN_ENTRIES`] and [`MAX_ENTRIES`] entries.
//! Submission is split in two steps so the caller can pause in between without
//! holding the form:
//!
//! 1. [`ShortenerForm::prepare_batch`] snapshots every submittable entry and
//!    fabricates its result at the submit timestamp.
//! 2. [`ShortenerForm::apply_results`] writes the results back into entries that
//!    still exist with the same fields.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{EntryField, EntryId, EntryResult, ShortenedResult, UrlEntry};
use crate::utils::code_generator::{fallback_code, short_link};
use crate::utils::validation::parse_validity_minutes;

pub const MAX_ENTRIES: usize = 5;
pub const MIN_ENTRIES: usize = 1;

/// Validity window used when an entry leaves the field empty, in minutes.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter at least one valid URL")]
    NoValidEntries,

    #[error("Expiry for entry {entry} is out of range")]
    ExpiryOutOfRange { entry: EntryId },
}

/// Field values of one entry at the moment a batch was prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    url: String,
    validity: String,
    shortcode: String,
}

impl Snapshot {
    fn of(entry: &UrlEntry) -> Self {
        Self {
            url: entry.url.clone(),
            validity: entry.validity.clone(),
            shortcode: entry.shortcode.clone(),
        }
    }

    fn matches(&self, entry: &UrlEntry) -> bool {
        self.url == entry.url && self.validity == entry.validity && self.shortcode == entry.shortcode
    }
}

/// Results fabricated for a submission, not yet written back to the form.
#[derive(Debug, Clone)]
pub struct ShortenBatch {
    items: Vec<(Snapshot, ShortenedResult)>,
}

impl ShortenBatch {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_results(self) -> Vec<ShortenedResult> {
        self.items.into_iter().map(|(_, result)| result).collect()
    }
}

/// Fabricates the result for one entry's fields.
///
/// The short code is the custom one when present, otherwise derived from the
/// entry id. Expiry is `submitted_at` plus the validity window (default 30
/// minutes when the field is empty).
pub fn fabricate_result(
    id: EntryId,
    url: &str,
    validity: &str,
    shortcode: &str,
    base: &str,
    submitted_at: DateTime<Utc>,
) -> Result<ShortenedResult, FormError> {
    let short_code = if shortcode.is_empty() {
        fallback_code(id)
    } else {
        shortcode.to_string()
    };

    let minutes = if validity.trim().is_empty() {
        DEFAULT_VALIDITY_MINUTES
    } else {
        parse_validity_minutes(validity).ok_or(FormError::ExpiryOutOfRange { entry: id })?
    };

    let expiry = submitted_at
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
        .ok_or(FormError::ExpiryOutOfRange { entry: id })?;

    Ok(ShortenedResult {
        entry_id: id,
        url: url.to_string(),
        short_link: short_link(base, &short_code),
        short_code,
        expiry,
    })
}

/// The batch shortening form of one session.
#[derive(Debug, Clone)]
pub struct ShortenerForm {
    entries: Vec<UrlEntry>,
    next_id: u64,
}

impl Default for ShortenerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortenerForm {
    /// Creates a form with a single blank entry.
    pub fn new() -> Self {
        Self {
            entries: vec![UrlEntry::new(EntryId::new(1))],
            next_id: 2,
        }
    }

    pub fn entries(&self) -> &[UrlEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&UrlEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_ENTRIES
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > MIN_ENTRIES
    }

    /// Appends a blank entry. No-op at [`MAX_ENTRIES`].
    pub fn add_entry(&mut self) -> Option<EntryId> {
        if !self.can_add() {
            return None;
        }

        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(UrlEntry::new(id));
        Some(id)
    }

    /// Removes an entry. No-op at [`MIN_ENTRIES`] or for unknown ids.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        if !self.can_remove() {
            return false;
        }

        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Sets one field of one entry and re-validates that entry only.
    ///
    /// Returns `true` if the entry exists and the value changed.
    pub fn update_field(&mut self, id: EntryId, field: EntryField, value: String) -> bool {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .is_some_and(|entry| entry.set_field(field, value))
    }

    /// Number of entries a submission would pick up right now.
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_submittable()).count()
    }

    /// Snapshots submittable entries and fabricates their results.
    ///
    /// # Errors
    ///
    /// - [`FormError::NoValidEntries`] when nothing is submittable
    /// - [`FormError::ExpiryOutOfRange`] when an expiry cannot be represented
    pub fn prepare_batch(
        &self,
        base: &str,
        submitted_at: DateTime<Utc>,
    ) -> Result<ShortenBatch, FormError> {
        let items = self
            .entries
            .iter()
            .filter(|e| e.is_submittable())
            .map(|entry| {
                fabricate_result(
                    entry.id,
                    &entry.url,
                    &entry.validity,
                    &entry.shortcode,
                    base,
                    submitted_at,
                )
                .map(|result| (Snapshot::of(entry), result))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if items.is_empty() {
            return Err(FormError::NoValidEntries);
        }

        Ok(ShortenBatch { items })
    }

    /// Writes batch results into their entries.
    ///
    /// Entries removed or edited since the batch was prepared are skipped.
    /// Returns the number of entries updated.
    pub fn apply_results(&mut self, batch: &ShortenBatch) -> usize {
        let mut applied = 0;

        for (snapshot, result) in &batch.items {
            let Some(entry) = self.entries.iter_mut().find(|e| e.id == result.entry_id) else {
                continue;
            };

            if !snapshot.matches(entry) {
                continue;
            }

            entry.result = Some(EntryResult {
                short_link: result.short_link.clone(),
                expiry: result.expiry,
            });
            applied += 1;
        }

        applied
    }
}

#[cfg(test)]
impl ShortenerForm {
    /// Prepares and applies a batch in one step.
    pub fn submit(
        &mut self,
        base: &str,
        submitted_at: DateTime<Utc>,
    ) -> Result<Vec<ShortenedResult>, FormError> {
        let batch = self.prepare_batch(base, submitted_at)?;
        self.apply_results(&batch);
        Ok(batch.into_results())
    }
}
