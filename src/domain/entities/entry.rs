//! URL entry entity: one row of the batch shortening form.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::validation::validate_fields;

/// Default validity window prefilled into new entries, in minutes.
pub const DEFAULT_VALIDITY: &str = "30";

/// Identifier of an entry, unique within one form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Editable field of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Url,
    Validity,
    Shortcode,
}

impl EntryField {
    /// Form input name prefix used by the HTML form (`url-{id}` etc).
    pub fn input_prefix(self) -> &'static str {
        match self {
            EntryField::Url => "url",
            EntryField::Validity => "validity",
            EntryField::Shortcode => "shortcode",
        }
    }

    pub fn from_input_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "url" => Some(EntryField::Url),
            "validity" => Some(EntryField::Validity),
            "shortcode" => Some(EntryField::Shortcode),
            _ => None,
        }
    }
}

/// Per-field validation messages. `None` means the field is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryErrors {
    pub url: Option<String>,
    pub validity: Option<String>,
    pub shortcode: Option<String>,
}

impl EntryErrors {
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.validity.is_none() && self.shortcode.is_none()
    }
}

/// Fabricated short link attached to an entry after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryResult {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}

/// Position of an entry in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Never edited.
    Empty,
    /// Edited at least once, no current result.
    Editing,
    /// Holds a result from the latest submission that included it.
    Submitted,
}

/// One user-editable shortening request.
///
/// Errors are recomputed on every field change, so `is_valid()` always agrees
/// with the current text. Pristine entries carry errors too (an empty URL is
/// invalid) but `touched` lets the view keep them hidden until the user edits.
#[derive(Debug, Clone)]
pub struct UrlEntry {
    pub id: EntryId,
    pub url: String,
    pub validity: String,
    pub shortcode: String,
    pub errors: EntryErrors,
    pub touched: bool,
    pub result: Option<EntryResult>,
}

impl UrlEntry {
    /// Creates a blank entry with the default validity window.
    pub fn new(id: EntryId) -> Self {
        let mut entry = Self {
            id,
            url: String::new(),
            validity: DEFAULT_VALIDITY.to_string(),
            shortcode: String::new(),
            errors: EntryErrors::default(),
            touched: false,
            result: None,
        };
        entry.revalidate();
        entry
    }

    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Url => &self.url,
            EntryField::Validity => &self.validity,
            EntryField::Shortcode => &self.shortcode,
        }
    }

    /// Sets one field and re-validates the whole entry.
    ///
    /// Returns `false` without touching the entry when the value is unchanged.
    /// A changed value clears any previous result, since it no longer describes
    /// the fields on screen.
    pub fn set_field(&mut self, field: EntryField, value: String) -> bool {
        if self.field(field) == value {
            return false;
        }

        match field {
            EntryField::Url => self.url = value,
            EntryField::Validity => self.validity = value,
            EntryField::Shortcode => self.shortcode = value,
        }

        self.touched = true;
        self.result = None;
        self.revalidate();
        true
    }

    pub fn revalidate(&mut self) {
        self.errors = validate_fields(&self.url, &self.validity, &self.shortcode);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Valid entries with a URL are the ones a submission picks up.
    pub fn is_submittable(&self) -> bool {
        !self.url.is_empty() && self.is_valid()
    }

    pub fn status(&self) -> EntryStatus {
        if self.result.is_some() {
            EntryStatus::Submitted
        } else if self.touched {
            EntryStatus::Editing
        } else {
            EntryStatus::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{SHORTCODE_FORMAT, URL_INVALID, URL_REQUIRED};

    #[test]
    fn test_new_entry_defaults() {
        let entry = UrlEntry::new(EntryId::new(1));

        assert_eq!(entry.url, "");
        assert_eq!(entry.validity, "30");
        assert_eq!(entry.shortcode, "");
        assert!(!entry.touched);
        assert!(!entry.is_valid());
        assert_eq!(entry.errors.url.as_deref(), Some(URL_REQUIRED));
        assert_eq!(entry.status(), EntryStatus::Empty);
    }

    #[test]
    fn test_set_field_revalidates() {
        let mut entry = UrlEntry::new(EntryId::new(1));

        assert!(entry.set_field(EntryField::Url, "https://example.com".to_string()));
        assert!(entry.is_valid());
        assert!(entry.is_submittable());
        assert_eq!(entry.status(), EntryStatus::Editing);

        assert!(entry.set_field(EntryField::Shortcode, "bad-code".to_string()));
        assert!(!entry.is_valid());
        assert_eq!(entry.errors.shortcode.as_deref(), Some(SHORTCODE_FORMAT));
        assert!(entry.errors.url.is_none());
    }

    #[test]
    fn test_set_field_unchanged_is_noop() {
        let mut entry = UrlEntry::new(EntryId::new(1));

        assert!(!entry.set_field(EntryField::Validity, "30".to_string()));
        assert!(!entry.touched);
    }

    #[test]
    fn test_is_valid_matches_errors() {
        let mut entry = UrlEntry::new(EntryId::new(7));
        entry.set_field(EntryField::Url, "not-a-url".to_string());

        assert_eq!(entry.errors.url.as_deref(), Some(URL_INVALID));
        assert_eq!(entry.is_valid(), entry.errors.is_empty());
        assert!(!entry.is_submittable());
    }

    #[test]
    fn test_edit_clears_result() {
        let mut entry = UrlEntry::new(EntryId::new(1));
        entry.set_field(EntryField::Url, "https://example.com".to_string());
        entry.result = Some(EntryResult {
            short_link: "https://localhost:3000/short1".to_string(),
            expiry: Utc::now(),
        });
        assert_eq!(entry.status(), EntryStatus::Submitted);

        entry.set_field(EntryField::Url, "https://example.org".to_string());

        assert!(entry.result.is_none());
        assert_eq!(entry.status(), EntryStatus::Editing);
    }

    #[test]
    fn test_entry_field_prefix_roundtrip() {
        for field in [EntryField::Url, EntryField::Validity, EntryField::Shortcode] {
            assert_eq!(
                EntryField::from_input_prefix(field.input_prefix()),
                Some(field)
            );
        }
        assert_eq!(EntryField::from_input_prefix("other"), None);
    }

    #[test]
    fn test_entry_id_parse() {
        assert_eq!("12".parse::<EntryId>().unwrap(), EntryId::new(12));
        assert!("x".parse::<EntryId>().is_err());
    }
}
