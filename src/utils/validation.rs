//! Field-level validation for URL entries.
//!
//! All checks are pure functions of the raw text the user typed. They never fail;
//! each returns the message to show next to the field, or `None` when the field is
//! acceptable.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::domain::entities::EntryErrors;

pub const URL_REQUIRED: &str = "URL is required";
pub const URL_INVALID: &str = "Please enter a valid URL";
pub const VALIDITY_INVALID: &str = "Please enter a positive number";
pub const SHORTCODE_LENGTH: &str = "Shortcode must be 3-20 characters";
pub const SHORTCODE_FORMAT: &str = "Shortcode must be alphanumeric";

/// Allowed length of a custom short code, in characters.
pub const SHORTCODE_MIN_LEN: usize = 3;
pub const SHORTCODE_MAX_LEN: usize = 20;

static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("shortcode pattern is valid"));

/// Checks that the URL is present and parses as an absolute URL.
pub fn validate_url(url: &str) -> Option<String> {
    if url.is_empty() {
        return Some(URL_REQUIRED.to_string());
    }

    match Url::parse(url) {
        Ok(_) => None,
        Err(_) => Some(URL_INVALID.to_string()),
    }
}

/// Checks the optional validity window in minutes.
///
/// An empty field is accepted (the default window applies at submission).
pub fn validate_validity(validity: &str) -> Option<String> {
    if validity.is_empty() {
        return None;
    }

    match parse_validity_minutes(validity) {
        Some(_) => None,
        None => Some(VALIDITY_INVALID.to_string()),
    }
}

/// Checks the optional custom short code.
///
/// Length is checked before the character set, so `"a!"` reports the length error.
pub fn validate_shortcode(shortcode: &str) -> Option<String> {
    if shortcode.is_empty() {
        return None;
    }

    let len = shortcode.chars().count();
    if !(SHORTCODE_MIN_LEN..=SHORTCODE_MAX_LEN).contains(&len) {
        return Some(SHORTCODE_LENGTH.to_string());
    }

    if !SHORTCODE_REGEX.is_match(shortcode) {
        return Some(SHORTCODE_FORMAT.to_string());
    }

    None
}

/// Parses a validity window, returning `None` unless it is a positive integer.
pub fn parse_validity_minutes(validity: &str) -> Option<u32> {
    validity.trim().parse::<u32>().ok().filter(|m| *m > 0)
}

/// Runs all three field checks.
pub fn validate_fields(url: &str, validity: &str, shortcode: &str) -> EntryErrors {
    EntryErrors {
        url: validate_url(url),
        validity: validate_validity(validity),
        shortcode: validate_shortcode(shortcode),
    }
}
