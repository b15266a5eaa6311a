//! Decoding of the urlencoded shortener form.
//!
//! Entry inputs are named `{field}-{id}` (`url-3`, `validity-3`,
//! `shortcode-3`); anything else in the body is ignored here.

use crate::application::services::FieldEdit;
use crate::domain::entities::{EntryField, EntryId};

/// Name of the hidden input telling `POST /theme` where to go back to.
pub const RETURN_TO: &str = "return_to";

/// Collects field edits from posted form pairs, in body order.
pub fn field_edits(pairs: &[(String, String)]) -> Vec<FieldEdit> {
    pairs
        .iter()
        .filter_map(|(name, value)| {
            let (entry, field) = parse_input_name(name)?;
            Some(FieldEdit {
                entry,
                field,
                value: value.clone(),
            })
        })
        .collect()
}

/// Splits `url-3` into its entry id and field.
pub fn parse_input_name(name: &str) -> Option<(EntryId, EntryField)> {
    let (prefix, id) = name.rsplit_once('-')?;
    let field = EntryField::from_input_prefix(prefix)?;
    let entry = id.parse().ok()?;
    Some((entry, field))
}

/// Builds the input name for a field of an entry.
pub fn input_name(field: EntryField, entry: EntryId) -> String {
    format!("{}-{}", field.input_prefix(), entry)
}

pub fn find_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}
