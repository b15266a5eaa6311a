//! Short code and session identifier generation.

use base64::Engine as _;

use crate::domain::entities::EntryId;

/// Length of random bytes before base64 encoding.
const SESSION_ID_BYTES: usize = 18;

/// Prefix of the code used when an entry has no custom short code.
const FALLBACK_PREFIX: &str = "short";

/// Generates a random session identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 24-character token that is safe in cookies.
///
/// # Errors
///
/// Returns the underlying error if the system random number generator fails.
pub fn generate_session_id() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; SESSION_ID_BYTES];

    getrandom::fill(&mut buffer)?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Returns `true` if the value looks like an identifier produced by
/// [`generate_session_id`].
pub fn is_session_id(value: &str) -> bool {
    value.len() == 24
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Derives the short code for an entry that has no custom one.
pub fn fallback_code(id: EntryId) -> String {
    format!("{}{}", FALLBACK_PREFIX, id)
}

/// Joins the short link base and a code into a full short link.
pub fn short_link(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_session_id_length() {
        let id = generate_session_id().unwrap();
        assert_eq!(id.len(), 24);
        assert!(!id.contains('='));
    }

    #[test]
    fn test_generate_session_id_is_recognised() {
        let id = generate_session_id().unwrap();
        assert!(is_session_id(&id));
    }

    #[test]
    fn test_generate_session_id_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_session_id().unwrap()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_is_session_id_rejects_garbage() {
        assert!(!is_session_id(""));
        assert!(!is_session_id("short"));
        assert!(!is_session_id("abcdefghijklmnopqrstuvw;"));
    }

    #[test]
    fn test_fallback_code() {
        assert_eq!(fallback_code(EntryId::new(1)), "short1");
        assert_eq!(fallback_code(EntryId::new(42)), "short42");
    }

    #[test]
    fn test_short_link_trims_trailing_slash() {
        assert_eq!(
            short_link("https://localhost:3000/", "abc123"),
            "https://localhost:3000/abc123"
        );
        assert_eq!(
            short_link("https://s.example.com", "demo"),
            "https://s.example.com/demo"
        );
    }
}
