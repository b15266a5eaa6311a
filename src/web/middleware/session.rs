//! Cookie-based session middleware for the HTML pages.

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::domain::session::SessionId;
use crate::error::AppError;
use crate::utils::code_generator::{generate_session_id, is_session_id};

pub const SESSION_COOKIE: &str = "session_id";

/// Attaches a [`SessionId`] to every request.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session_id=<24 url-safe characters>
/// ```
///
/// A request without a well-formed `session_id` cookie gets a fresh id, and
/// the response carries a `Set-Cookie` header for it. Handlers read the id
/// with `Extension<SessionId>`.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the OS random source fails.
pub async fn layer(mut req: Request, next: Next) -> Result<Response, AppError> {
    let existing = req
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .find_map(session_cookie_value);

    let (session_id, issued) = match existing {
        Some(id) => (SessionId::new(id), false),
        None => {
            let id = generate_session_id().map_err(|e| {
                AppError::internal("Failed to create session", json!({ "reason": e.to_string() }))
            })?;
            tracing::debug!("Issued new session");
            (SessionId::new(id), true)
        }
    };

    let cookie = issued.then(|| session_cookie(&session_id));
    req.extensions_mut().insert(session_id);

    let mut response = next.run(req).await;

    if let Some(cookie) = cookie {
        let value = HeaderValue::from_str(&cookie).map_err(|e| {
            AppError::internal("Invalid session cookie", json!({ "reason": e.to_string() }))
        })?;
        response.headers_mut().append(SET_COOKIE, value);
    }

    Ok(response)
}

/// Extracts a well-formed `session_id` value from one `Cookie` header.
fn session_cookie_value(cookie_str: &str) -> Option<String> {
    cookie_str.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(SESSION_COOKIE), Some(value)) if is_session_id(value) => Some(value.to_string()),
            _ => None,
        }
    })
}

fn session_cookie(id: &SessionId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "abcdefghijklmnopqrstuvwx";

    #[test]
    fn test_cookie_value_found_among_others() {
        let header = format!("theme=dark; session_id={}; other=1", ID);
        assert_eq!(session_cookie_value(&header).as_deref(), Some(ID));
    }

    #[test]
    fn test_malformed_cookie_value_ignored() {
        assert_eq!(session_cookie_value("session_id=short"), None);
        assert_eq!(session_cookie_value("session_id=; x=y"), None);
        assert_eq!(session_cookie_value("auth_token=abc"), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(&SessionId::new(ID));
        assert!(cookie.starts_with("session_id=abcdefghijklmnopqrstuvwx"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
    }
}
