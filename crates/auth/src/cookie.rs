//! Credential cookie helpers

use axum::http::{header::COOKIE, HeaderMap, HeaderValue};

/// Cookie carrying the admin credential (checked by the edge gate)
pub const ADMIN_COOKIE: &str = "admin_token";

/// Cookie carrying a regular user's credential
pub const SESSION_COOKIE: &str = "session_token";

/// Lookup order used by the request authorizer
pub const CREDENTIAL_COOKIES: [&str; 2] = [ADMIN_COOKIE, SESSION_COOKIE];

const EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Read a cookie value from the request headers.
///
/// An empty value counts as absent: that is what a cleared cookie looks like.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// First non-empty credential cookie, in [`CREDENTIAL_COOKIES`] order
pub(crate) fn read_credential(headers: &HeaderMap) -> Option<(&'static str, String)> {
    CREDENTIAL_COOKIES
        .iter()
        .find_map(|name| read_cookie(headers, name).map(|value| (*name, value)))
}

fn attributes(secure: bool) -> &'static str {
    if secure {
        "Path=/; HttpOnly; SameSite=Lax; Secure"
    } else {
        "Path=/; HttpOnly; SameSite=Lax"
    }
}

/// `Set-Cookie` value attaching a credential for `max_age` seconds
pub(crate) fn set_cookie(
    name: &str,
    token: &str,
    max_age: i64,
    secure: bool,
) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; Max-Age={}; {}",
        name,
        token,
        max_age,
        attributes(secure)
    ))
    .ok()
}

/// `Set-Cookie` value that makes the client drop the cookie immediately
pub(crate) fn clear_cookie(name: &str, secure: bool) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}=; Max-Age=0; Expires={}; {}",
        name,
        EPOCH,
        attributes(secure)
    ))
    .ok()
}
