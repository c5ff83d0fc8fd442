//! Client identity resolver.

use axum::http::HeaderMap;

/// Request and response header carrying the opaque client identifier.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Echo the caller-supplied id when present and non-empty, otherwise mint a
/// fresh UUID. Any non-empty string is accepted as-is; no format validation.
pub fn resolve_client_id(headers: &HeaderMap) -> String {
    headers
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}
