//! URL and form-body encoding for REST calls.
//!
//! Endpoint paths are assembled here so they can be unit tested without a
//! browser; the hydrate-only HTTP layer only sends what these helpers build.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// API prefix, overridable at build time with `CRM_API_BASE`.
pub const DEFAULT_API_BASE: &str = "/api/v1";

pub fn api_base() -> &'static str {
    option_env!("CRM_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Percent-encode a query or form component (RFC 3986 unreserved set kept).
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// `application/x-www-form-urlencoded` body (also used for query strings).
pub fn form_encode<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k.as_ref()), encode_component(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

/// Join an endpoint path and optional query pairs under the API base.
pub fn endpoint<K, V>(base: &str, path: &str, query: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let base = base.trim_end_matches('/');
    if query.is_empty() {
        format!("{base}{path}")
    } else {
        format!("{base}{path}?{}", form_encode(query))
    }
}

const NO_QUERY: &[(&str, &str)] = &[];

pub fn login_token_url(base: &str) -> String {
    endpoint(base, "/login/token", NO_QUERY)
}

pub fn clients_url(base: &str, query: &[(&'static str, String)]) -> String {
    endpoint(base, "/clients/", query)
}

pub fn client_url(base: &str, id: i64) -> String {
    endpoint(base, &format!("/clients/{id}"), NO_QUERY)
}

pub fn client_toggle_active_url(base: &str, id: i64, is_active: bool) -> String {
    endpoint(base, &format!("/clients/{id}/toggle_active"), &[("is_active", if is_active { "true" } else { "false" })])
}

pub fn products_url(base: &str, query: &[(&'static str, String)]) -> String {
    endpoint(base, "/products/", query)
}

pub fn product_url(base: &str, id: i64) -> String {
    endpoint(base, &format!("/products/{id}"), NO_QUERY)
}

pub fn audit_url(base: &str) -> String {
    endpoint(base, "/audit/", NO_QUERY)
}
