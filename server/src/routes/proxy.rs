//! Same-origin pass-through to the CRM REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls `/api/v1/...` on this server; requests are
//! forwarded verbatim (method, path, query, body) to `CRM_BACKEND_URL`. The
//! path is taken from the raw request URI so percent-escapes survive. Only
//! the headers the backend needs are copied. Upstream status codes and bodies
//! are returned unchanged so the client sees the backend's `detail` messages.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Path prefix shared by this server and the backend.
pub const API_PREFIX: &str = "/api/v1";

/// Request headers copied to the backend.
pub const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failed");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "detail": "Backend unavailable" }))).into_response()
    }
}

/// Still-encoded path below [`API_PREFIX`], e.g. `clients/a%3Fx`.
pub fn api_subpath(raw_path: &str) -> &str {
    raw_path.strip_prefix(API_PREFIX).unwrap_or(raw_path).trim_start_matches('/')
}

/// Backend URL for a proxied request.
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}{API_PREFIX}/{}", backend_url.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// `ANY /api/v1/{*path}`
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, api_subpath(uri.path()), uri.query());
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request = state.http.request(method, &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
