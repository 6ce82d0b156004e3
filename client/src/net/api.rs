//! REST client for the CRM backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! endpoints are only meaningful in the browser.
//!
//! Pages talk to the backend through the [`CrmApi`] trait so their request
//! flows can be exercised against a fake in unit tests.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Non-2xx responses keep the
//! backend's `detail` message so pages can surface it in a toast, falling
//! back to a fixed per-action message otherwise.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::query;
use super::token::TokenError;
use super::types::{
    AuditLogEntry, Client, ClientFilter, ClientInput, Product, ProductFilter, ProductInput, ProductUpdate,
    TokenResponse,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-supplied explanation, if the response carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for an error toast: the server's detail, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_owned()
    }
}

/// Pull a human-readable `detail` out of an error body.
///
/// The backend sends `{"detail": "..."}`; framework validation errors send a
/// list of `{"msg": "..."}` objects, which are joined.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> =
                items.iter().filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str)).collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<Payload, ApiError> {
    serde_json::to_string(value).map(Payload::Json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Backend operations used by the pages.
#[async_trait::async_trait(?Send)]
pub trait CrmApi {
    /// Exchange credentials for an access token.
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError>;
    async fn list_clients(&self, filter: &ClientFilter) -> Result<Vec<Client>, ApiError>;
    async fn get_client(&self, id: i64) -> Result<Client, ApiError>;
    async fn create_client(&self, input: &ClientInput) -> Result<Client, ApiError>;
    async fn update_client(&self, id: i64, input: &ClientInput) -> Result<Client, ApiError>;
    async fn delete_client(&self, id: i64) -> Result<(), ApiError>;
    /// Activate or deactivate a client (admin only on the backend).
    async fn set_client_active(&self, id: i64, is_active: bool) -> Result<Client, ApiError>;
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError>;
    async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError>;
    async fn update_product(&self, id: i64, input: &ProductUpdate) -> Result<Product, ApiError>;
    async fn delete_product(&self, id: i64) -> Result<(), ApiError>;
    /// Newest-first audit trail (admin only on the backend).
    async fn list_audit(&self) -> Result<Vec<AuditLogEntry>, ApiError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Payload {
    Json(String),
    Form(String),
}

impl Payload {
    #[cfg(feature = "hydrate")]
    fn content_type(&self) -> &'static str {
        match self {
            Payload::Json(_) => "application/json",
            Payload::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    #[cfg(feature = "hydrate")]
    fn into_body(self) -> String {
        match self {
            Payload::Json(body) | Payload::Form(body) => body,
        }
    }
}

/// HTTP implementation of [`CrmApi`] that attaches the bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
    token: Option<String>,
}

impl HttpApi {
    /// Client rooted at the build-time API base.
    pub fn new(token: Option<String>) -> Self {
        Self::with_base(query::api_base(), token)
    }

    pub fn with_base(base: impl Into<String>, token: Option<String>) -> Self {
        Self { base: base.into(), token }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `Authorization` header value, when logged in.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Send one request and return the raw success body.
    async fn call(&self, verb: Verb, url: &str, payload: Option<Payload>) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match verb {
                Verb::Get => Request::get(url),
                Verb::Post => Request::post(url),
                Verb::Put => Request::put(url),
                Verb::Patch => Request::patch(url),
                Verb::Delete => Request::delete(url),
            };
            builder = builder.header("Accept", "application/json");
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let request = match payload {
                Some(payload) => builder.header("Content-Type", payload.content_type()).body(payload.into_body()),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                return Err(ApiError::Status { status, detail: detail_from_body(&body) });
            }
            Ok(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, url, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, verb: Verb, url: &str, payload: Option<Payload>) -> Result<T, ApiError> {
        let body = self.call(verb, url, payload).await?;
        parse(&body)
    }
}

#[async_trait::async_trait(?Send)]
impl CrmApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = query::form_encode(&[("username", username), ("password", password)]);
        self.fetch(Verb::Post, &query::login_token_url(&self.base), Some(Payload::Form(form))).await
    }

    async fn list_clients(&self, filter: &ClientFilter) -> Result<Vec<Client>, ApiError> {
        self.fetch(Verb::Get, &query::clients_url(&self.base, &filter.query_pairs()), None).await
    }

    async fn get_client(&self, id: i64) -> Result<Client, ApiError> {
        self.fetch(Verb::Get, &query::client_url(&self.base, id), None).await
    }

    async fn create_client(&self, input: &ClientInput) -> Result<Client, ApiError> {
        self.fetch(Verb::Post, &query::clients_url(&self.base, &[]), Some(to_json(input)?)).await
    }

    async fn update_client(&self, id: i64, input: &ClientInput) -> Result<Client, ApiError> {
        self.fetch(Verb::Put, &query::client_url(&self.base, id), Some(to_json(input)?)).await
    }

    async fn delete_client(&self, id: i64) -> Result<(), ApiError> {
        self.call(Verb::Delete, &query::client_url(&self.base, id), None).await.map(drop)
    }

    async fn set_client_active(&self, id: i64, is_active: bool) -> Result<Client, ApiError> {
        self.fetch(Verb::Patch, &query::client_toggle_active_url(&self.base, id, is_active), None).await
    }

    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        self.fetch(Verb::Get, &query::products_url(&self.base, &filter.query_pairs()), None).await
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.fetch(Verb::Post, &query::products_url(&self.base, &[]), Some(to_json(input)?)).await
    }

    async fn update_product(&self, id: i64, input: &ProductUpdate) -> Result<Product, ApiError> {
        self.fetch(Verb::Put, &query::product_url(&self.base, id), Some(to_json(input)?)).await
    }

    async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.call(Verb::Delete, &query::product_url(&self.base, id), None).await.map(drop)
    }

    async fn list_audit(&self) -> Result<Vec<AuditLogEntry>, ApiError> {
        self.fetch(Verb::Get, &query::audit_url(&self.base), None).await
    }
}
