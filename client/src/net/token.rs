//! Local decoding of the bearer token's subject claim.
//!
//! The token is never verified here. The decoded subject only labels the UI
//! and picks which admin controls to show; the backend re-checks every call.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::state::session::{Role, SessionUser};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not JSON: {0}")]
    Payload(String),
    #[error("token has no subject claim")]
    MissingSubject,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: Option<String>,
}

/// Extract the `sub` claim from a JWT without checking its signature.
pub fn decode_subject(token: &str) -> Result<String, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    // Some issuers pad base64url; the no-pad engine rejects `=`.
    let payload = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|e| TokenError::Encoding(e.to_string()))?;
    let claims: Claims = serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))?;
    claims.sub.filter(|s| !s.is_empty()).ok_or(TokenError::MissingSubject)
}

/// Display identity for a freshly issued token.
pub fn user_from_token(token: &str) -> Result<SessionUser, TokenError> {
    let login = decode_subject(token)?;
    let role = Role::from_subject(&login);
    Ok(SessionUser { login, role })
}
