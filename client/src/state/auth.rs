//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` at the application root and read by the
//! route guard, the layout and every page that hides admin-only controls.
//! Mutations go through [`sign_in`] / [`sign_out`] so the signal and the
//! persisted store never disagree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::{self, KeyValueStore, Session, SessionStore, SessionUser};
use crate::net::api::HttpApi;

/// Reactive authentication state.
///
/// `restored` stays false during server rendering and until the browser has
/// read `localStorage`; guards wait for it before redirecting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub restored: bool,
}

impl AuthState {
    /// State after reading the persisted session.
    pub fn restored_from(store: &dyn KeyValueStore) -> Self {
        Self { session: session::restore(store), restored: true }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// Backend client carrying the current bearer token.
    pub fn api(&self) -> HttpApi {
        HttpApi::new(self.session.token.clone())
    }
}

/// Persist a new session and publish it.
pub fn sign_in(auth: RwSignal<AuthState>, store: &SessionStore, token: &str, user: SessionUser) {
    let session = session::login(store.backend(), token, user);
    auth.set(AuthState { session, restored: true });
}

/// Drop the persisted session and publish the empty one.
pub fn sign_out(auth: RwSignal<AuthState>, store: &SessionStore) {
    let session = session::logout(store.backend());
    auth.set(AuthState { session, restored: true });
}
