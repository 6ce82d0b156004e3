//! Session model and its persisted form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only client-owned state that outlives a page load. It
//! is read and replaced wholesale: `login`, `logout` and `restore` are plain
//! functions over a [`KeyValueStore`], and the application root decides which
//! store backs them (browser `localStorage` in hydrate builds, memory
//! elsewhere).
//!
//! The role stored here is a display hint derived from the token subject. It
//! only hides controls; the backend authorizes every request itself.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-encoded [`SessionUser`].
pub const USER_KEY: &str = "user";

/// Subject value that maps to the admin role.
const ADMIN_SUBJECT: &str = "admin";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Derive the UI role from a token subject: only the literal `admin`
    /// subject is treated as an administrator.
    pub fn from_subject(subject: &str) -> Self {
        if subject == ADMIN_SUBJECT { Role::Admin } else { Role::User }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Identity shown in the UI for the logged-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub login: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Current authentication session. Empty when logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_admin)
    }
}

/// Durable string key/value storage backing the session.
///
/// Writes are best-effort: a store that cannot persist (quota, private mode)
/// drops the write and the session simply won't survive a reload.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store used by tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: Mutex::new(map) }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |m| m.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Browser `localStorage`. Every call no-ops outside hydrate builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        crate::util::storage::get_item(key)
    }

    fn set(&self, key: &str, value: &str) {
        crate::util::storage::set_item(key, value);
    }

    fn remove(&self, key: &str) {
        crate::util::storage::remove_item(key);
    }
}

/// Shared handle to the store chosen at the application root.
#[derive(Clone)]
pub struct SessionStore(Arc<dyn KeyValueStore>);

impl SessionStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Arc::new(store))
    }

    /// The store used by the running build: `localStorage` in the browser,
    /// memory on the server.
    pub fn platform_default() -> Self {
        if cfg!(feature = "hydrate") { Self::new(LocalStorageStore) } else { Self::new(MemoryStore::new()) }
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

/// Replace the session with `token`/`user` and persist both.
///
/// The token is stored as given; nothing checks its shape or expiry.
pub fn login(store: &dyn KeyValueStore, token: &str, user: SessionUser) -> Session {
    store.set(TOKEN_KEY, token);
    match serde_json::to_string(&user) {
        Ok(raw) => store.set(USER_KEY, &raw),
        Err(e) => leptos::logging::warn!("failed to serialize session user: {e}"),
    }
    Session { token: Some(token.to_owned()), user: Some(user) }
}

/// Clear persisted entries and return the empty session. Idempotent.
pub fn logout(store: &dyn KeyValueStore) -> Session {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
    Session::default()
}

/// Rebuild the session from storage at startup.
///
/// Both entries must be present and non-empty. A user entry that fails to
/// parse is logged, removed along with its token, and treated as logged
/// out; this never returns an error.
pub fn restore(store: &dyn KeyValueStore) -> Session {
    let present = |key: &str| store.get(key).filter(|value: &String| !value.is_empty());
    let (Some(token), Some(raw_user)) = (present(TOKEN_KEY), present(USER_KEY)) else {
        return Session::default();
    };
    match serde_json::from_str::<SessionUser>(&raw_user) {
        Ok(user) => Session { token: Some(token), user: Some(user) },
        Err(e) => {
            leptos::logging::warn!("discarding stored session user: {e}");
            logout(store)
        }
    }
}
