use super::*;
use crate::state::session::{MemoryStore, Role, TOKEN_KEY, USER_KEY};

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user().is_none());
    assert!(state.token().is_none());
}

#[test]
fn auth_state_default_not_restored() {
    assert!(!AuthState::default().restored);
}

#[test]
fn restored_from_marks_state_restored() {
    let store = MemoryStore::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, r#"{"login":"admin","role":"admin"}"#)]);
    let state = AuthState::restored_from(&store);
    assert!(state.restored);
    assert!(state.is_admin());
    assert_eq!(state.token(), Some("tok"));
}

#[test]
fn restored_from_corrupt_store_is_restored_but_anonymous() {
    let store = MemoryStore::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, "not-json")]);
    let state = AuthState::restored_from(&store);
    assert!(state.restored);
    assert!(state.user().is_none());
}

// =============================================================
// Signal mutations
// =============================================================

#[test]
fn sign_in_then_sign_out_updates_signal_and_store() {
    let auth = RwSignal::new(AuthState::default());
    let store = SessionStore::new(MemoryStore::new());

    sign_in(auth, &store, "tok", SessionUser { login: "ivan".to_owned(), role: Role::User });
    let state = auth.get_untracked();
    assert!(state.restored);
    assert_eq!(state.user().map(|u| u.login.as_str()), Some("ivan"));
    assert_eq!(store.backend().get(TOKEN_KEY).as_deref(), Some("tok"));

    sign_out(auth, &store);
    assert!(auth.get_untracked().user().is_none());
    assert_eq!(store.backend().get(TOKEN_KEY), None);
}
