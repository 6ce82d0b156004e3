use super::*;

fn ivan() -> SessionUser {
    SessionUser { login: "ivan".to_owned(), role: Role::User }
}

// =============================================================
// Role derivation
// =============================================================

#[test]
fn role_from_subject_only_admin_literal_is_admin() {
    assert_eq!(Role::from_subject("admin"), Role::Admin);
    assert_eq!(Role::from_subject("ivan"), Role::User);
    assert_eq!(Role::from_subject(""), Role::User);
}

#[test]
fn session_user_serializes_as_login_and_role() {
    let raw = serde_json::to_value(SessionUser { login: "admin".to_owned(), role: Role::Admin }).unwrap();
    assert_eq!(raw, serde_json::json!({ "login": "admin", "role": "admin" }));
}

// =============================================================
// login / logout / restore
// =============================================================

#[test]
fn default_session_is_unauthenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn login_persists_token_and_user() {
    let store = MemoryStore::new();
    let session = login(&store, "tok-1", ivan());
    assert_eq!(session.token.as_deref(), Some("tok-1"));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert_eq!(store.get(USER_KEY).as_deref(), Some(r#"{"login":"ivan","role":"user"}"#));
}

#[test]
fn login_overwrites_previous_session() {
    let store = MemoryStore::new();
    login(&store, "tok-1", ivan());
    let admin = SessionUser { login: "admin".to_owned(), role: Role::Admin };
    let session = login(&store, "tok-2", admin.clone());
    assert_eq!(session.user, Some(admin.clone()));
    assert_eq!(restore(&store).user, Some(admin));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-2"));
}

#[test]
fn login_then_reload_restores_equivalent_session() {
    let store = MemoryStore::new();
    let session = login(&store, "tok-1", ivan());
    let restored = restore(&store);
    assert_eq!(restored, session);
    assert!(restored.is_authenticated());
    assert!(!restored.is_admin());
}

#[test]
fn logout_removes_persisted_entries() {
    let store = MemoryStore::new();
    login(&store, "tok-1", ivan());
    let session = logout(&store);
    assert_eq!(session, Session::default());
    assert!(store.is_empty());
    assert!(!restore(&store).is_authenticated());
}

#[test]
fn logout_is_idempotent() {
    let store = MemoryStore::new();
    logout(&store);
    assert_eq!(logout(&store), Session::default());
    assert!(store.is_empty());
}

#[test]
fn restore_from_empty_store_is_unauthenticated() {
    assert_eq!(restore(&MemoryStore::new()), Session::default());
}

#[test]
fn restore_requires_both_entries() {
    let token_only = MemoryStore::with_entries([(TOKEN_KEY, "tok")]);
    assert_eq!(restore(&token_only), Session::default());

    let user_only = MemoryStore::with_entries([(USER_KEY, r#"{"login":"ivan","role":"user"}"#)]);
    assert_eq!(restore(&user_only), Session::default());
}

#[test]
fn restore_treats_empty_entries_as_missing() {
    let empty_token = MemoryStore::with_entries([(TOKEN_KEY, ""), (USER_KEY, r#"{"login":"ivan","role":"user"}"#)]);
    assert!(!restore(&empty_token).is_authenticated());

    let empty_user = MemoryStore::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, "")]);
    assert_eq!(restore(&empty_user), Session::default());
}

#[test]
fn restore_with_non_json_user_yields_empty_session() {
    let store = MemoryStore::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, "not-json")]);
    let session = restore(&store);
    assert_eq!(session, Session::default());
    assert!(store.is_empty());
}

#[test]
fn restore_with_unknown_role_yields_empty_session() {
    let store = MemoryStore::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, r#"{"login":"x","role":"root"}"#)]);
    assert!(!restore(&store).is_authenticated());
}

#[test]
fn session_store_handle_delegates_to_backend() {
    let handle = SessionStore::new(MemoryStore::new());
    login(handle.backend(), "tok", ivan());
    assert_eq!(restore(handle.backend()).user, Some(ivan()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_store_is_inert_off_browser() {
    let store = LocalStorageStore;
    store.set(TOKEN_KEY, "tok");
    assert_eq!(store.get(TOKEN_KEY), None);
    store.remove(TOKEN_KEY);
}
