use crate::state::session::{Role, SessionUser};
use crate::util::guard::{GuardDecision, evaluate};

fn signed_in(role: Role) -> SessionUser {
    SessionUser { login: "anna".to_owned(), role }
}

#[test]
fn unknown_path_sends_anonymous_visitor_to_login() {
    let decision = evaluate("/no/such/page", None);
    assert_eq!(decision.redirect_path().as_deref(), Some("/login?from=%2Fno%2Fsuch%2Fpage"));
}

#[test]
fn unknown_path_renders_for_any_signed_in_role() {
    for role in [Role::User, Role::Admin] {
        assert_eq!(evaluate("/no/such/page", Some(&signed_in(role))), GuardDecision::Allow);
    }
}

