//! Route access rules and the single guard that evaluates them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation runs [`evaluate`] against [`ROUTE_RULES`]. The result is
//! a rendering decision only: hidden pages and redirects improve UX, while
//! the backend still rejects any call the user may not make.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::query::encode_component;
use crate::state::session::{Role, SessionUser};

pub const LOGIN_PATH: &str = "/login";
/// Landing page used after login and for role mismatches.
pub const HOME_PATH: &str = "/";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Rendered for everyone, logged in or not.
    Public,
    /// Any logged-in user.
    Authenticated,
    /// Logged-in users holding one of the listed roles.
    Roles(&'static [Role]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRule {
    /// Path pattern; `:name` segments match any single segment.
    pub pattern: &'static str,
    pub access: Access,
}

const ANY_ROLE: &[Role] = &[Role::User, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Access table for every page. First match wins; unmatched paths require a
/// logged-in user.
pub const ROUTE_RULES: &[RouteRule] = &[
    RouteRule { pattern: LOGIN_PATH, access: Access::Public },
    RouteRule { pattern: "/", access: Access::Roles(ANY_ROLE) },
    RouteRule { pattern: "/create-client", access: Access::Roles(ANY_ROLE) },
    RouteRule { pattern: "/client/:id/edit", access: Access::Roles(ANY_ROLE) },
    RouteRule { pattern: "/add-product", access: Access::Roles(ANY_ROLE) },
    RouteRule { pattern: "/products", access: Access::Roles(ANY_ROLE) },
    RouteRule { pattern: "/audit", access: Access::Roles(ADMIN_ONLY) },
];

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Not logged in: go to login, then come back to `from`.
    Login { from: String },
    /// Logged in without the required role: silently go home.
    Home,
}

impl GuardDecision {
    /// Where to navigate, if anywhere.
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::Login { from } => Some(login_path_with_return(from)),
            GuardDecision::Home => Some(HOME_PATH.to_owned()),
        }
    }
}

/// Access level for `path` according to [`ROUTE_RULES`].
pub fn access_for(path: &str) -> Access {
    ROUTE_RULES
        .iter()
        .find(|rule| pattern_matches(rule.pattern, path))
        .map_or(Access::Authenticated, |rule| rule.access)
}

/// Decide whether `path` may render for `user`.
pub fn evaluate(path: &str, user: Option<&SessionUser>) -> GuardDecision {
    let access = access_for(path);
    if access == Access::Public {
        return GuardDecision::Allow;
    }
    let Some(user) = user else {
        return GuardDecision::Login { from: path.to_owned() };
    };
    match access {
        Access::Roles(roles) if !roles.contains(&user.role) => GuardDecision::Home,
        _ => GuardDecision::Allow,
    }
}

/// Whether a nav link to `path` should be shown to `user`.
pub fn can_visit(path: &str, user: Option<&SessionUser>) -> bool {
    evaluate(path, user) == GuardDecision::Allow
}

/// Segment-wise match. Trailing slashes are ignored on both sides.
pub fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = segments(pattern);
    let mut path_segments = segments(path);
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) if p.starts_with(':') || p == s => {}
            _ => return false,
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// `/login?from=<path>`; the plain login path when returning home.
pub fn login_path_with_return(from: &str) -> String {
    if from.is_empty() || from == HOME_PATH {
        LOGIN_PATH.to_owned()
    } else {
        format!("{LOGIN_PATH}?from={}", encode_component(from))
    }
}

/// Where to go after a successful login.
///
/// `from` is the already-decoded query value. Only local absolute paths are
/// honoured; anything else (missing, external, protocol-relative, or the
/// login page itself) falls back to home.
pub fn post_login_target(from: Option<&str>) -> String {
    let Some(from) = from else {
        return HOME_PATH.to_owned();
    };
    let is_local = from.starts_with('/') && !from.starts_with("//") && !from.contains('\\');
    if !is_local || pattern_matches(LOGIN_PATH, from.split('?').next().unwrap_or_default()) {
        return HOME_PATH.to_owned();
    }
    from.to_owned()
}
