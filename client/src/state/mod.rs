//! Application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides `RwSignal<AuthState>`, `RwSignal<ToastState>` and the
//! `SessionStore`. Search state is page-scoped.

pub mod auth;
pub mod client_search;
pub mod session;
pub mod toast;
