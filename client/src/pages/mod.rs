//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Backend round trips are plain async functions over
//! `&dyn CrmApi` so they can be driven by tests without a browser.

pub mod audit_log;
pub mod client_create;
pub mod client_edit;
pub mod clients_list;
pub mod login;
pub mod not_found;
pub mod product_add;
pub mod products_list;
