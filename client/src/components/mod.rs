//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers set
//! up in `App`.

pub mod client_form;
pub mod client_search_box;
pub mod layout;
pub mod product_edit_modal;
pub mod toast_host;
