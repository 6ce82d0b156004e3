//! # crm-client
//!
//! Leptos + WASM admin console for the CRM backend: client and product
//! management, an audit log for administrators, and the session handling
//! that gates it all.
//!
//! Pages talk to the backend through [`net::api::CrmApi`]; shared state lives
//! in `RwSignal` contexts provided by [`app::App`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
