//! Page shown for paths no route claims.
//!
//! Nested under the layout so unknown paths still pass through the guard.

#[cfg(test)]
#[path = "not_found_test.rs"]
mod not_found_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::guard::HOME_PATH;

pub const NOT_FOUND_MESSAGE: &str = "Page not found.";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page">
            <p>{NOT_FOUND_MESSAGE}</p>
            <A href=HOME_PATH>"Back to clients"</A>
        </section>
    }
}
