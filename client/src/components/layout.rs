//! Authenticated shell: navigation bar plus the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page is a child of this layout, so the guard runs in one
//! place. Until the session has been restored from storage nothing is
//! rendered and no redirect happens, which keeps server output and the first
//! hydrated frame identical.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::{AuthState, sign_out};
use crate::state::session::SessionStore;
use crate::util::guard::{self, GuardDecision, LOGIN_PATH};

#[component]
pub fn Layout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let state = auth.get();
        if !state.restored {
            return None;
        }
        Some(guard::evaluate(&location.pathname.get(), state.user()))
    });

    let navigate_guard = navigate.clone();
    Effect::new(move || {
        if let Some(target) = decision.get().and_then(|d| d.redirect_path()) {
            navigate_guard(&target, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let on_logout = move |_| {
        sign_out(auth, &store);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let show_audit = move || guard::can_visit("/audit", auth.get().user());
    let login_label = move || auth.get().user().map(|u| u.login.clone()).unwrap_or_default();

    view! {
        <Show when=move || decision.get() == Some(GuardDecision::Allow)>
            <div class="layout">
                <nav class="topnav">
                    <span class="topnav__brand">"CRM"</span>
                    <A href="/">"Clients"</A>
                    <A href="/create-client">"New client"</A>
                    <A href="/products">"Products"</A>
                    <A href="/add-product">"New product"</A>
                    <Show when=show_audit>
                        <A href="/audit">"Audit log"</A>
                    </Show>
                    <span class="topnav__spacer"></span>
                    <button class="btn btn--ghost" on:click=on_logout.clone()>
                        {move || format!("Log out ({})", login_label())}
                    </button>
                </nav>
                <main class="layout__content">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
