//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    audit_log::AuditLogPage, client_create::ClientCreatePage, client_edit::ClientEditPage,
    clients_list::ClientsListPage, login::LoginPage, not_found::NotFoundPage, product_add::ProductAddPage,
    products_list::ProductsListPage,
};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, auth state and toast queue, restores the
/// persisted session once hydrated, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::platform_default();
    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(store.clone());
    provide_context(auth);
    provide_context(toasts);

    // Effects only run in the browser, where localStorage is readable.
    Effect::new(move || {
        if !auth.get_untracked().restored {
            auth.set(AuthState::restored_from(store.backend()));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/crm-console.css"/>
        <Title text="CRM"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=ClientsListPage/>
                    <Route path=StaticSegment("create-client") view=ClientCreatePage/>
                    <Route
                        path=(StaticSegment("client"), ParamSegment("id"), StaticSegment("edit"))
                        view=ClientEditPage
                    />
                    <Route path=StaticSegment("add-product") view=ProductAddPage/>
                    <Route path=StaticSegment("products") view=ProductsListPage/>
                    <Route path=StaticSegment("audit") view=AuditLogPage/>
                    <Route path=WildcardSegment("rest") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
            <ToastHost/>
        </Router>
    }
}
