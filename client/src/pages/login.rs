//! Login page: username + password exchanged for a bearer token.
//!
//! On success the session is persisted and the user is sent back to the page
//! that bounced them here (`?from=`), or home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::{ApiError, CrmApi, HttpApi};
use crate::net::token::user_from_token;
use crate::state::auth::{AuthState, sign_in};
use crate::state::session::{SessionStore, SessionUser};
use crate::state::toast::{ToastState, notify_error};
use crate::util::guard::post_login_target;

pub const LOGIN_FAILED: &str = "Login failed";

/// Check the form before sending anything.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Exchange credentials for a token and derive the session user from it.
pub async fn authenticate(
    api: &dyn CrmApi,
    username: &str,
    password: &str,
) -> Result<(String, SessionUser), ApiError> {
    let response = api.login(username, password).await?;
    let user = user_from_token(&response.access_token)?;
    Ok((response.access_token, user))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (username_value, password_value) =
            match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
                Ok(creds) => creds,
                Err(msg) => {
                    notify_error(toasts, msg);
                    return;
                }
            };
        let target = post_login_target(query.get_untracked().get("from").as_deref());
        busy.set(true);

        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let api = HttpApi::new(None);
            match authenticate(&api, &username_value, &password_value).await {
                Ok((token, user)) => {
                    sign_in(auth, &store, &token, user);
                    password.set(String::new());
                    navigate(&target, NavigateOptions { replace: true, ..Default::default() });
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    notify_error(toasts, e.user_message(LOGIN_FAILED));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CRM"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
