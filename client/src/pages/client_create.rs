//! New-client form.

#[cfg(test)]
#[path = "client_create_test.rs"]
mod client_create_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::client_form::{ClientDraft, ClientForm};
use crate::net::api::CrmApi;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::guard::HOME_PATH;

pub const CREATE_FAILED: &str = "Failed to create client";

/// Validate and send the draft. Returns the path to go to next.
pub async fn submit_new_client(api: &dyn CrmApi, draft: &ClientDraft) -> Result<&'static str, String> {
    let input = draft.validate().map_err(str::to_owned)?;
    api.create_client(&input).await.map_err(|e| e.user_message(CREATE_FAILED))?;
    Ok(HOME_PATH)
}

#[component]
pub fn ClientCreatePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let draft = RwSignal::new(ClientDraft::default());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = auth.get_untracked().api();
        let current = draft.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit_new_client(&api, &current).await {
                Ok(next) => {
                    notify_success(toasts, "Client created");
                    navigate(next, NavigateOptions::default());
                }
                Err(msg) => notify_error(toasts, msg),
            }
            busy.set(false);
        });
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"New client"</h1>
            </header>
            <ClientForm draft submit_label="Create" busy on_submit/>
        </section>
    }
}
