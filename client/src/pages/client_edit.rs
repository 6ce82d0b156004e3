//! Edit form for an existing client.

#[cfg(test)]
#[path = "client_edit_test.rs"]
mod client_edit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::client_form::{ClientDraft, ClientForm};
use crate::net::api::CrmApi;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::guard::HOME_PATH;

pub const LOAD_FAILED: &str = "Failed to load client";
pub const UPDATE_FAILED: &str = "Failed to update client";

/// Parse the `:id` route segment.
pub fn parse_client_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id| *id > 0)
}

pub async fn load_client_draft(api: &dyn CrmApi, id: i64) -> Result<ClientDraft, String> {
    let client = api.get_client(id).await.map_err(|e| e.user_message(LOAD_FAILED))?;
    Ok(ClientDraft::from_client(&client))
}

/// Validate and save the draft. Returns the path to go to next.
pub async fn submit_client_update(api: &dyn CrmApi, id: i64, draft: &ClientDraft) -> Result<&'static str, String> {
    let input = draft.validate().map_err(str::to_owned)?;
    api.update_client(id, &input).await.map_err(|e| e.user_message(UPDATE_FAILED))?;
    Ok(HOME_PATH)
}

#[component]
pub fn ClientEditPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let draft = RwSignal::new(ClientDraft::default());
    let loaded = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let client_id = Memo::new(move |_| parse_client_id(params.get().get("id").as_deref()));

    let navigate_load = navigate.clone();
    Effect::new(move || {
        let Some(id) = client_id.get() else {
            notify_error(toasts, LOAD_FAILED);
            navigate_load(HOME_PATH, NavigateOptions { replace: true, ..Default::default() });
            return;
        };
        loaded.set(false);
        let api = auth.get_untracked().api();
        let navigate = navigate_load.clone();
        leptos::task::spawn_local(async move {
            match load_client_draft(&api, id).await {
                Ok(loaded_draft) => {
                    draft.set(loaded_draft);
                    loaded.set(true);
                }
                Err(msg) => {
                    notify_error(toasts, msg);
                    navigate(HOME_PATH, NavigateOptions { replace: true, ..Default::default() });
                }
            }
        });
    });

    let on_submit = Callback::new(move |()| {
        let Some(id) = client_id.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = auth.get_untracked().api();
        let current = draft.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit_client_update(&api, id, &current).await {
                Ok(next) => {
                    notify_success(toasts, "Client updated");
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
                <h1>{move || client_id.get().map(|id| format!("Edit client #{id}")).unwrap_or_default()}</h1>
                <A href=HOME_PATH attr:class="btn btn--ghost">
                    "Cancel"
                </A>
            </header>
            <Show when=move || loaded.get() fallback=|| view! { <p class="empty">"Loading..."</p> }>
                <ClientForm draft submit_label="Save" busy on_submit/>
            </Show>
        </section>
    }
}
