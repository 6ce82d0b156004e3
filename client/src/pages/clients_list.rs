//! Client list with filters and per-row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Default route. Everyone can filter and open the edit form; the
//! activate/deactivate and delete buttons are only rendered for admins
//! (the backend enforces the same rule).

#[cfg(test)]
#[path = "clients_list_test.rs"]
mod clients_list_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::CrmApi;
use crate::net::types::{Client, ClientFilter};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::confirm::confirm;
use crate::util::format::{active_label, toggle_button_label};

pub const LOAD_FAILED: &str = "Failed to load clients";
pub const DELETE_FAILED: &str = "Failed to delete client";
pub const TOGGLE_FAILED: &str = "Failed to change client status";

pub async fn load_clients(api: &dyn CrmApi, filter: &ClientFilter) -> Result<Vec<Client>, String> {
    api.list_clients(filter).await.map_err(|e| e.user_message(LOAD_FAILED))
}

/// Delete a client; returns the success toast text.
pub async fn delete_client(api: &dyn CrmApi, id: i64) -> Result<&'static str, String> {
    api.delete_client(id).await.map_err(|e| e.user_message(DELETE_FAILED))?;
    Ok("Client deleted")
}

/// Flip a client's active flag; returns the success toast text.
pub async fn toggle_client(api: &dyn CrmApi, client: &Client) -> Result<&'static str, String> {
    let activate = !client.is_active;
    api.set_client_active(client.id, activate).await.map_err(|e| e.user_message(TOGGLE_FAILED))?;
    Ok(if activate { "Client activated" } else { "Client deactivated" })
}

pub fn edit_path(client: &Client) -> String {
    format!("/client/{}/edit", client.id)
}

pub fn delete_prompt(client: &Client) -> String {
    format!("Delete client \"{}\"?", client.full_name)
}

pub fn toggle_prompt(client: &Client) -> String {
    let verb = if client.is_active { "Deactivate" } else { "Activate" };
    format!("{verb} client \"{}\"?", client.full_name)
}

#[component]
pub fn ClientsListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let clients = RwSignal::new(Vec::<Client>::new());
    let loading = RwSignal::new(false);
    let filter_name = RwSignal::new(String::new());
    let filter_phone = RwSignal::new(String::new());

    let refresh = move || {
        let filter = ClientFilter::from_form(&filter_name.get_untracked(), &filter_phone.get_untracked());
        let api = auth.get_untracked().api();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match load_clients(&api, &filter).await {
                Ok(list) => clients.set(list),
                Err(msg) => notify_error(toasts, msg),
            }
            loading.set(false);
        });
    };

    Effect::new(move || refresh());

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        refresh();
    };

    let on_reset = move |_| {
        filter_name.set(String::new());
        filter_phone.set(String::new());
        refresh();
    };

    let on_delete = move |client: Client| {
        if !confirm(&delete_prompt(&client)) {
            return;
        }
        let api = auth.get_untracked().api();
        leptos::task::spawn_local(async move {
            match delete_client(&api, client.id).await {
                Ok(msg) => notify_success(toasts, msg),
                Err(msg) => notify_error(toasts, msg),
            }
            refresh();
        });
    };

    let on_toggle = move |client: Client| {
        if !confirm(&toggle_prompt(&client)) {
            return;
        }
        let api = auth.get_untracked().api();
        leptos::task::spawn_local(async move {
            match toggle_client(&api, &client).await {
                Ok(msg) => notify_success(toasts, msg),
                Err(msg) => notify_error(toasts, msg),
            }
            refresh();
        });
    };

    let is_admin = move || auth.get().is_admin();

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Clients"</h1>
                <A href="/create-client" attr:class="btn btn--primary">
                    "New client"
                </A>
            </header>
            <form class="filters" on:submit=on_filter>
                <input
                    class="input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || filter_name.get()
                    on:input=move |ev| filter_name.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="text"
                    placeholder="Phone"
                    prop:value=move || filter_phone.get()
                    on:input=move |ev| filter_phone.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Search"</button>
                <button class="btn btn--ghost" type="button" on:click=on_reset>"Reset"</button>
            </form>
            <Show
                when=move || !clients.get().is_empty()
                fallback=move || {
                    view! {
                        <p class="empty">{move || if loading.get() { "Loading..." } else { "No clients found." }}</p>
                    }
                }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Full name"</th>
                            <th>"Phone"</th>
                            <th>"Sex"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || clients.get()
                            key=|c| (c.id, c.is_active)
                            children=move |client: Client| {
                                let inactive = !client.is_active;
                                let edit_href = edit_path(&client);
                                let toggle_label = toggle_button_label(&client);
                                let toggle_target = client.clone();
                                let delete_target = client.clone();
                                view! {
                                    <tr class:table__row--inactive=inactive>
                                        <td>{client.id}</td>
                                        <td>{client.full_name}</td>
                                        <td>{client.phone}</td>
                                        <td>{client.sex.label()}</td>
                                        <td>{active_label(client.is_active)}</td>
                                        <td class="table__actions">
                                            <A href=edit_href attr:class="btn btn--small">
                                                "Edit"
                                            </A>
                                            <Show when=is_admin>
                                                <button
                                                    class="btn btn--small"
                                                    on:click={
                                                        let target = toggle_target.clone();
                                                        move |_| on_toggle(target.clone())
                                                    }
                                                >
                                                    {toggle_label}
                                                </button>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    on:click={
                                                        let target = delete_target.clone();
                                                        move |_| on_delete(target.clone())
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
