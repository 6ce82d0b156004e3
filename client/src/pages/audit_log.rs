//! Audit trail table, newest first. Admin only.

#[cfg(test)]
#[path = "audit_log_test.rs"]
mod audit_log_test;

use leptos::prelude::*;

use crate::net::api::CrmApi;
use crate::net::types::AuditLogEntry;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastState, notify_error};
use crate::util::format::{audit_user_cell, format_timestamp, pretty_changes};

pub const LOAD_FAILED: &str = "Failed to load audit log";

pub async fn load_audit(api: &dyn CrmApi) -> Result<Vec<AuditLogEntry>, String> {
    api.list_audit().await.map_err(|e| e.user_message(LOAD_FAILED))
}

#[component]
pub fn AuditLogPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let entries = RwSignal::new(Vec::<AuditLogEntry>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let api = auth.get_untracked().api();
        leptos::task::spawn_local(async move {
            match load_audit(&api).await {
                Ok(list) => entries.set(list),
                Err(msg) => notify_error(toasts, msg),
            }
            loading.set(false);
        });
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Audit log"</h1>
            </header>
            <Show
                when=move || !entries.get().is_empty()
                fallback=move || {
                    view! {
                        <p class="empty">{move || if loading.get() { "Loading..." } else { "No entries yet." }}</p>
                    }
                }
            >
                <table class="table table--audit">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Time"</th>
                            <th>"User"</th>
                            <th>"Action"</th>
                            <th>"Model"</th>
                            <th>"Model ID"</th>
                            <th>"Changes"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || entries.get() key=|entry| entry.id let:entry>
                            <tr>
                                <td>{entry.id}</td>
                                <td>{format_timestamp(&entry.timestamp)}</td>
                                <td>{audit_user_cell(&entry)}</td>
                                <td>{entry.action.clone()}</td>
                                <td>{entry.target_model.clone()}</td>
                                <td>{entry.target_id}</td>
                                <td>
                                    <pre class="audit__changes">{pretty_changes(&entry.changes)}</pre>
                                </td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
