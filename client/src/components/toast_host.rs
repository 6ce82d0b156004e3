//! Bottom-right stack of toast notifications.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders the toast queue. Clicking a toast dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                <div
                    class=toast.kind.css_class()
                    role="status"
                    on:click=move |_| toasts.update(|t| t.dismiss(toast.id))
                >
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
