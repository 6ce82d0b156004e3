//! Debounced client lookup box used by the add-product page.
//!
//! Each keystroke starts a timer; only the timer for the latest edit issues a
//! request, and only the newest response reaches the result list (see
//! [`ClientSearchState`]).

#[cfg(test)]
#[path = "client_search_box_test.rs"]
mod client_search_box_test;

use leptos::prelude::*;

use crate::net::api::{ApiError, CrmApi};
use crate::net::types::ClientFilter;
use crate::state::auth::AuthState;
use crate::state::client_search::ClientSearchState;
#[cfg(feature = "hydrate")]
use crate::state::client_search::SEARCH_QUIESCENCE_MS;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::notify_error;
use crate::util::format::client_search_label;

pub const SEARCH_FAILED: &str = "Client search failed";

/// Run the search for `generation` once its quiescence window has elapsed.
///
/// Stale generations and blank input send nothing. A failed request still
/// counts as answered so an older response cannot land after it.
pub async fn settle_and_search(
    api: &dyn CrmApi,
    search: RwSignal<ClientSearchState>,
    generation: u64,
) -> Result<(), ApiError> {
    let Some(request) = search.try_update(|s| s.settle(generation)).flatten() else {
        return Ok(());
    };
    match api.list_clients(&ClientFilter::by_name(&request.query)).await {
        Ok(results) => {
            search.update(|s| {
                s.apply(request.seq, results);
            });
            Ok(())
        }
        Err(e) => {
            search.update(|s| {
                s.fail(request.seq);
            });
            Err(e)
        }
    }
}

#[component]
pub fn ClientSearchBox(search: RwSignal<ClientSearchState>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_input = move |ev: leptos::ev::Event| {
        let generation = search.try_update(|s| s.input(event_target_value(&ev))).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_QUIESCENCE_MS).await;
            let api = auth.get_untracked().api();
            if let Err(e) = settle_and_search(&api, search, generation).await {
                notify_error(toasts, e.user_message(SEARCH_FAILED));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (generation, auth, toasts);
    };

    view! {
        <div class="client-search">
            <label class="form__field">
                "Client"
                <input
                    class="input"
                    type="search"
                    placeholder="Start typing a name"
                    autocomplete="off"
                    prop:value=move || search.get().text
                    on:input=on_input
                />
            </label>
            <Show when=move || !search.get().results.is_empty()>
                <ul class="client-search__results">
                    <For each=move || search.get().results key=|client| client.id let:client>
                        <li>
                            <button
                                type="button"
                                class="client-search__option"
                                on:click={
                                    let client = client.clone();
                                    move |_| search.update(|s| s.select(client.clone()))
                                }
                            >
                                {client_search_label(&client)}
                            </button>
                        </li>
                    </For>
                </ul>
            </Show>
            {move || {
                search
                    .get()
                    .selected
                    .map(|client| {
                        view! {
                            <p class="client-search__selected">
                                "Selected: " {client.full_name} " (ID: " {client.id} ")"
                            </p>
                        }
                    })
            }}
        </div>
    }
}
