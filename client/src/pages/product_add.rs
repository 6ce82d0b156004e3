//! New-product form with a debounced owner lookup.

#[cfg(test)]
#[path = "product_add_test.rs"]
mod product_add_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::client_search_box::ClientSearchBox;
use crate::net::api::CrmApi;
use crate::net::types::{ProductInput, ProductStatus};
use crate::state::auth::AuthState;
use crate::state::client_search::ClientSearchState;
use crate::state::toast::{ToastState, notify_error, notify_success};

pub const PRODUCTS_PATH: &str = "/products";
pub const CREATE_FAILED: &str = "Failed to create product";
pub const NO_CLIENT_SELECTED: &str = "Select a client from the search results";

/// Build the request body, or the message explaining why it can't be sent.
pub fn product_input(name: &str, status: ProductStatus, client_id: Option<i64>) -> Result<ProductInput, &'static str> {
    let Some(client_id) = client_id else {
        return Err(NO_CLIENT_SELECTED);
    };
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a product name");
    }
    Ok(ProductInput { name: name.to_owned(), status, client_id })
}

/// Validate and create the product. Returns the path to go to next.
pub async fn submit_new_product(
    api: &dyn CrmApi,
    name: &str,
    status: ProductStatus,
    client_id: Option<i64>,
) -> Result<&'static str, String> {
    let input = product_input(name, status, client_id).map_err(str::to_owned)?;
    api.create_product(&input).await.map_err(|e| e.user_message(CREATE_FAILED))?;
    Ok(PRODUCTS_PATH)
}

#[component]
pub fn ProductAddPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let search = RwSignal::new(ClientSearchState::default());
    let name = RwSignal::new(String::new());
    let status = RwSignal::new(ProductStatus::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = auth.get_untracked().api();
        let name_value = name.get_untracked();
        let status_value = status.get_untracked();
        let client_id = search.get_untracked().selected_id();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit_new_product(&api, &name_value, status_value, client_id).await {
                Ok(next) => {
                    notify_success(toasts, "Product created");
                    navigate(next, NavigateOptions::default());
                }
                Err(msg) => notify_error(toasts, msg),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"New product"</h1>
            </header>
            <form class="form" on:submit=on_submit>
                <ClientSearchBox search/>
                <label class="form__field">
                    "Name"
                    <input
                        class="input"
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Status"
                    <select
                        class="input"
                        on:change=move |ev| {
                            if let Some(value) = ProductStatus::parse(&event_target_value(&ev)) {
                                status.set(value);
                            }
                        }
                    >
                        {ProductStatus::ALL
                            .into_iter()
                            .map(|value| {
                                view! {
                                    <option value=value.as_str() selected=move || status.get() == value>
                                        {value.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Create"
                </button>
            </form>
        </section>
    }
}
