//! Product list with filters, an edit modal and admin-only delete.

#[cfg(test)]
#[path = "products_list_test.rs"]
mod products_list_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::product_edit_modal::ProductEditModal;
use crate::net::api::CrmApi;
use crate::net::types::{Product, ProductFilter, ProductStatus, ProductUpdate};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::confirm::confirm;

pub const LOAD_FAILED: &str = "Failed to load products";
pub const UPDATE_FAILED: &str = "Failed to update product";
pub const DELETE_FAILED: &str = "Failed to delete product";

pub async fn load_products(api: &dyn CrmApi, filter: &ProductFilter) -> Result<Vec<Product>, String> {
    api.list_products(filter).await.map_err(|e| e.user_message(LOAD_FAILED))
}

pub async fn save_product(api: &dyn CrmApi, id: i64, update: &ProductUpdate) -> Result<&'static str, String> {
    api.update_product(id, update).await.map_err(|e| e.user_message(UPDATE_FAILED))?;
    Ok("Product updated")
}

pub async fn remove_product(api: &dyn CrmApi, id: i64) -> Result<&'static str, String> {
    api.delete_product(id).await.map_err(|e| e.user_message(DELETE_FAILED))?;
    Ok("Product deleted")
}

#[component]
pub fn ProductsListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(false);
    let filter_name = RwSignal::new(String::new());
    let filter_client = RwSignal::new(String::new());
    let filter_status = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<Product>);
    let saving = RwSignal::new(false);

    let refresh = move || {
        let filter = ProductFilter::from_form(
            &filter_name.get_untracked(),
            &filter_status.get_untracked(),
            &filter_client.get_untracked(),
        );
        let api = auth.get_untracked().api();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match load_products(&api, &filter).await {
                Ok(list) => products.set(list),
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
        filter_client.set(String::new());
        filter_status.set(String::new());
        refresh();
    };

    let on_delete = move |product: Product| {
        if !confirm(&format!("Delete product \"{}\"?", product.name)) {
            return;
        }
        let api = auth.get_untracked().api();
        leptos::task::spawn_local(async move {
            match remove_product(&api, product.id).await {
                Ok(msg) => notify_success(toasts, msg),
                Err(msg) => notify_error(toasts, msg),
            }
            refresh();
        });
    };

    let on_cancel_edit = Callback::new(move |()| editing.set(None));
    let on_save = Callback::new(move |update: ProductUpdate| {
        let Some(product) = editing.get_untracked() else {
            return;
        };
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let api = auth.get_untracked().api();
        leptos::task::spawn_local(async move {
            match save_product(&api, product.id, &update).await {
                Ok(msg) => {
                    notify_success(toasts, msg);
                    editing.set(None);
                    refresh();
                }
                Err(msg) => notify_error(toasts, msg),
            }
            saving.set(false);
        });
    });

    let is_admin = move || auth.get().is_admin();

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Products"</h1>
                <A href="/add-product" attr:class="btn btn--primary">
                    "New product"
                </A>
            </header>
            <form class="filters" on:submit=on_filter>
                <input
                    class="input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || filter_name.get()
                    on:input=move |ev| filter_name.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="number"
                    min="1"
                    placeholder="Client ID"
                    prop:value=move || filter_client.get()
                    on:input=move |ev| filter_client.set(event_target_value(&ev))
                />
                <select
                    class="input"
                    prop:value=move || filter_status.get()
                    on:change=move |ev| filter_status.set(event_target_value(&ev))
                >
                    <option value="">"All"</option>
                    {ProductStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn" type="submit">"Search"</button>
                <button class="btn btn--ghost" type="button" on:click=on_reset>"Reset"</button>
            </form>
            <Show
                when=move || !products.get().is_empty()
                fallback=move || {
                    view! {
                        <p class="empty">{move || if loading.get() { "Loading..." } else { "No products found." }}</p>
                    }
                }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th>"Client ID"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || products.get() key=|p| (p.id, p.name.clone(), p.status) let:product>
                            <tr>
                                <td>{product.id}</td>
                                <td>{product.name.clone()}</td>
                                <td>{product.status.label()}</td>
                                <td>{product.client_id}</td>
                                <td class="table__actions">
                                    <button
                                        class="btn btn--small"
                                        on:click={
                                            let product = product.clone();
                                            move |_| editing.set(Some(product.clone()))
                                        }
                                    >
                                        "Edit"
                                    </button>
                                    <Show when=is_admin>
                                        <button
                                            class="btn btn--small btn--danger"
                                            on:click={
                                                let product = product.clone();
                                                move |_| on_delete(product.clone())
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </Show>
                                </td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Show>
            {move || {
                editing
                    .get()
                    .map(|product| {
                        view! {
                            <ProductEditModal product busy=saving on_cancel=on_cancel_edit on_save/>
                        }
                    })
            }}
        </section>
    }
}
