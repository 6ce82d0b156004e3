//! Modal for renaming a product or changing its status.

use leptos::prelude::*;

use crate::net::types::{Product, ProductStatus, ProductUpdate};

/// Edits `product` in place. `on_save` receives the validated update;
/// closing is left to the caller.
#[component]
pub fn ProductEditModal(
    product: Product,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_save: Callback<ProductUpdate>,
) -> impl IntoView {
    let name = RwSignal::new(product.name.clone());
    let status = RwSignal::new(product.status);
    let error = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let trimmed = name.get_untracked().trim().to_owned();
        if trimmed.is_empty() {
            error.set(Some("Enter a product name"));
            return;
        }
        error.set(None);
        on_save.run(ProductUpdate { name: trimmed, status: status.get_untracked() });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{format!("Edit product #{}", product.id)}</h2>
                <form class="form" on:submit=submit>
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
                    {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
