//! Client create/edit form shared by both client pages.

#[cfg(test)]
#[path = "client_form_test.rs"]
mod client_form_test;

use leptos::prelude::*;

use crate::net::types::{Client, ClientInput, Sex};

/// Editable form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub full_name: String,
    pub phone: String,
    pub sex: Sex,
}

impl ClientDraft {
    pub fn from_client(client: &Client) -> Self {
        Self { full_name: client.full_name.clone(), phone: client.phone.clone(), sex: client.sex }
    }

    /// Trimmed request body, or the message to show when a field is empty.
    pub fn validate(&self) -> Result<ClientInput, &'static str> {
        let full_name = self.full_name.trim();
        let phone = self.phone.trim();
        if full_name.is_empty() {
            return Err("Enter the client's full name");
        }
        if phone.is_empty() {
            return Err("Enter the client's phone number");
        }
        Ok(ClientInput { full_name: full_name.to_owned(), phone: phone.to_owned(), sex: self.sex })
    }
}

#[component]
pub fn ClientForm(
    draft: RwSignal<ClientDraft>,
    submit_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label class="form__field">
                "Full name"
                <input
                    class="input"
                    type="text"
                    required
                    prop:value=move || draft.get().full_name
                    on:input=move |ev| draft.update(|d| d.full_name = event_target_value(&ev))
                />
            </label>
            <label class="form__field">
                "Phone"
                <input
                    class="input"
                    type="tel"
                    required
                    prop:value=move || draft.get().phone
                    on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                />
            </label>
            <label class="form__field">
                "Sex"
                <select
                    class="input"
                    on:change=move |ev| {
                        if let Some(sex) = Sex::parse(&event_target_value(&ev)) {
                            draft.update(|d| d.sex = sex);
                        }
                    }
                >
                    {Sex::ALL
                        .into_iter()
                        .map(|sex| {
                            view! {
                                <option value=sex.as_str() selected=move || draft.get().sex == sex>
                                    {sex.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
        </form>
    }
}
