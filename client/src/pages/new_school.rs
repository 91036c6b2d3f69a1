//! School registration form.

#[cfg(test)]
#[path = "new_school_test.rs"]
mod new_school_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde_json::{Value, json};

use crate::components::field_message::FieldMessage;
use crate::components::test_page_layout::TestPageLayout;
use crate::schema::{Schema, SchoolSchema};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

pub(crate) fn school_input(name: &str, contact: &str, address: &str) -> Value {
    json!({ "name": name.trim(), "contact": contact.trim(), "address": address.trim() })
}

#[component]
pub fn NewSchoolPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let name = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let school = match SchoolSchema::validate(&school_input(&name.get(), &contact.get(), &address.get())) {
            Ok(school) => school,
            Err(e) => {
                errors.set(e.field_map());
                return;
            }
        };
        errors.set(BTreeMap::new());
        info.set("Saving school...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_school(&school).await {
                Ok(record) => {
                    name.set(String::new());
                    contact.set(String::new());
                    address.set(String::new());
                    info.set(format!("Saved {} ({}).", record.school.name, record.id));
                }
                Err(e) => info.set(format!("Could not save school: {e}")),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = school;
        }
    };

    let field = move |label: &'static str, path: &'static str, signal: RwSignal<String>| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
            <FieldMessage errors=errors path=path/>
        }
    };

    view! {
        <TestPageLayout title="Register School">
            <form class="form school-form" on:submit=on_submit>
                {field("Name", "name", name)}
                {field("Contact", "contact", contact)}
                {field("Address", "address", address)}
                <button class="btn btn--primary" type="submit">"Save school"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form__info">{move || info.get()}</p>
            </Show>
        </TestPageLayout>
    }
}
